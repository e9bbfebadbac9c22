//! The privileged-context gate.
//!
//! Some entities (store views, categories) may only be deleted while the secure area
//! is registered. Registration is scoped: `register` returns a guard that restores
//! the previous state when dropped, so the flag can never be left set after an error
//! or a panic.

use std::{
    future::Future,
    sync::atomic::{AtomicBool, Ordering},
};

use tracing::debug;

#[derive(Debug, Default)]
pub struct SecureArea {
    registered: AtomicBool,
}

impl SecureArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a secure-area guard is currently alive.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::SeqCst)
    }

    /// Registers the secure area until the returned guard is dropped.
    ///
    /// Guards nest: dropping an inner guard restores the state the outer one set.
    pub fn register(&self) -> SecureAreaGuard<'_> {
        let previous = self.registered.swap(true, Ordering::SeqCst);
        debug!("Secure area registered");
        SecureAreaGuard {
            area: self,
            previous,
        }
    }

    /// Runs `operation` with the secure area registered.
    ///
    /// The area is registered when the operation starts and released when it finishes,
    /// whatever it returns.
    pub async fn run<F: Future>(&self, operation: F) -> F::Output {
        let _guard = self.register();
        operation.await
    }
}

/// Keeps the secure area registered while alive.
#[must_use = "the secure area is released as soon as the guard is dropped"]
pub struct SecureAreaGuard<'a> {
    area: &'a SecureArea,
    previous: bool,
}

impl Drop for SecureAreaGuard<'_> {
    fn drop(&mut self) {
        self.area.registered.store(self.previous, Ordering::SeqCst);
        debug!("Secure area released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_releases_on_drop() {
        let area = SecureArea::new();

        {
            let _guard = area.register();
            assert!(area.is_registered());
        }

        assert!(!area.is_registered());
    }

    #[test]
    fn nested_guard_restores_outer_registration() {
        let area = SecureArea::new();
        let outer = area.register();

        drop(area.register());
        assert!(area.is_registered());

        drop(outer);
        assert!(!area.is_registered());
    }

    #[tokio::test]
    async fn run_releases_after_failed_operation() {
        let area = SecureArea::new();

        let result: Result<(), &str> = area
            .run(async {
                assert!(area.is_registered());
                Err("delete refused")
            })
            .await;

        assert!(result.is_err());
        assert!(!area.is_registered());
    }

    #[test]
    fn guard_releases_on_panic() {
        let area = SecureArea::new();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = area.register();
            panic!("deletion blew up");
        }));

        assert!(outcome.is_err());
        assert!(!area.is_registered());
    }
}
