//! Error types for the fixture core and the platform it drives.
//!
//! `FixtureError` is what builders, pools, rollback and the registry return. Errors
//! raised by the platform's repositories travel inside it unchanged as
//! `FixtureError::Platform`, except for the one failure mode the transaction
//! classifier recognizes, which is re-raised as `FixtureError::SideEffectInTransaction`.

pub mod config;
pub mod index;
pub mod platform;

use thiserror::Error;

pub use config::ConfigError;
pub use index::IndexError;
pub use platform::PlatformError;

/// Top-level error type of the fixture core.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// No fixture is stored under the requested key, or the pool is empty.
    ///
    /// Expected in negative tests and always recoverable by the caller.
    ///
    /// # Fields
    /// - `key` - The key that was requested, or `"last"` for the most recent fixture
    #[error("No fixture found in pool for key {key}")]
    PoolLookup { key: String },

    /// A registry accessor was used for a pool that test setup never constructed.
    ///
    /// Signals a test-authoring mistake rather than a runtime condition.
    ///
    /// # Fields
    /// - `pool` - Entity kind of the missing pool
    #[error("Fixture pool for {pool} was not initialized by test setup")]
    PoolNotInitialized { pool: &'static str },

    /// Saving succeeded up to a secondary side effect (an index update) that refused to
    /// run because the caller is already inside a database transaction.
    ///
    /// # Fields
    /// - `source` - The original platform error
    #[error("Side effect of saving failed because a database transaction is already open")]
    SideEffectInTransaction {
        #[source]
        source: PlatformError,
    },

    /// Any other error raised by the platform, propagated unchanged.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl FixtureError {
    /// Whether this error reports an entity that does not exist.
    ///
    /// # Returns
    /// - `true` - The wrapped platform error is a not-found error
    /// - `false` - Any other error
    pub fn is_not_found(&self) -> bool {
        matches!(self, FixtureError::Platform(err) if err.is_not_found())
    }
}

impl From<sea_orm::DbErr> for FixtureError {
    fn from(err: sea_orm::DbErr) -> Self {
        FixtureError::Platform(PlatformError::Database(err))
    }
}
