//! The storefront platform the fixtures are created in.
//!
//! `Platform` is the service locator: it owns the database connection and the
//! process-level collaborators (secure area, index scheduler, enclosing-transaction
//! tracker) and hands out one repository per entity kind.
//!
//! # Architecture
//!
//! - **Model Layer** (`model/`) - Entity shells (drafts) and the aggregates repositories return
//! - **Data Layer** (`data/`) - Repositories performing the SeaORM reads, writes and deletes
//! - **Secure Area** (`secure_area`) - Gate required for deleting system entities
//! - **Indexer** (`indexer`) - Index updates dispatched by saves

pub mod data;
pub mod indexer;
pub mod model;
pub mod secure_area;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::atomic::{AtomicUsize, Ordering};

use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::{
    config::Config,
    platform::{
        data::{
            attribute::AttributeRepository, cart::CartRepository, cart_rule::CartRuleRepository,
            category::CategoryRepository, page::PageRepository, store::StoreRepository,
        },
        indexer::IndexScheduler,
        secure_area::SecureArea,
    },
};

pub struct Platform {
    db: DatabaseConnection,
    secure_area: SecureArea,
    indexer: IndexScheduler,
    /// Number of enclosing transactions the caller currently holds.
    open_transactions: AtomicUsize,
}

impl Platform {
    /// Creates a platform over `db` with the default configuration.
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_config(db, &Config::default())
    }

    pub fn with_config(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            secure_area: SecureArea::new(),
            indexer: IndexScheduler::new(config.index_mode),
            open_transactions: AtomicUsize::new(0),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn secure_area(&self) -> &SecureArea {
        &self.secure_area
    }

    pub fn indexer(&self) -> &IndexScheduler {
        &self.indexer
    }

    /// Marks the caller as running inside a database transaction until the returned
    /// guard is dropped.
    ///
    /// Test harnesses that wrap each test in a transaction for isolation hold one of
    /// these for the duration of the test. While any is alive, immediate index updates
    /// refuse to run.
    pub fn open_transaction(&self) -> OpenTransaction<'_> {
        let depth = self.open_transactions.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Entered enclosing transaction (depth {})", depth);
        OpenTransaction { platform: self }
    }

    /// Whether the caller currently holds an enclosing transaction.
    pub fn in_transaction(&self) -> bool {
        self.open_transactions.load(Ordering::SeqCst) > 0
    }

    pub fn stores(&self) -> StoreRepository<'_> {
        StoreRepository::new(self)
    }

    pub fn pages(&self) -> PageRepository<'_> {
        PageRepository::new(self)
    }

    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(self)
    }

    pub fn attributes(&self) -> AttributeRepository<'_> {
        AttributeRepository::new(self)
    }

    pub fn cart_rules(&self) -> CartRuleRepository<'_> {
        CartRuleRepository::new(self)
    }

    pub fn carts(&self) -> CartRepository<'_> {
        CartRepository::new(self)
    }
}

/// Enclosing transaction marker returned by `Platform::open_transaction`.
#[must_use = "the transaction is closed as soon as the guard is dropped"]
pub struct OpenTransaction<'a> {
    platform: &'a Platform,
}

impl Drop for OpenTransaction<'_> {
    fn drop(&mut self) {
        self.platform.open_transactions.fetch_sub(1, Ordering::SeqCst);
    }
}
