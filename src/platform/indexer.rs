//! Index updates dispatched as a side effect of saving.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::{config::IndexMode, error::IndexError};

/// Index refreshed when a category is saved.
pub const CATEGORY_PRODUCT_INDEX: &str = "catalog_category_product";

/// Index refreshed when a searchable attribute is saved.
pub const SEARCH_INDEX: &str = "catalogsearch_fulltext";

/// One requested index update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexJob {
    pub indexer: &'static str,
    pub entity_id: i32,
}

/// Runs or queues index updates according to the configured `IndexMode`.
#[derive(Debug)]
pub struct IndexScheduler {
    mode: IndexMode,
    /// Updates that ran immediately.
    applied: Mutex<Vec<IndexJob>>,
    /// Updates waiting for the scheduled run.
    backlog: Mutex<Vec<IndexJob>>,
}

impl IndexScheduler {
    pub fn new(mode: IndexMode) -> Self {
        Self {
            mode,
            applied: Mutex::new(Vec::new()),
            backlog: Mutex::new(Vec::new()),
        }
    }

    pub fn mode(&self) -> IndexMode {
        self.mode
    }

    /// Runs or queues an index update.
    ///
    /// # Arguments
    /// - `job` - The update to perform
    /// - `in_transaction` - Whether the caller holds an enclosing database transaction
    ///
    /// # Returns
    /// - `Ok(())` - The update ran, or was queued
    /// - `Err(IndexError::TransactionOpen)` - Immediate mode and a transaction is open
    pub fn dispatch(&self, job: IndexJob, in_transaction: bool) -> Result<(), IndexError> {
        match self.mode {
            IndexMode::UpdateOnSave => {
                if in_transaction {
                    return Err(IndexError::TransactionOpen {
                        indexer: job.indexer,
                        entity_id: job.entity_id,
                    });
                }
                debug!("Updated index {} for entity {}", job.indexer, job.entity_id);
                self.applied
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(job);
            }
            IndexMode::Scheduled => {
                debug!("Queued index {} for entity {}", job.indexer, job.entity_id);
                self.backlog
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(job);
            }
        }
        Ok(())
    }

    /// Updates that ran immediately, oldest first.
    pub fn applied(&self) -> Vec<IndexJob> {
        self.applied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Updates queued for the scheduled run, oldest first.
    pub fn backlog(&self) -> Vec<IndexJob> {
        self.backlog
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
