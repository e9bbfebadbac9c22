use thiserror::Error;

/// Phrase carried by every error that reports an index update attempted inside an
/// open database transaction.
pub const TRANSACTION_OPEN_SIGNATURE: &str = "while a database transaction is open";

/// Errors raised by the index scheduler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// An immediate index update was requested while the caller still holds an
    /// enclosing database transaction.
    ///
    /// # Fields
    /// - `indexer` - Name of the index, such as `"catalog_category_product"`
    /// - `entity_id` - Row that would have been reindexed
    #[error("Index {indexer} cannot be updated for entity {entity_id} while a database transaction is open")]
    TransactionOpen { indexer: &'static str, entity_id: i32 },
}
