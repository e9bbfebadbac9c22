use thiserror::Error;

use crate::error::index::IndexError;

/// Errors raised by the platform's repositories.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Database operation error from SeaORM.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The requested entity does not exist.
    ///
    /// Returned by `get_by_id` for unknown ids and by `delete` when the row is
    /// already gone.
    ///
    /// # Fields
    /// - `kind` - Entity kind, such as `"page"`
    /// - `id` - Identifier that was looked up
    #[error("No {kind} with id {id} exists")]
    NoSuchEntity { kind: &'static str, id: String },

    /// Deleting this kind of entity requires the secure area to be registered.
    ///
    /// # Fields
    /// - `kind` - Entity kind whose deletion was refused
    #[error("Deleting a {kind} is only allowed inside the secure area")]
    SecureAreaRequired { kind: &'static str },

    /// An index update dispatched by a save failed.
    ///
    /// The index error is kept as `source()` so callers can inspect it.
    #[error("Index update failed")]
    Index(#[from] IndexError),
}

impl PlatformError {
    /// Whether this error reports an entity that does not exist.
    ///
    /// Covers both the repositories' own `NoSuchEntity` and SeaORM's
    /// `RecordNotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlatformError::NoSuchEntity { .. }
                | PlatformError::Database(sea_orm::DbErr::RecordNotFound(_))
        )
    }
}
