use std::fmt::{Debug, Display};

use crate::{error::PlatformError, platform::secure_area::SecureArea};

/// An entity that a fixture can hold.
///
/// Each kind supplies its identifier and its natural key (slug, code, masked id...).
pub trait FixtureEntity {
    /// Identifier assigned by the platform on save.
    type Id: Clone + Debug + Display + PartialEq;

    /// Entity kind used in log lines and error messages, such as `"page"`.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    fn natural_key(&self) -> String;
}

/// Identifier type of the entities a repository manages.
pub type EntityId<R> = <<R as Repository>::Entity as FixtureEntity>::Id;

/// The persistence operations the fixture core needs from one entity kind.
///
/// `create` hands out an empty, mutable entity shell (the draft) that a builder
/// populates exactly once before passing it to `save`.
#[allow(async_fn_in_trait)]
pub trait Repository {
    type Entity: FixtureEntity;
    type Draft;

    /// Creates a new, empty entity shell.
    fn create(&self) -> Self::Draft;

    /// Persists a populated shell and returns the stored entity with its identifier.
    async fn save(&self, draft: Self::Draft) -> Result<Self::Entity, PlatformError>;

    /// Loads an entity, failing with a not-found error when it does not exist.
    async fn get_by_id(
        &self,
        id: <Self::Entity as FixtureEntity>::Id,
    ) -> Result<Self::Entity, PlatformError>;

    /// Deletes an entity, failing with a not-found error when it is already gone.
    async fn delete(&self, entity: &Self::Entity) -> Result<(), PlatformError>;

    /// Gate that has to be registered around deletions of this kind, if any.
    fn secure_area(&self) -> Option<&SecureArea> {
        None
    }
}

impl<R: Repository> Repository for &R {
    type Entity = R::Entity;
    type Draft = R::Draft;

    fn create(&self) -> Self::Draft {
        (**self).create()
    }

    async fn save(&self, draft: Self::Draft) -> Result<Self::Entity, PlatformError> {
        (**self).save(draft).await
    }

    async fn get_by_id(
        &self,
        id: <Self::Entity as FixtureEntity>::Id,
    ) -> Result<Self::Entity, PlatformError> {
        (**self).get_by_id(id).await
    }

    async fn delete(&self, entity: &Self::Entity) -> Result<(), PlatformError> {
        (**self).delete(entity).await
    }

    fn secure_area(&self) -> Option<&SecureArea> {
        (**self).secure_area()
    }
}
