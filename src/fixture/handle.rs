use crate::{
    error::FixtureError,
    fixture::{
        repository::{FixtureEntity, Repository},
        rollback,
    },
};

/// Read-only handle to one entity created for a test.
///
/// The identifier and natural key are captured when the handle is created. The
/// fixture does not assume exclusive ownership of the stored row; it only knows how to
/// delete it.
#[derive(Clone, Debug)]
pub struct Fixture<E: FixtureEntity> {
    entity: E,
    id: E::Id,
    natural_key: String,
}

impl<E: FixtureEntity> Fixture<E> {
    /// Wraps a persisted entity.
    pub fn new(entity: E) -> Self {
        let id = entity.id();
        let natural_key = entity.natural_key();
        Self {
            entity,
            id,
            natural_key,
        }
    }

    /// The wrapped entity as it was when the fixture was created.
    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn id(&self) -> E::Id {
        self.id.clone()
    }

    /// Slug, code or other human-readable key of the entity.
    pub fn natural_key(&self) -> &str {
        &self.natural_key
    }

    pub fn into_entity(self) -> E {
        self.entity
    }

    /// Deletes the wrapped entity.
    ///
    /// Same tolerance as pool rollback: an entity that is already gone is not an error.
    ///
    /// # Arguments
    /// - `repository` - Repository of the entity's kind
    ///
    /// # Returns
    /// - `Ok(())` - The entity no longer exists
    /// - `Err(FixtureError)` - Deletion failed for any other reason
    pub async fn rollback<R>(&self, repository: &R) -> Result<(), FixtureError>
    where
        R: Repository<Entity = E>,
    {
        rollback::execute(repository, std::slice::from_ref(self)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::testing::MemoryRepository;

    #[tokio::test]
    async fn rollback_deletes_entity_and_tolerates_repeat() -> Result<(), FixtureError> {
        let repository = MemoryRepository::new();
        let fixture = Fixture::new(repository.insert("tdd-widget"));

        assert_eq!(fixture.natural_key(), "tdd-widget");

        fixture.rollback(&repository).await?;
        fixture.rollback(&repository).await?;

        let err = FixtureError::from(repository.get_by_id(fixture.id()).await.unwrap_err());
        assert!(err.is_not_found());
        assert_eq!(repository.deleted(), vec![fixture.id()]);

        Ok(())
    }

    #[test]
    fn into_entity_returns_wrapped_entity() {
        let repository = MemoryRepository::new();
        let widget = repository.insert("kept");
        let fixture = Fixture::new(widget.clone());

        assert_eq!(fixture.id(), widget.id);
        assert_eq!(fixture.into_entity(), widget);
    }

    #[test]
    fn only_platform_not_found_is_not_found() {
        let lookup = FixtureError::PoolLookup {
            key: "last".to_string(),
        };

        assert!(!lookup.is_not_found());
    }
}
