//! The shape every entity builder shares.

use tracing::debug;

use crate::{
    error::FixtureError,
    fixture::{
        classifier,
        repository::{FixtureEntity, Repository},
    },
};

/// Immutable configuration for one entity, persisted on demand.
///
/// Implementors keep every field as "unset" until a `with_*` call sets it, and each
/// `with_*` call returns a new builder instead of modifying the receiver. `realize`
/// resolves defaults for the fields still unset, in dependency order, and writes the
/// result into a fresh entity shell.
#[allow(async_fn_in_trait)]
pub trait EntityBuilder: Sized {
    type Repository: Repository;

    fn repository(&self) -> &Self::Repository;

    /// Populates an empty shell with the configured values and computed defaults.
    fn realize(&self, draft: &mut <Self::Repository as Repository>::Draft);

    /// Resolves defaults and persists the entity once.
    ///
    /// # Returns
    /// - `Ok(Entity)` - The persisted entity with its assigned identifier
    /// - `Err(FixtureError::SideEffectInTransaction)` - An index update refused to run
    ///   inside the caller's open transaction
    /// - `Err(FixtureError::Platform)` - Saving failed for any other reason
    async fn build(self) -> Result<<Self::Repository as Repository>::Entity, FixtureError> {
        let repository = self.repository();
        let mut draft = repository.create();
        self.realize(&mut draft);

        persist(repository, draft).await
    }
}

/// Saves a populated shell, classifying the error on failure.
pub async fn persist<R: Repository>(repository: &R, draft: R::Draft) -> Result<R::Entity, FixtureError> {
    match repository.save(draft).await {
        Ok(entity) => {
            debug!(
                "Persisted {} {} ({})",
                <R::Entity as FixtureEntity>::KIND,
                entity.id(),
                entity.natural_key()
            );
            Ok(entity)
        }
        Err(err) => Err(classifier::classify(err)),
    }
}

/// Returns a copy of `builder` with `change` applied.
pub(crate) fn amend<B: Clone>(builder: &B, change: impl FnOnce(&mut B)) -> B {
    let mut next = builder.clone();
    change(&mut next);
    next
}
