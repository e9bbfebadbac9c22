//! Deletion of fixtures' entities.
//!
//! Rollback is stateless: it deletes the given fixtures, in the given order, through
//! their repository. Entities that are already gone (for example removed by a cascading
//! delete of their parent) are skipped; any other failure stops the batch and
//! propagates. Kinds whose repository names a secure area get it registered once
//! around the whole batch, and released on every exit path.

use tracing::debug;

use crate::{
    error::FixtureError,
    fixture::{
        handle::Fixture,
        repository::{FixtureEntity, Repository},
    },
};

/// Deletes the entities of `fixtures` in order.
///
/// # Arguments
/// - `repository` - Repository of the fixtures' entity kind
/// - `fixtures` - Fixtures to delete, processed front to back
///
/// # Returns
/// - `Ok(())` - Every entity is gone
/// - `Err(FixtureError::Platform)` - A deletion failed with anything but not-found;
///   fixtures after it were not processed
pub async fn execute<R: Repository>(
    repository: &R,
    fixtures: &[Fixture<R::Entity>],
) -> Result<(), FixtureError> {
    match repository.secure_area() {
        Some(secure_area) => secure_area.run(delete_all(repository, fixtures)).await,
        None => delete_all(repository, fixtures).await,
    }
}

async fn delete_all<R: Repository>(
    repository: &R,
    fixtures: &[Fixture<R::Entity>],
) -> Result<(), FixtureError> {
    let kind = <R::Entity as FixtureEntity>::KIND;

    for fixture in fixtures {
        match repository.delete(fixture.entity()).await {
            Ok(()) => debug!("Rolled back {} {} ({})", kind, fixture.id(), fixture.natural_key()),
            // Deleted by another path already, e.g. cascading from a parent
            Err(err) if err.is_not_found() => {
                debug!("Skipped rollback of {} {}: already deleted", kind, fixture.id())
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
