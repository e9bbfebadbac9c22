//! The fixture core: one generic Builder + Fixture + Pool + Rollback shape shared by
//! every entity kind.
//!
//! # Overview
//!
//! - **Repository** / **FixtureEntity** (`repository`): what an entity kind has to
//!   provide to take part in the lifecycle
//! - **EntityBuilder** (`build`): immutable configuration accumulator with a single
//!   terminal `build()` that resolves defaults and persists
//! - **Fixture** (`handle`): read-only handle to one persisted entity
//! - **FixturePool** (`pool`): ordered, keyed collection of fixtures with bulk rollback
//! - **rollback** (`rollback`): tolerant deletion of a list of fixtures
//! - **classifier** (`classifier`): recognizes index updates refused inside a transaction
//!
//! # Lifecycle
//!
//! ```rust,ignore
//! let mut pages = FixturePool::new(platform.pages());
//!
//! let page = PageBuilder::new(platform.pages())
//!     .with_identifier("tdd-page")
//!     .build()
//!     .await?;
//! pages.add(page);
//!
//! assert_eq!(pages.last()?.entity().model.title, "Tdd Page");
//!
//! pages.rollback().await?;
//! ```

pub mod build;
pub mod classifier;
pub mod defaults;
pub mod handle;
pub mod pool;
pub mod repository;
pub mod rollback;
pub mod scope;

#[cfg(test)]
pub(crate) mod testing;

pub use build::{persist, EntityBuilder};
pub use handle::Fixture;
pub use pool::{FixturePool, PoolKey};
pub use repository::{EntityId, FixtureEntity, Repository};
pub use scope::{Scoped, StoreId, DEFAULT_STORE_ID};
