//! Ordered, keyed collection of the fixtures created during one test.
//!
//! The pool is the only tracking mechanism: an entity never added to a pool is not
//! rolled back automatically.

use std::{collections::HashMap, fmt};

use tracing::{debug, info};

use crate::{
    error::FixtureError,
    fixture::{
        handle::Fixture,
        repository::{FixtureEntity, Repository},
        rollback,
    },
};

/// Key under which a fixture is stored in a pool.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PoolKey {
    /// Key chosen by the test.
    Named(String),
    /// Sequential key assigned by `FixturePool::add`, or an explicit numeric key.
    Index(u64),
}

impl From<&str> for PoolKey {
    fn from(key: &str) -> Self {
        PoolKey::Named(key.to_string())
    }
}

impl From<String> for PoolKey {
    fn from(key: String) -> Self {
        PoolKey::Named(key)
    }
}

impl From<u64> for PoolKey {
    fn from(index: u64) -> Self {
        PoolKey::Index(index)
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKey::Named(key) => write!(f, "'{}'", key),
            PoolKey::Index(index) => write!(f, "#{}", index),
        }
    }
}

/// Fixtures of one entity kind, in insertion order, with bulk rollback.
///
/// # Example
///
/// ```rust,ignore
/// let mut categories = FixturePool::new(platform.categories());
///
/// categories.add_with_key(parent, "parent");
/// categories.add(child);
///
/// let child = categories.last()?;
/// let parent = categories.get("parent")?;
///
/// categories.rollback().await?;
/// ```
pub struct FixturePool<R: Repository> {
    repository: R,
    /// Every fixture ever added since the last rollback, in insertion order.
    fixtures: Vec<Fixture<R::Entity>>,
    /// Position in `fixtures` of the fixture currently stored under each key.
    keys: HashMap<PoolKey, usize>,
    /// Next sequential key; only advanced by `add`.
    next_index: u64,
}

impl<R: Repository> FixturePool<R> {
    /// Creates an empty pool deleting through `repository`.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            fixtures: Vec::new(),
            keys: HashMap::new(),
            next_index: 0,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Wraps `entity` in a fixture stored under the next sequential key.
    ///
    /// Sequential keys count up from `0` per pool and skip numbers already taken by
    /// explicit numeric keys.
    ///
    /// # Returns
    /// - `PoolKey` - The key the fixture was stored under
    pub fn add(&mut self, entity: R::Entity) -> PoolKey {
        while self.keys.contains_key(&PoolKey::Index(self.next_index)) {
            self.next_index += 1;
        }
        let key = PoolKey::Index(self.next_index);
        self.next_index += 1;

        self.insert(entity, key.clone());
        key
    }

    /// Wraps `entity` in a fixture stored under `key`.
    ///
    /// When `key` is already in use it is re-pointed at the new fixture. The displaced
    /// fixture is no longer reachable through `get` but is still rolled back.
    ///
    /// # Returns
    /// - `PoolKey` - The key the fixture was stored under
    pub fn add_with_key(&mut self, entity: R::Entity, key: impl Into<PoolKey>) -> PoolKey {
        let key = key.into();
        self.insert(entity, key.clone());
        key
    }

    fn insert(&mut self, entity: R::Entity, key: PoolKey) {
        let fixture = Fixture::new(entity);
        debug!(
            "Added {} {} to pool under {}",
            <R::Entity as FixtureEntity>::KIND,
            fixture.id(),
            key
        );

        self.fixtures.push(fixture);
        if self.keys.insert(key.clone(), self.fixtures.len() - 1).is_some() {
            debug!("Pool key {} now refers to a newer fixture", key);
        }
    }

    /// Returns the fixture stored under `key`.
    ///
    /// # Returns
    /// - `Ok(&Fixture)` - The fixture currently stored under `key`
    /// - `Err(FixtureError::PoolLookup)` - No fixture is stored under `key`
    pub fn get(&self, key: impl Into<PoolKey>) -> Result<&Fixture<R::Entity>, FixtureError> {
        let key = key.into();
        self.keys
            .get(&key)
            .and_then(|&position| self.fixtures.get(position))
            .ok_or_else(|| FixtureError::PoolLookup {
                key: key.to_string(),
            })
    }

    /// Returns the most recently added fixture, whatever key it was stored under.
    ///
    /// # Returns
    /// - `Ok(&Fixture)` - The last fixture added
    /// - `Err(FixtureError::PoolLookup)` - The pool is empty
    pub fn last(&self) -> Result<&Fixture<R::Entity>, FixtureError> {
        self.fixtures.last().ok_or_else(|| FixtureError::PoolLookup {
            key: "last".to_string(),
        })
    }

    /// Fixtures in insertion order, including displaced ones.
    pub fn iter(&self) -> impl Iterator<Item = &Fixture<R::Entity>> {
        self.fixtures.iter()
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Deletes every fixture's entity in insertion order and empties the pool.
    ///
    /// The pool is cleared before the first deletion, so whether or not a deletion
    /// fails, a second call never re-attempts fixtures of the first.
    ///
    /// # Returns
    /// - `Ok(())` - Every entity is gone (or there was nothing to roll back)
    /// - `Err(FixtureError)` - A deletion failed; remaining fixtures were not deleted
    pub async fn rollback(&mut self) -> Result<(), FixtureError> {
        let fixtures = std::mem::take(&mut self.fixtures);
        self.keys.clear();
        self.next_index = 0;

        if fixtures.is_empty() {
            return Ok(());
        }

        info!(
            "Rolling back {} {} fixture(s)",
            fixtures.len(),
            <R::Entity as FixtureEntity>::KIND
        );
        rollback::execute(&self.repository, &fixtures).await
    }
}
