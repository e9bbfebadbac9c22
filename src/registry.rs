//! Per-test registry of fixture pools, one per entity kind.
//!
//! Test setup decides which pools exist; a pool that was never set up is a
//! test-authoring mistake reported as `FixtureError::PoolNotInitialized`.
//!
//! ```rust,ignore
//! let mut fixtures = FixtureRegistry::new(&platform).with_pages().with_categories();
//!
//! let page = create_page(&platform).await?;
//! fixtures.pages()?.add(page);
//!
//! fixtures.rollback().await?;
//! ```

use tracing::warn;

use crate::{
    error::FixtureError,
    fixture::{pool::FixturePool, repository::FixtureEntity},
    platform::{
        data::{
            attribute::AttributeRepository, cart::CartRepository, cart_rule::CartRuleRepository,
            category::CategoryRepository, page::PageRepository, store::StoreRepository,
        },
        model::{
            attribute::Attribute, cart::Cart, cart_rule::CartRule, category::Category, page::Page,
            store::Store,
        },
        Platform,
    },
};

/// The fixture pools of one test case.
pub struct FixtureRegistry<'a> {
    platform: &'a Platform,
    stores: Option<FixturePool<StoreRepository<'a>>>,
    pages: Option<FixturePool<PageRepository<'a>>>,
    categories: Option<FixturePool<CategoryRepository<'a>>>,
    attributes: Option<FixturePool<AttributeRepository<'a>>>,
    cart_rules: Option<FixturePool<CartRuleRepository<'a>>>,
    carts: Option<FixturePool<CartRepository<'a>>>,
}

impl<'a> FixtureRegistry<'a> {
    /// Creates a registry without any pool.
    pub fn new(platform: &'a Platform) -> Self {
        Self {
            platform,
            stores: None,
            pages: None,
            categories: None,
            attributes: None,
            cart_rules: None,
            carts: None,
        }
    }

    pub fn platform(&self) -> &'a Platform {
        self.platform
    }

    pub fn with_stores(mut self) -> Self {
        self.stores = Some(FixturePool::new(self.platform.stores()));
        self
    }

    pub fn with_pages(mut self) -> Self {
        self.pages = Some(FixturePool::new(self.platform.pages()));
        self
    }

    pub fn with_categories(mut self) -> Self {
        self.categories = Some(FixturePool::new(self.platform.categories()));
        self
    }

    pub fn with_attributes(mut self) -> Self {
        self.attributes = Some(FixturePool::new(self.platform.attributes()));
        self
    }

    pub fn with_cart_rules(mut self) -> Self {
        self.cart_rules = Some(FixturePool::new(self.platform.cart_rules()));
        self
    }

    pub fn with_carts(mut self) -> Self {
        self.carts = Some(FixturePool::new(self.platform.carts()));
        self
    }

    /// Sets up a pool for every entity kind.
    pub fn with_all_pools(self) -> Self {
        self.with_stores()
            .with_pages()
            .with_categories()
            .with_attributes()
            .with_cart_rules()
            .with_carts()
    }

    pub fn stores(&mut self) -> Result<&mut FixturePool<StoreRepository<'a>>, FixtureError> {
        initialized(self.stores.as_mut(), Store::KIND)
    }

    pub fn pages(&mut self) -> Result<&mut FixturePool<PageRepository<'a>>, FixtureError> {
        initialized(self.pages.as_mut(), Page::KIND)
    }

    pub fn categories(
        &mut self,
    ) -> Result<&mut FixturePool<CategoryRepository<'a>>, FixtureError> {
        initialized(self.categories.as_mut(), Category::KIND)
    }

    pub fn attributes(
        &mut self,
    ) -> Result<&mut FixturePool<AttributeRepository<'a>>, FixtureError> {
        initialized(self.attributes.as_mut(), Attribute::KIND)
    }

    pub fn cart_rules(
        &mut self,
    ) -> Result<&mut FixturePool<CartRuleRepository<'a>>, FixtureError> {
        initialized(self.cart_rules.as_mut(), CartRule::KIND)
    }

    pub fn carts(&mut self) -> Result<&mut FixturePool<CartRepository<'a>>, FixtureError> {
        initialized(self.carts.as_mut(), Cart::KIND)
    }

    /// Rolls back every pool that was set up, dependents first.
    ///
    /// Carts go first and store views last, since the other kinds reference store
    /// views. Every pool is rolled back even when an earlier one fails.
    ///
    /// # Returns
    /// - `Ok(())` - Every pool rolled back
    /// - `Err(FixtureError)` - The first failure; later pools were still attempted
    pub async fn rollback(&mut self) -> Result<(), FixtureError> {
        let mut first_error = None;

        if let Some(pool) = self.carts.as_mut() {
            keep_first(&mut first_error, pool.rollback().await);
        }
        if let Some(pool) = self.cart_rules.as_mut() {
            keep_first(&mut first_error, pool.rollback().await);
        }
        if let Some(pool) = self.pages.as_mut() {
            keep_first(&mut first_error, pool.rollback().await);
        }
        if let Some(pool) = self.attributes.as_mut() {
            keep_first(&mut first_error, pool.rollback().await);
        }
        if let Some(pool) = self.categories.as_mut() {
            keep_first(&mut first_error, pool.rollback().await);
        }
        if let Some(pool) = self.stores.as_mut() {
            keep_first(&mut first_error, pool.rollback().await);
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn initialized<T>(pool: Option<T>, kind: &'static str) -> Result<T, FixtureError> {
    pool.ok_or(FixtureError::PoolNotInitialized { pool: kind })
}

fn keep_first(first_error: &mut Option<FixtureError>, result: Result<(), FixtureError>) {
    if let Err(err) = result {
        warn!("Fixture rollback failed: {}", err);
        first_error.get_or_insert(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::{create_cart, create_category, create_page, CartBuilder, StoreBuilder},
        fixture::{EntityBuilder, Repository},
        platform::testing::storefront_platform,
    };

    #[tokio::test]
    async fn missing_pool_is_not_initialized() {
        let platform = storefront_platform().await;
        let mut fixtures = FixtureRegistry::new(&platform).with_pages();

        assert!(fixtures.pages().is_ok());
        assert!(matches!(
            fixtures.carts(),
            Err(FixtureError::PoolNotInitialized { pool: "cart" })
        ));
    }

    #[tokio::test]
    async fn rolls_back_every_pool() -> Result<(), FixtureError> {
        let platform = storefront_platform().await;
        let mut fixtures = FixtureRegistry::new(&platform).with_all_pools();

        let store = StoreBuilder::new(platform.stores()).build().await?;
        let cart = CartBuilder::new(platform.carts())
            .with_store_id(store.id)
            .with_item("simple-1", 1.0)
            .build()
            .await?;
        let page = create_page(&platform).await?;
        let category = create_category(&platform).await?;

        fixtures.stores()?.add(store.clone());
        fixtures.carts()?.add(cart.clone());
        fixtures.pages()?.add(page.clone());
        fixtures.categories()?.add(category.clone());

        fixtures.rollback().await?;

        assert!(fixtures.carts()?.is_empty());
        assert!(platform.stores().get_by_id(store.id).await.unwrap_err().is_not_found());
        assert!(platform.carts().get_by_id(cart.model.id).await.unwrap_err().is_not_found());
        assert!(platform.pages().get_by_id(page.model.id).await.unwrap_err().is_not_found());
        assert!(platform
            .categories()
            .get_by_id(category.model.id)
            .await
            .unwrap_err()
            .is_not_found());

        fixtures.rollback().await?;

        Ok(())
    }

    #[tokio::test]
    async fn tolerates_entities_deleted_elsewhere() -> Result<(), FixtureError> {
        let platform = storefront_platform().await;
        let mut fixtures = FixtureRegistry::new(&platform).with_carts().with_stores();

        let store = StoreBuilder::new(platform.stores()).build().await?;
        let cart = create_cart(&platform).await?;
        fixtures.stores()?.add(store.clone());
        fixtures.carts()?.add(cart.clone());

        platform.carts().delete(&cart).await?;
        fixtures.rollback().await?;

        assert!(!platform.secure_area().is_registered());
        assert!(platform.stores().get_by_id(store.id).await.unwrap_err().is_not_found());

        Ok(())
    }

    #[test]
    fn keeps_first_rollback_error() {
        let mut first_error = None;

        keep_first(&mut first_error, Ok(()));
        keep_first(
            &mut first_error,
            Err(FixtureError::PoolLookup {
                key: "first".to_string(),
            }),
        );
        keep_first(
            &mut first_error,
            Err(FixtureError::PoolNotInitialized { pool: "page" }),
        );

        assert!(matches!(
            first_error,
            Some(FixtureError::PoolLookup { ref key }) if key == "first"
        ));
    }
}
