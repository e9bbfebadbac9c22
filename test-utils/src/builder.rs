use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with an SQLite
/// database. Add entity tables (or one of the table groups), then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Store, CmsPage};
///
/// let test = TestBuilder::new()
///     .with_table(Store)
///     .with_table(CmsPage)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    ///
    /// Every statement carries `IF NOT EXISTS`, so table groups that share tables
    /// (the `store` table in particular) can be combined freely.
    tables: Vec<TableCreateStatement>,

    /// Whether the admin and default store views are inserted after table creation.
    seed_stores: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            seed_stores: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut stmt = schema.create_table_from_entity(entity);
        stmt.if_not_exists();
        self.tables.push(stmt);
        self
    }

    /// Adds the store view table and seeds the two system store views.
    ///
    /// Every other table group depends on this one, since per-store values and
    /// assignments reference `store.id`. The seeded rows are:
    /// - `0` / `admin` - the default scope
    /// - `1` / `default` - the default storefront view
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_store_tables(mut self) -> Self {
        self.seed_stores = true;
        self.with_table(Store)
    }

    /// Adds the tables required for CMS pages.
    pub fn with_page_tables(self) -> Self {
        self.with_store_tables()
            .with_table(CmsPage)
            .with_table(CmsPageStore)
    }

    /// Adds the tables required for categories and their per-store values.
    pub fn with_category_tables(self) -> Self {
        self.with_store_tables()
            .with_table(Category)
            .with_table(CategoryStoreValue)
    }

    /// Adds the tables required for product attributes, their labels and options.
    pub fn with_attribute_tables(self) -> Self {
        self.with_store_tables()
            .with_table(Attribute)
            .with_table(AttributeLabel)
            .with_table(AttributeOption)
    }

    /// Adds the tables required for cart price rules.
    pub fn with_cart_rule_tables(self) -> Self {
        self.with_store_tables()
            .with_table(CartRule)
            .with_table(CartRuleLabel)
    }

    /// Adds the tables required for carts and cart items.
    pub fn with_cart_tables(self) -> Self {
        self.with_store_tables()
            .with_table(Cart)
            .with_table(CartItem)
    }

    /// Adds every storefront table.
    ///
    /// Use this for tests that span several entity kinds, such as the fixture
    /// registry tests.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_storefront_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_storefront_tables(self) -> Self {
        self.with_page_tables()
            .with_category_tables()
            .with_attribute_tables()
            .with_cart_rule_tables()
            .with_cart_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Connects to the test database, executes all CREATE TABLE statements in the
    /// order they were added, and seeds the system store views when the store table
    /// was requested.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect, create tables or seed rows
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if self.seed_stores {
            setup.seed_system_stores().await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
