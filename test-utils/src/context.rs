use sea_orm::{
    sea_query::TableCreateStatement, ActiveValue, ConnectionTrait, Database, DatabaseConnection,
    EntityTrait,
};

use crate::error::TestError;

/// Database used when `TEST_DATABASE_URL` is not set.
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Test context containing the database connection for one test.
///
/// By default every context gets its own in-memory SQLite database, so tests never
/// share state. Point `TEST_DATABASE_URL` at a file database to inspect what a test
/// leaves behind.
pub struct TestContext {
    /// Optional database connection.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the test database connection.
    ///
    /// Loads `.env` (if present) and connects to `TEST_DATABASE_URL`, falling back to
    /// a private in-memory SQLite database. The connection persists for the lifetime
    /// of this test context.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                dotenvy::dotenv().ok();
                let url = std::env::var("TEST_DATABASE_URL")
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

                tracing::debug!("Connecting test database at {}", url);
                let db = Database::connect(url).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Inserts the admin (`0`) and default (`1`) store views.
    ///
    /// Mirrors what a platform installation provides: the admin scope holding default
    /// values and one storefront view that carts and pages can be assigned to.
    ///
    /// # Returns
    /// - `Ok(())` - Both store views exist
    /// - `Err(TestError::Database)` - Insert failed (for example the store table is missing)
    pub async fn seed_system_stores(&mut self) -> Result<(), TestError> {
        let db = self.database().await?;

        let system_stores = [(0, "admin", "Admin"), (1, "default", "Default Store View")];

        for (id, code, name) in system_stores {
            if entity::prelude::Store::find_by_id(id).one(db).await?.is_some() {
                continue;
            }

            entity::prelude::Store::insert(entity::store::ActiveModel {
                id: ActiveValue::Set(id),
                code: ActiveValue::Set(code.to_string()),
                name: ActiveValue::Set(name.to_string()),
                sort_order: ActiveValue::Set(id),
                is_active: ActiveValue::Set(true),
            })
            .exec_without_returning(db)
            .await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
