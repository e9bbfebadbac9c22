//! Storefront Fixtures Test Utils
//!
//! Provides the in-memory database environment used by the fixture crate's own
//! integration tests. A test describes which storefront tables it needs through
//! `TestBuilder`, and receives a `TestContext` holding a ready SQLite connection.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn builds_page() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_page_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
