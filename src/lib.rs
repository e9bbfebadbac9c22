//! Storefront Fixtures
//!
//! Test-data lifecycle for a storefront platform: integration tests create fully
//! configured entities (store views, CMS pages, categories, product attributes, cart
//! rules, carts) with minimal setup, look them up again by key, and remove them at
//! teardown, even when part of the setup failed.
//!
//! # Overview
//!
//! - **Fixture core** (`fixture`): the generic Builder + Fixture + Pool + Rollback
//!   shape and the classifier for index updates refused inside a transaction
//! - **Builders** (`builder`): one builder per entity kind with its default rules
//! - **Registry** (`registry`): the pools of one test case, rolled back together
//! - **Platform** (`platform`): the SeaORM-backed repositories, secure area and index
//!   scheduler the fixtures are created through
//! - **Config** (`config`): environment configuration of the platform
//! - **Error** (`error`): error types shared by all of the above
//!
//! # Usage
//!
//! ```rust,ignore
//! let platform = Platform::with_config(db, &Config::from_env()?);
//! let mut fixtures = FixtureRegistry::new(&platform).with_pages();
//!
//! let page = PageBuilder::new(platform.pages())
//!     .with_identifier("tdd-page")
//!     .build()
//!     .await?;
//! fixtures.pages()?.add(page);
//!
//! // ... exercise the storefront ...
//!
//! fixtures.rollback().await?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod fixture;
pub mod platform;
pub mod registry;
