//! Platforms over a fresh in-memory storefront database, for tests.

use test_utils::builder::TestBuilder;

use crate::{
    config::{Config, IndexMode},
    platform::Platform,
};

/// Platform with every storefront table and the two system store views.
pub async fn storefront_platform() -> Platform {
    storefront_platform_in(IndexMode::UpdateOnSave).await
}

pub async fn storefront_platform_in(index_mode: IndexMode) -> Platform {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();

    Platform::with_config(test.db.unwrap(), &Config { index_mode })
}
