use super::*;

/// Tests that store view rollback runs inside the secure area.
///
/// Expected: rollback succeeds, the store is gone and the secure area is released
#[tokio::test]
async fn store_rollback_uses_secure_area() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;
    let mut stores = FixturePool::new(platform.stores());

    let store = StoreBuilder::new(platform.stores())
        .with_code("store_fr")
        .build()
        .await?;
    assert_eq!(store.name, "Store Fr");
    assert!(store.is_active);

    stores.add_with_key(store.clone(), "fr");
    stores.rollback().await?;

    assert!(!platform.secure_area().is_registered());
    assert!(platform.stores().get_by_id(store.id).await.unwrap_err().is_not_found());

    Ok(())
}

/// Tests that a store view outside any pool cannot be deleted directly.
///
/// Expected: Err(SecureAreaRequired)
#[tokio::test]
async fn direct_store_delete_requires_secure_area() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;
    let store = StoreBuilder::new(platform.stores()).build().await?;

    let result = platform.stores().delete(&store).await;

    assert!(matches!(result, Err(PlatformError::SecureAreaRequired { .. })));

    Ok(())
}
