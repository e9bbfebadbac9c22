use super::*;
use crate::builder::create_cart;

/// Tests the defaults of an empty cart.
///
/// Expected: random 32-character masked id in store 1, no items
#[tokio::test]
async fn empty_cart_defaults() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;

    let first = create_cart(&platform).await?;
    let second = create_cart(&platform).await?;

    assert_eq!(first.model.masked_id.len(), 32);
    assert_ne!(first.model.masked_id, second.model.masked_id);
    assert_eq!(first.model.store_id, 1);
    assert!(first.model.is_active);
    assert_eq!(first.model.items_count, 0);
    assert!(first.items.is_empty());

    Ok(())
}

/// Tests that item totals are derived from the items.
///
/// Expected: count 2 and quantity 3
#[tokio::test]
async fn totals_follow_items() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;
    let with_one = CartBuilder::new(platform.carts())
        .with_customer_email("customer@example.com")
        .with_item("simple-1", 1.0);
    let with_two = with_one.with_item("simple-2", 2.0);

    let cart = with_two.build().await?;
    let single = with_one.build().await?;

    assert_eq!(cart.model.items_count, 2);
    assert_eq!(cart.model.items_qty, 3.0);
    assert_eq!(cart.items.len(), 2);
    assert_eq!(single.model.items_count, 1);
    assert_eq!(
        cart.model.customer_email.as_deref(),
        Some("customer@example.com")
    );

    Ok(())
}

/// Tests a cart in an unknown store view.
///
/// Expected: the database error propagates unchanged as a platform error
#[tokio::test]
async fn unknown_store_propagates_database_error() {
    let platform = storefront_platform().await;

    let result = CartBuilder::new(platform.carts())
        .with_store_id(999)
        .build()
        .await;

    assert!(matches!(
        result,
        Err(FixtureError::Platform(PlatformError::Database(_)))
    ));
}
