use super::*;
use crate::platform::model::cart::{CartDraft, CartItemDraft};

/// Tests saving a cart with items and finding it by masked id.
///
/// Expected: Ok with both items in insertion order
#[tokio::test]
async fn saves_cart_with_items() -> Result<(), PlatformError> {
    let platform = storefront_platform().await;

    let saved = platform
        .carts()
        .save(CartDraft {
            masked_id: "a1b2c3".to_string(),
            store_id: 1,
            customer_email: None,
            is_active: true,
            items: vec![
                CartItemDraft {
                    sku: "simple-1".to_string(),
                    qty: 2.0,
                },
                CartItemDraft {
                    sku: "simple-2".to_string(),
                    qty: 1.0,
                },
            ],
            items_count: 2,
            items_qty: 3.0,
        })
        .await?;
    let found = platform.carts().get_by_masked_id("a1b2c3").await?;

    assert_eq!(found, saved);
    assert_eq!(saved.items.len(), 2);
    assert_eq!(saved.items[0].sku, "simple-1");
    assert_eq!(saved.model.items_qty, 3.0);

    Ok(())
}

/// Tests deleting a cart removes its items.
///
/// Expected: Ok and no cart item rows left
#[tokio::test]
async fn deletes_cart_and_items() -> Result<(), PlatformError> {
    let platform = storefront_platform().await;
    let saved = platform
        .carts()
        .save(CartDraft {
            masked_id: "gone".to_string(),
            store_id: 1,
            is_active: true,
            items: vec![CartItemDraft {
                sku: "simple-1".to_string(),
                qty: 1.0,
            }],
            items_count: 1,
            items_qty: 1.0,
            ..Default::default()
        })
        .await?;

    platform.carts().delete(&saved).await?;

    let items = entity::prelude::CartItem::find().count(platform.db()).await?;
    assert_eq!(items, 0);
    assert!(platform
        .carts()
        .get_by_masked_id("gone")
        .await
        .unwrap_err()
        .is_not_found());

    Ok(())
}
