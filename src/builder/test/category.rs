use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use crate::builder::create_category;

/// Tests the defaults of a top-level category and its child.
///
/// Expected: default names, slugified URL keys, and the child's path under its parent
#[tokio::test]
async fn child_defaults_derive_from_parent() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;

    let parent = create_category(&platform).await?;
    let child = CategoryBuilder::child_of(platform.categories(), &parent)
        .build()
        .await?;

    assert_eq!(parent.model.name, "Top Level Category");
    assert_eq!(parent.model.url_key, "top-level-category");
    assert_eq!(child.model.name, "Child Category");
    assert_eq!(child.model.url_key, "child-category");
    assert_eq!(child.model.level, parent.model.level + 1);
    assert!(child
        .model
        .path
        .starts_with(&format!("{}/", parent.model.path)));

    Ok(())
}

/// Tests that default-scope and store-scope values are stored independently.
///
/// Expected: each store view sees its own name; store 2 falls back to the default
#[tokio::test]
async fn scope_overrides_are_independent() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;

    let category = CategoryBuilder::top_level(platform.categories())
        .with_name_for(1, "Chaussures")
        .with_name("Shoes")
        .with_description_for(1, "Toutes les chaussures")
        .with_is_active_for(1, false)
        .build()
        .await?;
    let category = platform.categories().get_by_id(category.model.id).await?;

    assert_eq!(category.name_for(0), "Shoes");
    assert_eq!(category.name_for(1), "Chaussures");
    assert_eq!(category.name_for(2), "Shoes");
    assert_eq!(category.url_key_for(0), "shoes");
    assert_eq!(category.url_key_for(1), "chaussures");
    assert_eq!(category.description_for(0), None);
    assert_eq!(category.description_for(1), Some("Toutes les chaussures"));
    assert!(category.is_active_for(0));
    assert!(!category.is_active_for(1));

    Ok(())
}

/// Tests that an explicit per-store URL key wins over one derived from the name.
///
/// Expected: store 1 keeps the explicit URL key
#[tokio::test]
async fn explicit_store_url_key_is_kept() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;

    let category = CategoryBuilder::top_level(platform.categories())
        .with_name_for(1, "Soldes")
        .with_url_key_for(1, "promo")
        .build()
        .await?;

    assert_eq!(category.name_for(1), "Soldes");
    assert_eq!(category.url_key_for(1), "promo");

    Ok(())
}

/// Tests building a category while a transaction is open and indexing is immediate.
///
/// Expected: Err(SideEffectInTransaction) carrying the index error, nothing persisted
#[tokio::test]
async fn build_inside_transaction_is_classified() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;

    let result = {
        let _txn = platform.open_transaction();
        CategoryBuilder::top_level(platform.categories())
            .with_name("Nested")
            .build()
            .await
    };

    match result {
        Err(FixtureError::SideEffectInTransaction { source }) => {
            assert!(matches!(
                source,
                PlatformError::Index(IndexError::TransactionOpen { .. })
            ));
        }
        other => panic!("expected SideEffectInTransaction, got {:?}", other),
    }
    let categories = entity::prelude::Category::find().count(platform.db()).await?;
    assert_eq!(categories, 0);
    assert!(CategoryBuilder::top_level(platform.categories())
        .build()
        .await
        .is_ok());

    Ok(())
}

/// Tests that scheduled indexing lets builds succeed inside a transaction.
///
/// Expected: Ok with the index update queued
#[tokio::test]
async fn scheduled_indexing_builds_inside_transaction() -> Result<(), FixtureError> {
    let platform = storefront_platform_in(IndexMode::Scheduled).await;

    let _txn = platform.open_transaction();
    let category = CategoryBuilder::top_level(platform.categories())
        .build()
        .await?;

    assert_eq!(platform.indexer().backlog()[0].entity_id, category.model.id);

    Ok(())
}

/// Tests rolling back a parent before its child.
///
/// Expected: the child's cascaded deletion is tolerated and rollback succeeds
#[tokio::test]
async fn rollback_tolerates_cascaded_children() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;
    let mut categories = FixturePool::new(platform.categories());

    let parent = create_category(&platform).await?;
    let child = CategoryBuilder::child_of(platform.categories(), &parent)
        .build()
        .await?;
    categories.add_with_key(parent, "parent");
    categories.add(child.clone());

    categories.rollback().await?;
    categories.rollback().await?;

    assert!(platform
        .categories()
        .get_by_id(child.model.id)
        .await
        .unwrap_err()
        .is_not_found());

    Ok(())
}
