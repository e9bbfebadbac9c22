use super::*;
use crate::platform::model::page::PageDraft;

fn draft(identifier: &str, store_ids: Vec<i32>) -> PageDraft {
    PageDraft {
        identifier: identifier.to_string(),
        title: "About Us".to_string(),
        content_heading: "Heading - About Us".to_string(),
        content: "Content - About Us".to_string(),
        is_active: true,
        store_ids,
    }
}

/// Tests that store assignments are stored sorted and without duplicates.
///
/// Expected: Ok with store ids `[0, 1]`
#[tokio::test]
async fn saves_page_with_store_assignments() -> Result<(), PlatformError> {
    let platform = storefront_platform().await;
    let repo = platform.pages();

    let saved = repo.save(draft("about-us", vec![1, 0, 1])).await?;
    let found = repo.get_by_identifier("about-us").await?;

    assert_eq!(saved.store_ids, vec![0, 1]);
    assert_eq!(found, saved);

    Ok(())
}

/// Tests that an assignment to an unknown store view rolls the whole save back.
///
/// Expected: Err and no page row left behind
#[tokio::test]
async fn failed_assignment_leaves_no_page() -> Result<(), PlatformError> {
    let platform = storefront_platform().await;
    let repo = platform.pages();

    let result = repo.save(draft("orphan", vec![0, 999])).await;

    assert!(result.is_err());
    let pages = entity::prelude::CmsPage::find().count(platform.db()).await?;
    assert_eq!(pages, 0);

    Ok(())
}

/// Tests loading a page that does not exist.
///
/// Expected: Err(NoSuchEntity)
#[tokio::test]
async fn unknown_page_is_not_found() {
    let platform = storefront_platform().await;

    let result = platform.pages().get_by_id(404).await;

    assert!(matches!(
        result,
        Err(PlatformError::NoSuchEntity { kind: "page", ref id }) if id == "404"
    ));
}

/// Tests deleting a page removes its store assignments.
///
/// Expected: Ok, then not found on reload and no assignment rows
#[tokio::test]
async fn deletes_page_and_assignments() -> Result<(), PlatformError> {
    let platform = storefront_platform().await;
    let repo = platform.pages();
    let saved = repo.save(draft("temporary", vec![0])).await?;

    repo.delete(&saved).await?;

    assert!(repo.get_by_id(saved.model.id).await.unwrap_err().is_not_found());
    let assignments = entity::prelude::CmsPageStore::find()
        .count(platform.db())
        .await?;
    assert_eq!(assignments, 0);

    Ok(())
}
