use super::*;
use crate::platform::model::attribute::{AttributeDraft, FrontendInput};

fn draft(code: &str, input: FrontendInput) -> AttributeDraft {
    AttributeDraft {
        code: code.to_string(),
        label: "Color".to_string(),
        input,
        backend_type: input.backend_type().to_string(),
        ..Default::default()
    }
}

/// Tests that options keep their order and store labels are resolved.
///
/// Expected: Ok with options in sort order and the store 1 label
#[tokio::test]
async fn saves_labels_and_options() -> Result<(), PlatformError> {
    let platform = storefront_platform().await;
    let mut attribute = draft("color", FrontendInput::Select);
    attribute.options = vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()];
    attribute.store_labels = vec![(0, "Ignored".to_string()), (1, "Couleur".to_string())];

    let saved = platform.attributes().save(attribute).await?;
    let found = platform.attributes().get_by_code("color").await?;

    assert_eq!(found, saved);
    assert_eq!(saved.option_labels(), vec!["Red", "Green", "Blue"]);
    assert_eq!(saved.label_for(1), "Couleur");
    assert_eq!(saved.label_for(0), "Color");
    assert_eq!(saved.labels.len(), 1);
    assert_eq!(saved.frontend_input(), Some(FrontendInput::Select));

    Ok(())
}

/// Tests that only searchable attributes refresh the search index.
///
/// Expected: one search index job, for the searchable attribute
#[tokio::test]
async fn searchable_attribute_updates_search_index() -> Result<(), PlatformError> {
    let platform = storefront_platform().await;
    let mut searchable = draft("material", FrontendInput::Text);
    searchable.is_searchable = true;

    platform
        .attributes()
        .save(draft("weight", FrontendInput::Price))
        .await?;
    let saved = platform.attributes().save(searchable).await?;

    assert_eq!(
        platform.indexer().applied(),
        vec![IndexJob {
            indexer: SEARCH_INDEX,
            entity_id: saved.model.id,
        }]
    );

    Ok(())
}

/// Tests deleting an attribute twice.
///
/// Expected: second delete is a not-found error
#[tokio::test]
async fn deletes_attribute() -> Result<(), PlatformError> {
    let platform = storefront_platform().await;
    let repo = platform.attributes();
    let saved = repo.save(draft("size", FrontendInput::Text)).await?;

    repo.delete(&saved).await?;

    assert!(repo.delete(&saved).await.unwrap_err().is_not_found());

    Ok(())
}
