use crate::{
    error::FixtureError,
    fixture::{
        build::{amend, EntityBuilder},
        defaults::{humanize, next_sequence},
        scope::{StoreId, DEFAULT_STORE_ID},
    },
    platform::{
        data::page::PageRepository,
        model::page::{Page, PageDraft},
        Platform,
    },
};

/// Builder for CMS pages.
///
/// Defaults are resolved in this order, each from the already resolved value before it:
/// - identifier: `page-<n>`
/// - title: the identifier humanized (`tdd-page` becomes `Tdd Page`)
/// - content heading: `Heading - <title>`
/// - content: `Content - <title>`
/// - active, visible in all store views (`[0]`)
///
/// # Example
///
/// ```rust,ignore
/// let page = PageBuilder::new(platform.pages())
///     .with_identifier("about-us")
///     .with_store_ids([1])
///     .build()
///     .await?;
/// ```
#[derive(Clone)]
pub struct PageBuilder<'a> {
    repository: PageRepository<'a>,
    identifier: Option<String>,
    title: Option<String>,
    content_heading: Option<String>,
    content: Option<String>,
    is_active: Option<bool>,
    store_ids: Option<Vec<StoreId>>,
}

impl<'a> PageBuilder<'a> {
    pub fn new(repository: PageRepository<'a>) -> Self {
        Self {
            repository,
            identifier: None,
            title: None,
            content_heading: None,
            content: None,
            is_active: None,
            store_ids: None,
        }
    }

    pub fn with_identifier(&self, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        amend(self, |b| b.identifier = Some(identifier))
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        let title = title.into();
        amend(self, |b| b.title = Some(title))
    }

    pub fn with_content_heading(&self, heading: impl Into<String>) -> Self {
        let heading = heading.into();
        amend(self, |b| b.content_heading = Some(heading))
    }

    pub fn with_content(&self, content: impl Into<String>) -> Self {
        let content = content.into();
        amend(self, |b| b.content = Some(content))
    }

    pub fn with_is_active(&self, is_active: bool) -> Self {
        amend(self, |b| b.is_active = Some(is_active))
    }

    /// Sets the store views the page is visible in, replacing any earlier assignment.
    pub fn with_store_ids(&self, store_ids: impl IntoIterator<Item = StoreId>) -> Self {
        let store_ids: Vec<StoreId> = store_ids.into_iter().collect();
        amend(self, |b| b.store_ids = Some(store_ids))
    }
}

impl<'a> EntityBuilder for PageBuilder<'a> {
    type Repository = PageRepository<'a>;

    fn repository(&self) -> &PageRepository<'a> {
        &self.repository
    }

    fn realize(&self, draft: &mut PageDraft) {
        let identifier = self
            .identifier
            .clone()
            .unwrap_or_else(|| format!("page-{}", next_sequence()));
        let title = self.title.clone().unwrap_or_else(|| humanize(&identifier));

        draft.content_heading = self
            .content_heading
            .clone()
            .unwrap_or_else(|| format!("Heading - {}", title));
        draft.content = self
            .content
            .clone()
            .unwrap_or_else(|| format!("Content - {}", title));
        draft.is_active = self.is_active.unwrap_or(true);
        draft.store_ids = self
            .store_ids
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_STORE_ID]);
        draft.identifier = identifier;
        draft.title = title;
    }
}

/// Creates a CMS page with default values, visible in all store views.
pub async fn create_page(platform: &Platform) -> Result<Page, FixtureError> {
    PageBuilder::new(platform.pages()).build().await
}
