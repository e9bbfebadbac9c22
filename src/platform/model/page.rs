use crate::fixture::{repository::FixtureEntity, scope::StoreId};

/// Entity shell for a CMS page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageDraft {
    pub identifier: String,
    pub title: String,
    pub content_heading: String,
    pub content: String,
    pub is_active: bool,
    /// Store views the page is visible in; `0` means all of them.
    pub store_ids: Vec<StoreId>,
}

/// A CMS page with its store view assignments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub model: entity::cms_page::Model,
    /// Assigned store views, ascending.
    pub store_ids: Vec<StoreId>,
}

impl FixtureEntity for Page {
    type Id = i32;

    const KIND: &'static str = "page";

    fn id(&self) -> i32 {
        self.model.id
    }

    fn natural_key(&self) -> String {
        self.model.identifier.clone()
    }
}
