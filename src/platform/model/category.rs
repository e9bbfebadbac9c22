use crate::fixture::{
    repository::FixtureEntity,
    scope::{StoreId, DEFAULT_STORE_ID},
};

/// Category attributes that may be overridden per store view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryAttribute {
    Name,
    UrlKey,
    Description,
    IsActive,
}

impl CategoryAttribute {
    /// Attribute code as stored in `category_store_value.attribute_code`.
    pub fn code(self) -> &'static str {
        match self {
            CategoryAttribute::Name => "name",
            CategoryAttribute::UrlKey => "url_key",
            CategoryAttribute::Description => "description",
            CategoryAttribute::IsActive => "is_active",
        }
    }
}

/// Encodes a flag the way `category_store_value` stores it.
pub fn flag_value(flag: bool) -> String {
    if flag { "1" } else { "0" }.to_string()
}

/// Position of a new category in the tree, taken from its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentRef {
    pub id: i32,
    pub path: String,
    pub level: i32,
}

/// One per-store override in a category shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreValueDraft {
    pub store_id: StoreId,
    pub attribute: CategoryAttribute,
    pub value: String,
}

/// Entity shell for a category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    /// `None` for a top-level category.
    pub parent: Option<ParentRef>,
    pub name: String,
    pub url_key: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub position: i32,
    pub store_values: Vec<StoreValueDraft>,
}

/// A category with its per-store overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub model: entity::category::Model,
    pub store_values: Vec<entity::category_store_value::Model>,
}

impl Category {
    /// Override stored for `store_id`, without falling back to the default.
    pub fn store_value(&self, store_id: StoreId, attribute: CategoryAttribute) -> Option<&str> {
        self.store_values
            .iter()
            .find(|v| v.store_id == store_id && v.attribute_code == attribute.code())
            .map(|v| v.value.as_str())
    }

    /// Name seen in `store_id`; the default name unless overridden there.
    pub fn name_for(&self, store_id: StoreId) -> &str {
        self.scoped(store_id, CategoryAttribute::Name)
            .unwrap_or(self.model.name.as_str())
    }

    pub fn url_key_for(&self, store_id: StoreId) -> &str {
        self.scoped(store_id, CategoryAttribute::UrlKey)
            .unwrap_or(self.model.url_key.as_str())
    }

    pub fn description_for(&self, store_id: StoreId) -> Option<&str> {
        self.scoped(store_id, CategoryAttribute::Description)
            .or(self.model.description.as_deref())
    }

    pub fn is_active_for(&self, store_id: StoreId) -> bool {
        match self.scoped(store_id, CategoryAttribute::IsActive) {
            Some(value) => value == "1",
            None => self.model.is_active,
        }
    }

    fn scoped(&self, store_id: StoreId, attribute: CategoryAttribute) -> Option<&str> {
        if store_id == DEFAULT_STORE_ID {
            return None;
        }
        self.store_value(store_id, attribute)
    }
}

impl FixtureEntity for Category {
    type Id = i32;

    const KIND: &'static str = "category";

    fn id(&self) -> i32 {
        self.model.id
    }

    fn natural_key(&self) -> String {
        self.model.url_key.clone()
    }
}
