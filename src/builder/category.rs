use std::collections::BTreeSet;

use crate::{
    error::FixtureError,
    fixture::{
        build::{amend, EntityBuilder},
        defaults::slugify,
        scope::{Scoped, StoreId},
    },
    platform::{
        data::category::CategoryRepository,
        model::category::{
            flag_value, Category, CategoryAttribute, CategoryDraft, ParentRef, StoreValueDraft,
        },
        Platform,
    },
};

const TOP_LEVEL_NAME: &str = "Top Level Category";
const CHILD_NAME: &str = "Child Category";

/// Builder for categories.
///
/// Name, URL key, description and activation can be set for the default scope and
/// independently per store view. Defaults:
/// - name: `Top Level Category`, or `Child Category` for a builder made by `child_of`
/// - URL key: the name slugified (`top-level-category`)
/// - per-store URL key: the per-store name slugified, for stores that override the
///   name but not the URL key
/// - active, position `0`
///
/// Path and level are derived from the parent when the category is saved.
///
/// # Example
///
/// ```rust,ignore
/// let parent = CategoryBuilder::top_level(platform.categories()).build().await?;
/// let child = CategoryBuilder::child_of(platform.categories(), &parent)
///     .with_name("Shoes")
///     .with_name_for(1, "Chaussures")
///     .build()
///     .await?;
///
/// assert_eq!(child.url_key_for(1), "chaussures");
/// ```
#[derive(Clone)]
pub struct CategoryBuilder<'a> {
    repository: CategoryRepository<'a>,
    parent: Option<ParentRef>,
    name: Scoped<String>,
    url_key: Scoped<String>,
    description: Scoped<String>,
    is_active: Scoped<bool>,
    position: Option<i32>,
}

impl<'a> CategoryBuilder<'a> {
    /// Builder for a category directly below the root.
    pub fn top_level(repository: CategoryRepository<'a>) -> Self {
        Self {
            repository,
            parent: None,
            name: Scoped::default(),
            url_key: Scoped::default(),
            description: Scoped::default(),
            is_active: Scoped::default(),
            position: None,
        }
    }

    /// Builder for a category below `parent`.
    pub fn child_of(repository: CategoryRepository<'a>, parent: &Category) -> Self {
        Self {
            parent: Some(ParentRef {
                id: parent.model.id,
                path: parent.model.path.clone(),
                level: parent.model.level,
            }),
            ..Self::top_level(repository)
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        amend(self, |b| b.name.set_default(name))
    }

    pub fn with_name_for(&self, store_id: StoreId, name: impl Into<String>) -> Self {
        let name = name.into();
        amend(self, |b| b.name.set_for(store_id, name))
    }

    pub fn with_url_key(&self, url_key: impl Into<String>) -> Self {
        let url_key = url_key.into();
        amend(self, |b| b.url_key.set_default(url_key))
    }

    pub fn with_url_key_for(&self, store_id: StoreId, url_key: impl Into<String>) -> Self {
        let url_key = url_key.into();
        amend(self, |b| b.url_key.set_for(store_id, url_key))
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        let description = description.into();
        amend(self, |b| b.description.set_default(description))
    }

    pub fn with_description_for(&self, store_id: StoreId, description: impl Into<String>) -> Self {
        let description = description.into();
        amend(self, |b| b.description.set_for(store_id, description))
    }

    pub fn with_is_active(&self, is_active: bool) -> Self {
        amend(self, |b| b.is_active.set_default(is_active))
    }

    pub fn with_is_active_for(&self, store_id: StoreId, is_active: bool) -> Self {
        amend(self, |b| b.is_active.set_for(store_id, is_active))
    }

    pub fn with_position(&self, position: i32) -> Self {
        amend(self, |b| b.position = Some(position))
    }

    fn store_values(&self) -> Vec<StoreValueDraft> {
        let stores: BTreeSet<StoreId> = self
            .name
            .overrides()
            .chain(self.url_key.overrides())
            .map(|(store_id, _)| store_id)
            .chain(self.description.overrides().map(|(store_id, _)| store_id))
            .chain(self.is_active.overrides().map(|(store_id, _)| store_id))
            .collect();

        let mut values = Vec::new();
        for store_id in stores {
            let mut push = |attribute, value| {
                values.push(StoreValueDraft {
                    store_id,
                    attribute,
                    value,
                })
            };

            let name = self.name.override_for(store_id);
            if let Some(name) = name {
                push(CategoryAttribute::Name, name.clone());
            }
            match (self.url_key.override_for(store_id), name) {
                (Some(url_key), _) => push(CategoryAttribute::UrlKey, url_key.clone()),
                (None, Some(name)) => push(CategoryAttribute::UrlKey, slugify(name)),
                (None, None) => {}
            }
            if let Some(description) = self.description.override_for(store_id) {
                push(CategoryAttribute::Description, description.clone());
            }
            if let Some(&is_active) = self.is_active.override_for(store_id) {
                push(CategoryAttribute::IsActive, flag_value(is_active));
            }
        }

        values
    }
}

impl<'a> EntityBuilder for CategoryBuilder<'a> {
    type Repository = CategoryRepository<'a>;

    fn repository(&self) -> &CategoryRepository<'a> {
        &self.repository
    }

    fn realize(&self, draft: &mut CategoryDraft) {
        let default_name = match self.parent {
            Some(_) => CHILD_NAME,
            None => TOP_LEVEL_NAME,
        };
        let name = self
            .name
            .default_value()
            .cloned()
            .unwrap_or_else(|| default_name.to_string());

        draft.url_key = self
            .url_key
            .default_value()
            .cloned()
            .unwrap_or_else(|| slugify(&name));
        draft.name = name;
        draft.parent = self.parent.clone();
        draft.description = self.description.default_value().cloned();
        draft.is_active = self.is_active.default_value().copied().unwrap_or(true);
        draft.position = self.position.unwrap_or(0);
        draft.store_values = self.store_values();
    }
}

/// Creates a top-level category with default values.
pub async fn create_category(platform: &Platform) -> Result<Category, FixtureError> {
    CategoryBuilder::top_level(platform.categories()).build().await
}
