use crate::{
    error::FixtureError,
    fixture::{
        build::{amend, EntityBuilder},
        defaults::{humanize, next_sequence},
    },
    platform::{
        data::store::StoreRepository,
        model::store::{Store, StoreDraft},
        Platform,
    },
};

/// Builder for store views.
///
/// Defaults: code `store_<n>`, name from the code (`store_fr` becomes `Store Fr`),
/// active, sort order `0`.
#[derive(Clone)]
pub struct StoreBuilder<'a> {
    repository: StoreRepository<'a>,
    code: Option<String>,
    name: Option<String>,
    sort_order: Option<i32>,
    is_active: Option<bool>,
}

impl<'a> StoreBuilder<'a> {
    pub fn new(repository: StoreRepository<'a>) -> Self {
        Self {
            repository,
            code: None,
            name: None,
            sort_order: None,
            is_active: None,
        }
    }

    pub fn with_code(&self, code: impl Into<String>) -> Self {
        let code = code.into();
        amend(self, |b| b.code = Some(code))
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        amend(self, |b| b.name = Some(name))
    }

    pub fn with_sort_order(&self, sort_order: i32) -> Self {
        amend(self, |b| b.sort_order = Some(sort_order))
    }

    pub fn with_is_active(&self, is_active: bool) -> Self {
        amend(self, |b| b.is_active = Some(is_active))
    }
}

impl<'a> EntityBuilder for StoreBuilder<'a> {
    type Repository = StoreRepository<'a>;

    fn repository(&self) -> &StoreRepository<'a> {
        &self.repository
    }

    fn realize(&self, draft: &mut StoreDraft) {
        let code = self
            .code
            .clone()
            .unwrap_or_else(|| format!("store_{}", next_sequence()));

        draft.name = self.name.clone().unwrap_or_else(|| humanize(&code));
        draft.code = code;
        draft.sort_order = self.sort_order.unwrap_or(0);
        draft.is_active = self.is_active.unwrap_or(true);
    }
}

/// Creates a store view with default values.
///
/// Shorthand for `StoreBuilder::new(platform.stores()).build().await`.
pub async fn create_store(platform: &Platform) -> Result<Store, FixtureError> {
    StoreBuilder::new(platform.stores()).build().await
}
