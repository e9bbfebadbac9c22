use crate::fixture::repository::FixtureEntity;

/// A store view as returned by the store repository.
pub type Store = entity::store::Model;

impl FixtureEntity for entity::store::Model {
    type Id = i32;

    const KIND: &'static str = "store";

    fn id(&self) -> i32 {
        self.id
    }

    fn natural_key(&self) -> String {
        self.code.clone()
    }
}

/// Entity shell for a store view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreDraft {
    pub code: String,
    pub name: String,
    pub sort_order: i32,
    pub is_active: bool,
}
