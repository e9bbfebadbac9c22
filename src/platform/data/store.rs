use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::PlatformError,
    fixture::repository::{FixtureEntity, Repository},
    platform::{
        data::{expect_deleted, no_such_entity},
        model::store::{Store, StoreDraft},
        secure_area::SecureArea,
        Platform,
    },
};

/// Store views. Deleting one requires the secure area.
#[derive(Clone, Copy)]
pub struct StoreRepository<'a> {
    platform: &'a Platform,
}

impl<'a> StoreRepository<'a> {
    pub fn new(platform: &'a Platform) -> Self {
        Self { platform }
    }

    /// Gets a store view by its code.
    pub async fn get_by_code(&self, code: &str) -> Result<Store, PlatformError> {
        entity::prelude::Store::find()
            .filter(entity::store::Column::Code.eq(code))
            .one(self.platform.db())
            .await?
            .ok_or_else(|| no_such_entity(Store::KIND, code))
    }
}

impl Repository for StoreRepository<'_> {
    type Entity = Store;
    type Draft = StoreDraft;

    fn create(&self) -> StoreDraft {
        StoreDraft::default()
    }

    async fn save(&self, draft: StoreDraft) -> Result<Store, PlatformError> {
        let store = entity::store::ActiveModel {
            code: ActiveValue::Set(draft.code),
            name: ActiveValue::Set(draft.name),
            sort_order: ActiveValue::Set(draft.sort_order),
            is_active: ActiveValue::Set(draft.is_active),
            ..Default::default()
        }
        .insert(self.platform.db())
        .await?;

        Ok(store)
    }

    async fn get_by_id(&self, id: i32) -> Result<Store, PlatformError> {
        entity::prelude::Store::find_by_id(id)
            .one(self.platform.db())
            .await?
            .ok_or_else(|| no_such_entity(Store::KIND, id))
    }

    async fn delete(&self, store: &Store) -> Result<(), PlatformError> {
        if !self.platform.secure_area().is_registered() {
            return Err(PlatformError::SecureAreaRequired { kind: Store::KIND });
        }

        let result = entity::prelude::Store::delete_by_id(store.id)
            .exec(self.platform.db())
            .await?;

        expect_deleted(result, Store::KIND, store.id)
    }

    fn secure_area(&self) -> Option<&SecureArea> {
        Some(self.platform.secure_area())
    }
}
