use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::{
    error::PlatformError,
    fixture::repository::{FixtureEntity, Repository},
    platform::{
        data::{expect_deleted, no_such_entity},
        model::page::{Page, PageDraft},
        Platform,
    },
};

#[derive(Clone, Copy)]
pub struct PageRepository<'a> {
    platform: &'a Platform,
}

impl<'a> PageRepository<'a> {
    pub fn new(platform: &'a Platform) -> Self {
        Self { platform }
    }

    /// Gets a page by its URL identifier.
    pub async fn get_by_identifier(&self, identifier: &str) -> Result<Page, PlatformError> {
        let db = self.platform.db();
        let model = entity::prelude::CmsPage::find()
            .filter(entity::cms_page::Column::Identifier.eq(identifier))
            .one(db)
            .await?
            .ok_or_else(|| no_such_entity(Page::KIND, identifier))?;

        Ok(with_stores(db, model).await?)
    }
}

/// Loads the store assignments of a page row.
async fn with_stores<C: ConnectionTrait>(
    db: &C,
    model: entity::cms_page::Model,
) -> Result<Page, DbErr> {
    let store_ids = entity::prelude::CmsPageStore::find()
        .filter(entity::cms_page_store::Column::PageId.eq(model.id))
        .order_by_asc(entity::cms_page_store::Column::StoreId)
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.store_id)
        .collect();

    Ok(Page { model, store_ids })
}

impl Repository for PageRepository<'_> {
    type Entity = Page;
    type Draft = PageDraft;

    fn create(&self) -> PageDraft {
        PageDraft::default()
    }

    async fn save(&self, draft: PageDraft) -> Result<Page, PlatformError> {
        let txn = self.platform.db().begin().await?;

        let model = entity::cms_page::ActiveModel {
            identifier: ActiveValue::Set(draft.identifier),
            title: ActiveValue::Set(draft.title),
            content_heading: ActiveValue::Set(draft.content_heading),
            content: ActiveValue::Set(draft.content),
            is_active: ActiveValue::Set(draft.is_active),
            creation_time: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut store_ids = draft.store_ids;
        store_ids.sort_unstable();
        store_ids.dedup();

        for &store_id in &store_ids {
            entity::prelude::CmsPageStore::insert(entity::cms_page_store::ActiveModel {
                page_id: ActiveValue::Set(model.id),
                store_id: ActiveValue::Set(store_id),
            })
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(Page { model, store_ids })
    }

    async fn get_by_id(&self, id: i32) -> Result<Page, PlatformError> {
        let db = self.platform.db();
        let model = entity::prelude::CmsPage::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| no_such_entity(Page::KIND, id))?;

        Ok(with_stores(db, model).await?)
    }

    async fn delete(&self, page: &Page) -> Result<(), PlatformError> {
        let result = entity::prelude::CmsPage::delete_by_id(page.model.id)
            .exec(self.platform.db())
            .await?;

        expect_deleted(result, Page::KIND, page.model.id)
    }
}
