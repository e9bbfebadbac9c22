use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::{
    error::PlatformError,
    fixture::repository::{FixtureEntity, Repository},
    platform::{
        data::{expect_deleted, no_such_entity},
        indexer::{IndexJob, CATEGORY_PRODUCT_INDEX},
        model::category::{Category, CategoryDraft},
        secure_area::SecureArea,
        Platform,
    },
};

/// Categories and their per-store values.
///
/// Saving a category refreshes the category/product index. Deleting one requires the
/// secure area and cascades to its descendants.
#[derive(Clone, Copy)]
pub struct CategoryRepository<'a> {
    platform: &'a Platform,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(platform: &'a Platform) -> Self {
        Self { platform }
    }

    /// Gets the direct children of a category, ordered by position.
    pub async fn get_children(&self, parent_id: i32) -> Result<Vec<Category>, PlatformError> {
        let db = self.platform.db();
        let models = entity::prelude::Category::find()
            .filter(entity::category::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::category::Column::Position)
            .order_by_asc(entity::category::Column::Id)
            .all(db)
            .await?;

        let mut children = Vec::with_capacity(models.len());
        for model in models {
            children.push(with_store_values(db, model).await?);
        }

        Ok(children)
    }
}

async fn with_store_values<C: ConnectionTrait>(
    db: &C,
    model: entity::category::Model,
) -> Result<Category, DbErr> {
    let store_values = entity::prelude::CategoryStoreValue::find()
        .filter(entity::category_store_value::Column::CategoryId.eq(model.id))
        .order_by_asc(entity::category_store_value::Column::StoreId)
        .order_by_asc(entity::category_store_value::Column::AttributeCode)
        .all(db)
        .await?;

    Ok(Category {
        model,
        store_values,
    })
}

impl Repository for CategoryRepository<'_> {
    type Entity = Category;
    type Draft = CategoryDraft;

    fn create(&self) -> CategoryDraft {
        CategoryDraft::default()
    }

    async fn save(&self, draft: CategoryDraft) -> Result<Category, PlatformError> {
        let txn = self.platform.db().begin().await?;

        let (parent_id, parent_path, level) = match draft.parent {
            Some(parent) => (Some(parent.id), Some(parent.path), parent.level + 1),
            None => (None, None, 1),
        };

        let model = entity::category::ActiveModel {
            parent_id: ActiveValue::Set(parent_id),
            path: ActiveValue::Set(String::new()),
            level: ActiveValue::Set(level),
            position: ActiveValue::Set(draft.position),
            name: ActiveValue::Set(draft.name),
            url_key: ActiveValue::Set(draft.url_key),
            description: ActiveValue::Set(draft.description),
            is_active: ActiveValue::Set(draft.is_active),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        // The path ends with the category's own id, known only after the insert
        let path = match parent_path {
            Some(parent_path) => format!("{}/{}", parent_path, model.id),
            None => model.id.to_string(),
        };
        let mut category: entity::category::ActiveModel = model.into();
        category.path = ActiveValue::Set(path);
        let model = category.update(&txn).await?;

        for value in draft.store_values {
            entity::category_store_value::ActiveModel {
                category_id: ActiveValue::Set(model.id),
                store_id: ActiveValue::Set(value.store_id),
                attribute_code: ActiveValue::Set(value.attribute.code().to_string()),
                value: ActiveValue::Set(value.value),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        self.platform.indexer().dispatch(
            IndexJob {
                indexer: CATEGORY_PRODUCT_INDEX,
                entity_id: model.id,
            },
            self.platform.in_transaction(),
        )?;

        let category = with_store_values(&txn, model).await?;
        txn.commit().await?;

        Ok(category)
    }

    async fn get_by_id(&self, id: i32) -> Result<Category, PlatformError> {
        let db = self.platform.db();
        let model = entity::prelude::Category::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| no_such_entity(Category::KIND, id))?;

        Ok(with_store_values(db, model).await?)
    }

    async fn delete(&self, category: &Category) -> Result<(), PlatformError> {
        if !self.platform.secure_area().is_registered() {
            return Err(PlatformError::SecureAreaRequired {
                kind: Category::KIND,
            });
        }

        let result = entity::prelude::Category::delete_by_id(category.model.id)
            .exec(self.platform.db())
            .await?;

        expect_deleted(result, Category::KIND, category.model.id)
    }

    fn secure_area(&self) -> Option<&SecureArea> {
        Some(self.platform.secure_area())
    }
}
