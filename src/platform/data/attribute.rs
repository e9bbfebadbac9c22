use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::{
    error::PlatformError,
    fixture::{
        repository::{FixtureEntity, Repository},
        scope::DEFAULT_STORE_ID,
    },
    platform::{
        data::{expect_deleted, no_such_entity},
        indexer::{IndexJob, SEARCH_INDEX},
        model::attribute::{Attribute, AttributeDraft},
        Platform,
    },
};

/// Product attributes with their labels and options.
///
/// Saving a searchable attribute refreshes the search index.
#[derive(Clone, Copy)]
pub struct AttributeRepository<'a> {
    platform: &'a Platform,
}

impl<'a> AttributeRepository<'a> {
    pub fn new(platform: &'a Platform) -> Self {
        Self { platform }
    }

    /// Gets an attribute by its code.
    pub async fn get_by_code(&self, code: &str) -> Result<Attribute, PlatformError> {
        let db = self.platform.db();
        let model = entity::prelude::Attribute::find()
            .filter(entity::attribute::Column::AttributeCode.eq(code))
            .one(db)
            .await?
            .ok_or_else(|| no_such_entity(Attribute::KIND, code))?;

        Ok(with_labels_and_options(db, model).await?)
    }
}

async fn with_labels_and_options<C: ConnectionTrait>(
    db: &C,
    model: entity::attribute::Model,
) -> Result<Attribute, DbErr> {
    let labels = entity::prelude::AttributeLabel::find()
        .filter(entity::attribute_label::Column::AttributeId.eq(model.id))
        .order_by_asc(entity::attribute_label::Column::StoreId)
        .all(db)
        .await?;

    let options = entity::prelude::AttributeOption::find()
        .filter(entity::attribute_option::Column::AttributeId.eq(model.id))
        .order_by_asc(entity::attribute_option::Column::SortOrder)
        .all(db)
        .await?;

    Ok(Attribute {
        model,
        labels,
        options,
    })
}

impl Repository for AttributeRepository<'_> {
    type Entity = Attribute;
    type Draft = AttributeDraft;

    fn create(&self) -> AttributeDraft {
        AttributeDraft::default()
    }

    async fn save(&self, draft: AttributeDraft) -> Result<Attribute, PlatformError> {
        let txn = self.platform.db().begin().await?;

        let model = entity::attribute::ActiveModel {
            attribute_code: ActiveValue::Set(draft.code),
            frontend_label: ActiveValue::Set(draft.label),
            frontend_input: ActiveValue::Set(draft.input.code().to_string()),
            backend_type: ActiveValue::Set(draft.backend_type),
            is_required: ActiveValue::Set(draft.is_required),
            is_searchable: ActiveValue::Set(draft.is_searchable),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        // The default label lives on the attribute row itself
        for (store_id, value) in draft.store_labels {
            if store_id == DEFAULT_STORE_ID {
                continue;
            }
            entity::attribute_label::ActiveModel {
                attribute_id: ActiveValue::Set(model.id),
                store_id: ActiveValue::Set(store_id),
                value: ActiveValue::Set(value),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        for (sort_order, label) in draft.options.into_iter().enumerate() {
            entity::attribute_option::ActiveModel {
                attribute_id: ActiveValue::Set(model.id),
                sort_order: ActiveValue::Set(sort_order as i32),
                label: ActiveValue::Set(label),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        if model.is_searchable {
            self.platform.indexer().dispatch(
                IndexJob {
                    indexer: SEARCH_INDEX,
                    entity_id: model.id,
                },
                self.platform.in_transaction(),
            )?;
        }

        let attribute = with_labels_and_options(&txn, model).await?;
        txn.commit().await?;

        Ok(attribute)
    }

    async fn get_by_id(&self, id: i32) -> Result<Attribute, PlatformError> {
        let db = self.platform.db();
        let model = entity::prelude::Attribute::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| no_such_entity(Attribute::KIND, id))?;

        Ok(with_labels_and_options(db, model).await?)
    }

    async fn delete(&self, attribute: &Attribute) -> Result<(), PlatformError> {
        let result = entity::prelude::Attribute::delete_by_id(attribute.model.id)
            .exec(self.platform.db())
            .await?;

        expect_deleted(result, Attribute::KIND, attribute.model.id)
    }
}
