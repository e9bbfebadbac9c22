use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::{
    error::PlatformError,
    fixture::repository::{FixtureEntity, Repository},
    platform::{
        data::{expect_deleted, no_such_entity},
        model::cart_rule::{CartRule, CartRuleDraft},
        Platform,
    },
};

#[derive(Clone, Copy)]
pub struct CartRuleRepository<'a> {
    platform: &'a Platform,
}

impl<'a> CartRuleRepository<'a> {
    pub fn new(platform: &'a Platform) -> Self {
        Self { platform }
    }
}

async fn with_labels<C: ConnectionTrait>(
    db: &C,
    model: entity::cart_rule::Model,
) -> Result<CartRule, DbErr> {
    let labels = entity::prelude::CartRuleLabel::find()
        .filter(entity::cart_rule_label::Column::RuleId.eq(model.id))
        .order_by_asc(entity::cart_rule_label::Column::StoreId)
        .all(db)
        .await?;

    Ok(CartRule { model, labels })
}

impl Repository for CartRuleRepository<'_> {
    type Entity = CartRule;
    type Draft = CartRuleDraft;

    fn create(&self) -> CartRuleDraft {
        CartRuleDraft::default()
    }

    async fn save(&self, draft: CartRuleDraft) -> Result<CartRule, PlatformError> {
        let txn = self.platform.db().begin().await?;

        let model = entity::cart_rule::ActiveModel {
            name: ActiveValue::Set(draft.name),
            description: ActiveValue::Set(draft.description),
            is_active: ActiveValue::Set(draft.is_active),
            simple_action: ActiveValue::Set(draft.action.code().to_string()),
            discount_amount: ActiveValue::Set(draft.discount_amount),
            coupon_code: ActiveValue::Set(draft.coupon_code),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for (store_id, label) in draft.labels {
            entity::cart_rule_label::ActiveModel {
                rule_id: ActiveValue::Set(model.id),
                store_id: ActiveValue::Set(store_id),
                label: ActiveValue::Set(label),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        let rule = with_labels(&txn, model).await?;
        txn.commit().await?;

        Ok(rule)
    }

    async fn get_by_id(&self, id: i32) -> Result<CartRule, PlatformError> {
        let db = self.platform.db();
        let model = entity::prelude::CartRule::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| no_such_entity(CartRule::KIND, id))?;

        Ok(with_labels(db, model).await?)
    }

    async fn delete(&self, rule: &CartRule) -> Result<(), PlatformError> {
        let result = entity::prelude::CartRule::delete_by_id(rule.model.id)
            .exec(self.platform.db())
            .await?;

        expect_deleted(result, CartRule::KIND, rule.model.id)
    }
}
