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
        model::cart::{Cart, CartDraft},
        Platform,
    },
};

#[derive(Clone, Copy)]
pub struct CartRepository<'a> {
    platform: &'a Platform,
}

impl<'a> CartRepository<'a> {
    pub fn new(platform: &'a Platform) -> Self {
        Self { platform }
    }

    /// Gets a cart by the masked id the storefront addresses it with.
    pub async fn get_by_masked_id(&self, masked_id: &str) -> Result<Cart, PlatformError> {
        let db = self.platform.db();
        let model = entity::prelude::Cart::find()
            .filter(entity::cart::Column::MaskedId.eq(masked_id))
            .one(db)
            .await?
            .ok_or_else(|| no_such_entity(Cart::KIND, masked_id))?;

        Ok(with_items(db, model).await?)
    }
}

async fn with_items<C: ConnectionTrait>(db: &C, model: entity::cart::Model) -> Result<Cart, DbErr> {
    let items = entity::prelude::CartItem::find()
        .filter(entity::cart_item::Column::CartId.eq(model.id))
        .order_by_asc(entity::cart_item::Column::Id)
        .all(db)
        .await?;

    Ok(Cart { model, items })
}

impl Repository for CartRepository<'_> {
    type Entity = Cart;
    type Draft = CartDraft;

    fn create(&self) -> CartDraft {
        CartDraft::default()
    }

    async fn save(&self, draft: CartDraft) -> Result<Cart, PlatformError> {
        let txn = self.platform.db().begin().await?;

        let model = entity::cart::ActiveModel {
            masked_id: ActiveValue::Set(draft.masked_id),
            store_id: ActiveValue::Set(draft.store_id),
            customer_email: ActiveValue::Set(draft.customer_email),
            is_active: ActiveValue::Set(draft.is_active),
            items_count: ActiveValue::Set(draft.items_count),
            items_qty: ActiveValue::Set(draft.items_qty),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for item in draft.items {
            entity::cart_item::ActiveModel {
                cart_id: ActiveValue::Set(model.id),
                sku: ActiveValue::Set(item.sku),
                qty: ActiveValue::Set(item.qty),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        let cart = with_items(&txn, model).await?;
        txn.commit().await?;

        Ok(cart)
    }

    async fn get_by_id(&self, id: i32) -> Result<Cart, PlatformError> {
        let db = self.platform.db();
        let model = entity::prelude::Cart::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| no_such_entity(Cart::KIND, id))?;

        Ok(with_items(db, model).await?)
    }

    async fn delete(&self, cart: &Cart) -> Result<(), PlatformError> {
        let result = entity::prelude::Cart::delete_by_id(cart.model.id)
            .exec(self.platform.db())
            .await?;

        expect_deleted(result, Cart::KIND, cart.model.id)
    }
}
