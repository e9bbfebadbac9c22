use crate::fixture::{repository::FixtureEntity, scope::StoreId};

#[derive(Clone, Debug, PartialEq)]
pub struct CartItemDraft {
    pub sku: String,
    pub qty: f64,
}

/// Entity shell for a cart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartDraft {
    pub masked_id: String,
    pub store_id: StoreId,
    pub customer_email: Option<String>,
    pub is_active: bool,
    pub items: Vec<CartItemDraft>,
    pub items_count: i32,
    pub items_qty: f64,
}

/// A cart with its items.
#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    pub model: entity::cart::Model,
    pub items: Vec<entity::cart_item::Model>,
}

impl FixtureEntity for Cart {
    type Id = i32;

    const KIND: &'static str = "cart";

    fn id(&self) -> i32 {
        self.model.id
    }

    fn natural_key(&self) -> String {
        self.model.masked_id.clone()
    }
}
