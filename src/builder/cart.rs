use rand::Rng;

use crate::{
    error::FixtureError,
    fixture::{
        build::{amend, EntityBuilder},
        scope::StoreId,
    },
    platform::{
        data::cart::CartRepository,
        model::cart::{Cart, CartDraft, CartItemDraft},
        Platform,
    },
};

/// Store view carts are created in unless set otherwise.
const DEFAULT_CART_STORE_ID: StoreId = 1;

const MASKED_ID_LENGTH: usize = 32;

/// Builder for carts.
///
/// Defaults: a random 32-character masked id, the default storefront view (`1`),
/// guest (no customer email), active, no items. Item count and quantity are always
/// derived from the items.
#[derive(Clone)]
pub struct CartBuilder<'a> {
    repository: CartRepository<'a>,
    masked_id: Option<String>,
    store_id: Option<StoreId>,
    customer_email: Option<String>,
    is_active: Option<bool>,
    items: Vec<CartItemDraft>,
}

impl<'a> CartBuilder<'a> {
    pub fn new(repository: CartRepository<'a>) -> Self {
        Self {
            repository,
            masked_id: None,
            store_id: None,
            customer_email: None,
            is_active: None,
            items: Vec::new(),
        }
    }

    pub fn with_masked_id(&self, masked_id: impl Into<String>) -> Self {
        let masked_id = masked_id.into();
        amend(self, |b| b.masked_id = Some(masked_id))
    }

    pub fn with_store_id(&self, store_id: StoreId) -> Self {
        amend(self, |b| b.store_id = Some(store_id))
    }

    pub fn with_customer_email(&self, email: impl Into<String>) -> Self {
        let email = email.into();
        amend(self, |b| b.customer_email = Some(email))
    }

    pub fn with_is_active(&self, is_active: bool) -> Self {
        amend(self, |b| b.is_active = Some(is_active))
    }

    /// Adds an item; the builder keeps every item added so far.
    pub fn with_item(&self, sku: impl Into<String>, qty: f64) -> Self {
        let item = CartItemDraft {
            sku: sku.into(),
            qty,
        };
        amend(self, |b| b.items.push(item))
    }
}

/// Generates a random alphanumeric masked cart id.
fn generate_masked_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();
    (0..MASKED_ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

impl<'a> EntityBuilder for CartBuilder<'a> {
    type Repository = CartRepository<'a>;

    fn repository(&self) -> &CartRepository<'a> {
        &self.repository
    }

    fn realize(&self, draft: &mut CartDraft) {
        draft.masked_id = self.masked_id.clone().unwrap_or_else(generate_masked_id);
        draft.store_id = self.store_id.unwrap_or(DEFAULT_CART_STORE_ID);
        draft.customer_email = self.customer_email.clone();
        draft.is_active = self.is_active.unwrap_or(true);
        draft.items_count = self.items.len() as i32;
        draft.items_qty = self.items.iter().map(|item| item.qty).sum();
        draft.items = self.items.clone();
    }
}

/// Creates an empty guest cart in the default storefront view.
pub async fn create_cart(platform: &Platform) -> Result<Cart, FixtureError> {
    CartBuilder::new(platform.carts()).build().await
}
