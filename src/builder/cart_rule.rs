use crate::{
    error::FixtureError,
    fixture::{
        build::{amend, EntityBuilder},
        scope::{Scoped, StoreId, DEFAULT_STORE_ID},
    },
    platform::{
        data::cart_rule::CartRuleRepository,
        model::cart_rule::{CartRule, CartRuleDraft, DiscountAction},
        Platform,
    },
};

const DEFAULT_NAME: &str = "Tdd Cart Rule";
const DEFAULT_DISCOUNT: f64 = 10.0;

/// Builder for cart price rules.
///
/// Defaults: name `Tdd Cart Rule`, description `Description - <name>`, active,
/// 10 percent off each item, no coupon and no storefront label.
#[derive(Clone)]
pub struct CartRuleBuilder<'a> {
    repository: CartRuleRepository<'a>,
    name: Option<String>,
    description: Option<String>,
    is_active: Option<bool>,
    action: Option<DiscountAction>,
    discount_amount: Option<f64>,
    coupon_code: Option<String>,
    label: Scoped<String>,
}

impl<'a> CartRuleBuilder<'a> {
    pub fn new(repository: CartRuleRepository<'a>) -> Self {
        Self {
            repository,
            name: None,
            description: None,
            is_active: None,
            action: None,
            discount_amount: None,
            coupon_code: None,
            label: Scoped::default(),
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        amend(self, |b| b.name = Some(name))
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        let description = description.into();
        amend(self, |b| b.description = Some(description))
    }

    pub fn with_is_active(&self, is_active: bool) -> Self {
        amend(self, |b| b.is_active = Some(is_active))
    }

    /// Sets how the discount is applied and its amount.
    pub fn with_discount(&self, action: DiscountAction, amount: f64) -> Self {
        amend(self, |b| {
            b.action = Some(action);
            b.discount_amount = Some(amount);
        })
    }

    pub fn with_coupon_code(&self, coupon_code: impl Into<String>) -> Self {
        let coupon_code = coupon_code.into();
        amend(self, |b| b.coupon_code = Some(coupon_code))
    }

    /// Sets the storefront label shown in store views without their own label.
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        let label = label.into();
        amend(self, |b| b.label.set_default(label))
    }

    pub fn with_label_for(&self, store_id: StoreId, label: impl Into<String>) -> Self {
        let label = label.into();
        amend(self, |b| b.label.set_for(store_id, label))
    }
}

impl<'a> EntityBuilder for CartRuleBuilder<'a> {
    type Repository = CartRuleRepository<'a>;

    fn repository(&self) -> &CartRuleRepository<'a> {
        &self.repository
    }

    fn realize(&self, draft: &mut CartRuleDraft) {
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        draft.description = self
            .description
            .clone()
            .unwrap_or_else(|| format!("Description - {}", name));
        draft.name = name;
        draft.is_active = self.is_active.unwrap_or(true);
        draft.action = self.action.unwrap_or_default();
        draft.discount_amount = self.discount_amount.unwrap_or(DEFAULT_DISCOUNT);
        draft.coupon_code = self.coupon_code.clone();
        draft.labels = self
            .label
            .default_value()
            .map(|label| (DEFAULT_STORE_ID, label.clone()))
            .into_iter()
            .chain(
                self.label
                    .overrides()
                    .map(|(store_id, label)| (store_id, label.clone())),
            )
            .collect();
    }
}

/// Creates an active 10 percent cart rule.
pub async fn create_cart_rule(platform: &Platform) -> Result<CartRule, FixtureError> {
    CartRuleBuilder::new(platform.cart_rules()).build().await
}
