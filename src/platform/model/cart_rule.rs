use crate::fixture::{
    repository::FixtureEntity,
    scope::{StoreId, DEFAULT_STORE_ID},
};

/// How a cart rule computes its discount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiscountAction {
    /// Percentage of each matching item's price.
    #[default]
    ByPercent,
    /// Fixed amount off each matching item.
    ByFixed,
    /// Fixed amount off the whole cart.
    CartFixed,
}

impl DiscountAction {
    pub fn code(self) -> &'static str {
        match self {
            DiscountAction::ByPercent => "by_percent",
            DiscountAction::ByFixed => "by_fixed",
            DiscountAction::CartFixed => "cart_fixed",
        }
    }
}

/// Entity shell for a cart price rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartRuleDraft {
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub action: DiscountAction,
    pub discount_amount: f64,
    pub coupon_code: Option<String>,
    /// Storefront labels by store view; store `0` holds the default label.
    pub labels: Vec<(StoreId, String)>,
}

/// A cart price rule with its storefront labels.
#[derive(Clone, Debug, PartialEq)]
pub struct CartRule {
    pub model: entity::cart_rule::Model,
    pub labels: Vec<entity::cart_rule_label::Model>,
}

impl CartRule {
    /// Label shown in `store_id`, falling back to the default label.
    pub fn label_for(&self, store_id: StoreId) -> Option<&str> {
        let find = |store: StoreId| {
            self.labels
                .iter()
                .find(|l| l.store_id == store)
                .map(|l| l.label.as_str())
        };
        find(store_id).or_else(|| find(DEFAULT_STORE_ID))
    }
}

impl FixtureEntity for CartRule {
    type Id = i32;

    const KIND: &'static str = "cart rule";

    fn id(&self) -> i32 {
        self.model.id
    }

    fn natural_key(&self) -> String {
        self.model.name.clone()
    }
}
