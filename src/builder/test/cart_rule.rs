use super::*;
use crate::{builder::create_cart_rule, platform::model::cart_rule::DiscountAction};

/// Tests the defaults of a cart rule.
///
/// Expected: default name and description, active 10 percent rule without labels
#[tokio::test]
async fn cart_rule_defaults() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;

    let rule = create_cart_rule(&platform).await?;

    assert_eq!(rule.model.name, "Tdd Cart Rule");
    assert_eq!(rule.model.description, "Description - Tdd Cart Rule");
    assert!(rule.model.is_active);
    assert_eq!(rule.model.simple_action, "by_percent");
    assert_eq!(rule.model.discount_amount, 10.0);
    assert!(rule.labels.is_empty());

    Ok(())
}

/// Tests configured discount and labels.
///
/// Expected: the configured values, with store 2 falling back to the default label
#[tokio::test]
async fn configured_cart_rule() -> Result<(), FixtureError> {
    let platform = storefront_platform().await;

    let rule = CartRuleBuilder::new(platform.cart_rules())
        .with_name("Free Shipping Weekend")
        .with_discount(DiscountAction::CartFixed, 15.0)
        .with_coupon_code("WEEKEND")
        .with_label("Weekend Deal")
        .with_label_for(1, "Offre du week-end")
        .build()
        .await?;

    assert_eq!(rule.model.description, "Description - Free Shipping Weekend");
    assert_eq!(rule.model.simple_action, "cart_fixed");
    assert_eq!(rule.model.coupon_code.as_deref(), Some("WEEKEND"));
    assert_eq!(rule.label_for(1), Some("Offre du week-end"));
    assert_eq!(rule.label_for(2), Some("Weekend Deal"));

    Ok(())
}
