use crate::{
    builder::{
        AttributeBuilder, CartBuilder, CartRuleBuilder, CategoryBuilder, PageBuilder,
        StoreBuilder,
    },
    config::IndexMode,
    error::{FixtureError, IndexError, PlatformError},
    fixture::{EntityBuilder, FixturePool, Repository},
    platform::testing::{storefront_platform, storefront_platform_in},
};

mod cart;
mod cart_rule;
mod category;
mod store;
