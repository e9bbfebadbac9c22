//! SeaORM table models for the storefront platform.
//!
//! Each module is one table. Child tables (store assignments, per-store values,
//! labels, options, items) declare a cascading `belongs_to` relation to their
//! parent so that deleting the parent row removes them as well.

pub mod prelude;

pub mod attribute;
pub mod attribute_label;
pub mod attribute_option;
pub mod cart;
pub mod cart_item;
pub mod cart_rule;
pub mod cart_rule_label;
pub mod category;
pub mod category_store_value;
pub mod cms_page;
pub mod cms_page_store;
pub mod store;
