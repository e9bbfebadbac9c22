//! Entity shells and aggregates of the storefront platform.
//!
//! A draft (`PageDraft`, `CategoryDraft`, ...) is the mutable shell a repository's
//! `create()` hands out and `save()` consumes. An aggregate (`Page`, `Category`, ...)
//! is what `save()` and `get_by_id()` return: the main row plus its child rows, with
//! scope-aware accessors.

pub mod attribute;
pub mod cart;
pub mod cart_rule;
pub mod category;
pub mod page;
pub mod store;
