//! Builders for every storefront entity kind.
//!
//! Each builder follows the same shape: a `new` (or structural) constructor taking the
//! kind's repository, copy-on-write `with_*` methods, and `build()` from
//! [`EntityBuilder`](crate::fixture::EntityBuilder). Fields never set receive the
//! defaults documented on each builder, computed at build time. A `create_<kind>`
//! shorthand builds an entity with every default.
//!
//! ```rust,ignore
//! let page = PageBuilder::new(platform.pages())
//!     .with_identifier("tdd-page")
//!     .build()
//!     .await?;
//!
//! assert_eq!(page.model.title, "Tdd Page");
//! assert_eq!(page.model.content_heading, "Heading - Tdd Page");
//! ```

pub mod attribute;
pub mod cart;
pub mod cart_rule;
pub mod category;
pub mod page;
pub mod store;

pub use attribute::{create_attribute, AttributeBuilder};
pub use cart::{create_cart, CartBuilder};
pub use cart_rule::{create_cart_rule, CartRuleBuilder};
pub use category::{create_category, CategoryBuilder};
pub use page::{create_page, PageBuilder};
pub use store::{create_store, StoreBuilder};

#[cfg(test)]
mod test;
