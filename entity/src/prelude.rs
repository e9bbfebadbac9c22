pub use super::attribute::Entity as Attribute;
pub use super::attribute_label::Entity as AttributeLabel;
pub use super::attribute_option::Entity as AttributeOption;
pub use super::cart::Entity as Cart;
pub use super::cart_item::Entity as CartItem;
pub use super::cart_rule::Entity as CartRule;
pub use super::cart_rule_label::Entity as CartRuleLabel;
pub use super::category::Entity as Category;
pub use super::category_store_value::Entity as CategoryStoreValue;
pub use super::cms_page::Entity as CmsPage;
pub use super::cms_page_store::Entity as CmsPageStore;
pub use super::store::Entity as Store;
