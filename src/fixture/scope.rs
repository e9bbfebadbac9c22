//! Values that may differ per store view.

use std::collections::BTreeMap;

/// Identifier of a store view.
pub type StoreId = i32;

/// The admin store view, holding scope-independent default values.
pub const DEFAULT_STORE_ID: StoreId = 0;

/// A builder field with a default value and independent per-store overrides.
///
/// Setting the default never touches overrides and vice versa. An override for
/// `DEFAULT_STORE_ID` is the default itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoped<T> {
    default: Option<T>,
    overrides: BTreeMap<StoreId, T>,
}

impl<T> Default for Scoped<T> {
    fn default() -> Self {
        Self {
            default: None,
            overrides: BTreeMap::new(),
        }
    }
}

impl<T> Scoped<T> {
    pub fn set_default(&mut self, value: T) {
        self.default = Some(value);
    }

    /// Sets the value for one store view.
    pub fn set_for(&mut self, store_id: StoreId, value: T) {
        if store_id == DEFAULT_STORE_ID {
            self.default = Some(value);
        } else {
            self.overrides.insert(store_id, value);
        }
    }

    /// The default value, if one was set.
    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    pub fn override_for(&self, store_id: StoreId) -> Option<&T> {
        self.overrides.get(&store_id)
    }

    /// Per-store overrides, ordered by store id.
    pub fn overrides(&self) -> impl Iterator<Item = (StoreId, &T)> {
        self.overrides.iter().map(|(store_id, value)| (*store_id, value))
    }
}
