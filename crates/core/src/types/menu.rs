//! Menu catalog entry type.

use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// A product on the café menu.
///
/// The menu is a static, externally-owned catalog; the cart never writes to
/// it. An add-to-cart control carries the subset of these fields the cart
/// needs (name, price, image reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Product name, unique on the menu.
    pub name: String,
    /// Listed price.
    pub price: Price,
    /// Opaque reference to a display image.
    pub image_ref: String,
    /// Category tag used by menu filter chips (e.g., "coffee", "pastry").
    pub category: String,
    /// Short free-text description shown on the menu card.
    #[serde(default)]
    pub description: Option<String>,
}

impl MenuItem {
    /// Create a menu item without a description.
    #[must_use]
    pub const fn new(name: String, price: Price, image_ref: String, category: String) -> Self {
        Self {
            name,
            price,
            image_ref,
            category,
            description: None,
        }
    }
}
