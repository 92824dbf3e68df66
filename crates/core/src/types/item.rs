//! Cart line item type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// One distinct product entry in the cart, with its own quantity.
///
/// The `name` doubles as the uniqueness key - the café menu has no separate
/// product IDs. The unit price is fixed when the item first enters the cart;
/// later adds of the same name only bump the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name, unique within a cart.
    pub name: String,
    /// Unit price fixed at first add.
    pub unit_price: Price,
    /// Opaque reference to a display image (not validated).
    pub image_ref: String,
    /// Quantity, always >= 1. Removal is explicit, never quantity zero.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1.
    #[must_use]
    pub const fn new(name: String, unit_price: Price, image_ref: String) -> Self {
        Self {
            name,
            unit_price,
            image_ref,
            quantity: 1,
        }
    }

    /// `unit_price × quantity` at full precision.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.amount() * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn item(name: &str, price: &str, quantity: u32) -> LineItem {
        LineItem {
            name: name.to_owned(),
            unit_price: Price::parse(price).expect("valid price"),
            image_ref: format!("img/{name}.jpg"),
            quantity,
        }
    }

    #[test]
    fn test_new_starts_at_quantity_one() {
        let latte = LineItem::new(
            "Latte".to_owned(),
            Price::parse("4.50").expect("valid price"),
            "img/latte.jpg".to_owned(),
        );
        assert_eq!(latte.quantity, 1);
    }

    #[test]
    fn test_line_total_multiplies_exactly() {
        assert_eq!(item("Latte", "4.50", 2).line_total(), dec!(9.00));
        assert_eq!(item("Croissant", "3.00", 1).line_total(), dec!(3.00));
        assert_eq!(item("Mocha", "0.10", 3).line_total(), dec!(0.30));
    }

    #[test]
    fn test_serde_round_trip_preserves_fields() {
        let original = item("Cold Brew", "5.25", 4);
        let json = serde_json::to_string(&original).expect("serialize");
        let back: LineItem = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(original, back);
    }
}
