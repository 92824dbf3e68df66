//! Read-only cart views and the observer contract.
//!
//! Rendering surfaces (cart panel, mini-cart, badge) never touch cart state
//! directly. They subscribe to the store and redraw from the snapshot they
//! are handed after every mutation.

use rust_decimal::Decimal;

use hik_cafe_core::LineItem;

/// Read-only current contents of the cart, handed to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
    /// Exact total at full precision.
    pub total: Decimal,
    /// Sum of all quantities (the badge value).
    pub item_count: u32,
}

impl CartSnapshot {
    /// An empty cart snapshot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Decimal::ZERO,
            item_count: 0,
        }
    }

    /// True when the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Observer notified synchronously after every cart mutation.
pub trait CartObserver {
    /// Called with the fresh snapshot once the mutation has been persisted.
    fn cart_updated(&self, snapshot: &CartSnapshot);
}

/// An action a cart-panel row control can issue against a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Bump quantity by one.
    Increment,
    /// Lower quantity by one, floored at 1.
    Decrement,
    /// Delete the line item.
    Remove,
}

/// Line item display data for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    pub name: String,
    pub unit_price: String,
    pub line_total: String,
    pub image_ref: String,
    pub quantity: u32,
}

/// Cart display data for rendering.
///
/// All money fields are formatted to two decimals here, at the presentation
/// boundary; the snapshot keeps exact amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<LineView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// An empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: "$0.00".to_owned(),
            item_count: 0,
        }
    }
}

/// Format an exact amount as a two-decimal price string.
fn format_amount(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

impl From<&CartSnapshot> for CartView {
    fn from(snapshot: &CartSnapshot) -> Self {
        Self {
            lines: snapshot.items.iter().map(LineView::from).collect(),
            total: format_amount(snapshot.total),
            item_count: snapshot.item_count,
        }
    }
}

impl From<&LineItem> for LineView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            unit_price: item.unit_price.display(),
            line_total: format_amount(item.line_total()),
            image_ref: item.image_ref.clone(),
            quantity: item.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use hik_cafe_core::Price;
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
    fn test_empty_view_formatting() {
        let view = CartView::empty();
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.item_count, 0);
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_view_formats_at_two_decimals() {
        let snapshot = CartSnapshot {
            items: vec![item("Latte", "4.5", 2), item("Croissant", "3", 1)],
            total: dec!(12),
            item_count: 3,
        };
        let view = CartView::from(&snapshot);
        assert_eq!(view.total, "$12.00");
        assert_eq!(
            view.lines.first().map(|l| l.unit_price.as_str()),
            Some("$4.50")
        );
        assert_eq!(
            view.lines.first().map(|l| l.line_total.as_str()),
            Some("$9.00")
        );
    }

    #[test]
    fn test_snapshot_empty_predicate() {
        assert!(CartSnapshot::empty().is_empty());
    }
}
