//! The cart store: single source of truth for cart contents.
//!
//! Every read and write of cart state goes through [`CartStore`]. Each
//! mutating operation persists the full state and then notifies every
//! subscribed observer, synchronously, before returning.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use hik_cafe_core::{LineItem, Price};

use crate::error::{CartError, Result};
use crate::storage::{CartStorage, decode_items, encode_items};
use crate::view::{CartObserver, CartSnapshot, LineAction};

/// Owner of the ordered line-item list.
///
/// Constructed once at session start via [`CartStore::open`], then handed by
/// reference to whatever drives it. Views subscribe through
/// [`CartStore::subscribe`] and hold no reference to the state itself.
pub struct CartStore {
    items: Vec<LineItem>,
    storage: Box<dyn CartStorage>,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartStore {
    /// Open a store over a persistence adapter, restoring any prior state.
    ///
    /// An absent, unreadable, or corrupt blob restores as an empty cart.
    /// Restore problems are logged and recovered, never surfaced: a broken
    /// blob must not break the session.
    pub fn open(storage: impl CartStorage + 'static) -> Self {
        let items = match storage.read() {
            Ok(Some(blob)) => match decode_items(&blob) {
                Ok(items) => items,
                Err(e) => {
                    warn!("discarding corrupt cart blob: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("cart storage unreadable, starting empty: {e}");
                Vec::new()
            }
        };

        Self {
            items,
            storage: Box::new(storage),
            observers: Vec::new(),
        }
    }

    /// Register an observer. It is immediately handed the current snapshot
    /// so a late subscriber starts consistent.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        let snapshot = self.snapshot();
        observer.cart_updated(&snapshot);
        self.observers.push(Box::new(observer));
    }

    /// Add one unit of a product to the cart.
    ///
    /// If a line item with this name already exists its quantity goes up by
    /// one and its stored price stays as it was (first price wins);
    /// otherwise a new line item is appended with quantity 1.
    pub fn add(&mut self, name: &str, price: Price, image_ref: &str) {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                debug!(name, quantity = item.quantity, "bumped line item");
            }
            None => {
                self.items
                    .push(LineItem::new(name.to_owned(), price, image_ref.to_owned()));
                debug!(name, "added line item");
            }
        }
        self.sync();
    }

    /// Add from a raw menu control: the price arrives as a string and is
    /// validated before it can touch cart state.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidItem`] for an empty, non-numeric, or
    /// negative price. The cart is left unchanged.
    pub fn add_raw(&mut self, name: &str, price: &str, image_ref: &str) -> Result<()> {
        let price = Price::parse(price)?;
        self.add(name, price, image_ref);
        Ok(())
    }

    /// Adjust the quantity of the line item at `index` by `delta`, floored
    /// at 1. Lowering quantity can never remove a line; removal is explicit.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] for a stale index. The cart is
    /// left unchanged.
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> Result<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;

        let adjusted = i64::from(item.quantity).saturating_add(delta).max(1);
        item.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);
        debug!(name = %item.name, quantity = item.quantity, "set quantity");

        self.sync();
        Ok(())
    }

    /// Delete the line item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] for a stale index. The cart is
    /// left unchanged.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        let len = self.items.len();
        if index >= len {
            return Err(CartError::IndexOutOfRange { index, len });
        }

        let removed = self.items.remove(index);
        debug!(name = %removed.name, "removed line item");

        self.sync();
        Ok(())
    }

    /// Empty the cart. Always succeeds, also when already empty.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cleared cart");
        self.sync();
    }

    /// Dispatch a cart-panel row action and return the updated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] for a stale index.
    pub fn apply(&mut self, index: usize, action: LineAction) -> Result<CartSnapshot> {
        match action {
            LineAction::Increment => self.change_quantity(index, 1)?,
            LineAction::Decrement => self.change_quantity(index, -1)?,
            LineAction::Remove => self.remove(index)?,
        }
        Ok(self.snapshot())
    }

    /// Exact sum of `unit_price × quantity` over all line items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// The total formatted for display, rounded to two decimals.
    #[must_use]
    pub fn total_display(&self) -> String {
        format!("${:.2}", self.total().round_dp(2))
    }

    /// Sum of all quantities - the badge value. Distinct from [`Self::len`].
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the cart holds no line items (the Empty phase).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only copy of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }

    /// Persist the full state, then notify observers with the fresh
    /// snapshot. Runs synchronously inside every mutating operation.
    ///
    /// A persist failure is logged and swallowed; the in-memory state stays
    /// authoritative for the rest of the session.
    fn sync(&mut self) {
        match encode_items(&self.items) {
            Ok(blob) => {
                if let Err(e) = self.storage.write(&blob) {
                    warn!("cart persist failed, continuing in memory: {e}");
                }
            }
            Err(e) => warn!("cart encode failed, continuing in memory: {e}"),
        }

        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.cart_updated(&snapshot);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
