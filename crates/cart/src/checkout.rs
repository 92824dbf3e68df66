//! Mock checkout flow.
//!
//! There is no payment and no order record: checkout validates the
//! Empty/Populated phase, produces a user-facing notice, and on confirmation
//! clears the (persisted) cart. A real backend plugs in through the
//! `on_confirmed` hook without this module assuming anything about it.

use rust_decimal::Decimal;
use tracing::info;

use crate::store::CartStore;
use crate::view::CartSnapshot;

/// Result of a checkout or order-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was empty; nothing happened.
    EmptyCart,
    /// The order was confirmed and the cart cleared.
    Confirmed {
        /// User-facing confirmation message.
        message: String,
        /// Order total at the moment of confirmation, full precision.
        total: Decimal,
    },
}

impl CheckoutOutcome {
    /// User-facing notice text for this outcome.
    #[must_use]
    pub fn notice(&self) -> &str {
        match self {
            Self::EmptyCart => "Your cart is empty.",
            Self::Confirmed { message, .. } => message,
        }
    }
}

/// Details from the order form, if the customer filled one in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    /// Customer name used in the confirmation message.
    pub customer_name: String,
    /// Free-text notes; carried through to the hook, not interpreted.
    pub notes: String,
}

/// Mock checkout over a cart store.
///
/// Holds the optional `on_confirmed` hook. The hook receives the final
/// snapshot taken just before the cart is cleared.
pub struct Checkout {
    on_confirmed: Option<Box<dyn Fn(&CartSnapshot, Option<&OrderForm>)>>,
}

impl Checkout {
    /// A checkout with no confirmation hook.
    #[must_use]
    pub const fn new() -> Self {
        Self { on_confirmed: None }
    }

    /// Install the confirmation hook.
    #[must_use]
    pub fn on_confirmed(mut self, hook: impl Fn(&CartSnapshot, Option<&OrderForm>) + 'static) -> Self {
        self.on_confirmed = Some(Box::new(hook));
        self
    }

    /// Submit the cart for checkout.
    ///
    /// Empty cart: returns [`CheckoutOutcome::EmptyCart`] and changes
    /// nothing. Populated cart: invokes the hook, clears the cart (which
    /// persists the empty state), and returns the confirmation.
    pub fn submit(&self, cart: &mut CartStore) -> CheckoutOutcome {
        self.finish(cart, None, "Order placed! Thank you.".to_owned())
    }

    /// Submit via the order form, producing a personalised confirmation.
    pub fn submit_order_form(&self, cart: &mut CartStore, form: &OrderForm) -> CheckoutOutcome {
        let message = format!(
            "Thanks {}! Your order request has been received.",
            form.customer_name.trim()
        );
        self.finish(cart, Some(form), message)
    }

    fn finish(
        &self,
        cart: &mut CartStore,
        form: Option<&OrderForm>,
        message: String,
    ) -> CheckoutOutcome {
        if cart.is_empty() {
            return CheckoutOutcome::EmptyCart;
        }

        let snapshot = cart.snapshot();
        if let Some(hook) = &self.on_confirmed {
            hook(&snapshot, form);
        }

        cart.clear();
        info!(total = %snapshot.total, items = snapshot.items.len(), "order confirmed");

        CheckoutOutcome::Confirmed {
            message,
            total: snapshot.total,
        }
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Checkout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkout")
            .field("on_confirmed", &self.on_confirmed.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rust_decimal_macros::dec;

    use hik_cafe_core::Price;

    use crate::storage::{CartStorage, MemoryStorage};

    use super::*;

    fn populated_cart(storage: MemoryStorage) -> CartStore {
        let mut cart = CartStore::open(storage);
        cart.add(
            "Latte",
            Price::parse("4.50").expect("valid price"),
            "img/latte.jpg",
        );
        cart
    }

    #[test]
    fn test_empty_cart_checkout_is_a_noop() {
        let mut cart = CartStore::open(MemoryStorage::new());
        let outcome = Checkout::new().submit(&mut cart);

        assert_eq!(outcome, CheckoutOutcome::EmptyCart);
        assert_eq!(outcome.notice(), "Your cart is empty.");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_confirms_and_empties_persisted_state() {
        let storage = MemoryStorage::new();
        let mut cart = populated_cart(storage.clone());

        let outcome = Checkout::new().submit(&mut cart);
        assert!(matches!(
            outcome,
            CheckoutOutcome::Confirmed { total, .. } if total == dec!(4.50)
        ));
        assert!(cart.is_empty());

        // Persisted blob now holds the empty state
        let blob = storage.read().expect("read").expect("blob present");
        let items = crate::storage::decode_items(&blob).expect("decode");
        assert!(items.is_empty());
    }

    #[test]
    fn test_confirmation_hook_sees_final_snapshot() {
        let seen = Arc::new(Mutex::new(None));
        let seen_in_hook = Arc::clone(&seen);

        let checkout = Checkout::new().on_confirmed(move |snapshot, _form| {
            *seen_in_hook.lock().expect("hook lock") = Some(snapshot.clone());
        });

        let mut cart = populated_cart(MemoryStorage::new());
        checkout.submit(&mut cart);

        let snapshot = seen.lock().expect("hook lock").clone().expect("hook ran");
        assert_eq!(snapshot.item_count, 1);
        assert_eq!(snapshot.total, dec!(4.50));
    }

    #[test]
    fn test_hook_not_invoked_for_empty_cart() {
        let ran = Arc::new(Mutex::new(false));
        let ran_in_hook = Arc::clone(&ran);
        let checkout = Checkout::new().on_confirmed(move |_, _| {
            *ran_in_hook.lock().expect("hook lock") = true;
        });

        let mut cart = CartStore::open(MemoryStorage::new());
        checkout.submit(&mut cart);
        assert!(!*ran.lock().expect("hook lock"));
    }

    #[test]
    fn test_order_form_personalises_confirmation() {
        let mut cart = populated_cart(MemoryStorage::new());
        let form = OrderForm {
            customer_name: "Ada".to_owned(),
            notes: "Ordering items from cart".to_owned(),
        };

        let outcome = Checkout::new().submit_order_form(&mut cart, &form);
        assert_eq!(
            outcome.notice(),
            "Thanks Ada! Your order request has been received."
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_order_form_on_empty_cart_is_a_noop() {
        let mut cart = CartStore::open(MemoryStorage::new());
        let outcome = Checkout::new().submit_order_form(&mut cart, &OrderForm::default());
        assert_eq!(outcome, CheckoutOutcome::EmptyCart);
    }
}
