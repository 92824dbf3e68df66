//! Full session scenarios: browse, build a cart, check out.

use std::sync::{Arc, Mutex};

use rust_decimal_macros::dec;

use hik_cafe_cart::{
    CartStorage, CartStore, Checkout, CheckoutOutcome, LineAction, OrderForm, default_menu,
};
use hik_cafe_integration_tests::{memory, stocked_cart};

#[test]
fn menu_to_checkout_happy_path() {
    let storage = memory();
    let menu = default_menu().expect("menu");
    let mut cart = CartStore::open(storage.clone());

    // Add straight off the menu, the way an add-to-cart control would
    for name in ["Latte", "Latte", "Avocado Toast"] {
        let item = menu.find(name).expect("on the menu");
        cart.add(&item.name, item.price, &item.image_ref);
    }
    cart.apply(1, LineAction::Increment).expect("valid index");
    assert_eq!(cart.total(), dec!(26.00));

    let outcome = Checkout::new().submit(&mut cart);
    assert!(matches!(
        outcome,
        CheckoutOutcome::Confirmed { total, .. } if total == dec!(26.00)
    ));

    // The cleared cart is what the next session restores
    let next_session = CartStore::open(storage);
    assert!(next_session.is_empty());
}

#[test]
fn checkout_on_empty_cart_leaves_everything_untouched() {
    let storage = memory();
    let mut cart = CartStore::open(storage.clone());

    let outcome = Checkout::new().submit(&mut cart);
    assert_eq!(outcome, CheckoutOutcome::EmptyCart);
    assert_eq!(outcome.notice(), "Your cart is empty.");

    // No blob was ever written for a session that only tried to check out
    assert!(storage.read().expect("read").is_none());
}

#[test]
fn order_form_submission_confirms_and_clears() {
    let mut cart = stocked_cart(memory());
    let form = OrderForm {
        customer_name: "Ada".to_owned(),
        notes: "oat milk please".to_owned(),
    };

    let received = Arc::new(Mutex::new(None));
    let received_in_hook = Arc::clone(&received);
    let checkout = Checkout::new().on_confirmed(move |snapshot, form| {
        *received_in_hook.lock().expect("hook lock") =
            Some((snapshot.clone(), form.cloned()));
    });

    let outcome = checkout.submit_order_form(&mut cart, &form);
    assert_eq!(
        outcome.notice(),
        "Thanks Ada! Your order request has been received."
    );
    assert!(cart.is_empty());

    let (snapshot, hook_form) = received
        .lock()
        .expect("hook lock")
        .clone()
        .expect("hook ran");
    assert_eq!(snapshot.total, dec!(12.00));
    assert_eq!(hook_form, Some(form));
}

#[test]
fn two_checkouts_in_a_row_only_confirm_once() {
    let mut cart = stocked_cart(memory());
    let checkout = Checkout::new();

    assert!(matches!(
        checkout.submit(&mut cart),
        CheckoutOutcome::Confirmed { .. }
    ));
    assert_eq!(checkout.submit(&mut cart), CheckoutOutcome::EmptyCart);
}
