//! Cart commands: add, show, adjust, clear, checkout, badge.
//!
//! Each command opens the store over file-backed storage, applies one
//! operation, and lets the store's persist-on-mutate contract write the
//! result back before the process exits.

use hik_cafe_cart::{
    CartStore, CartView, Checkout, CheckoutOutcome, FileStorage, LineAction, OrderForm,
    default_menu,
};

use crate::config::CliConfig;

fn open_cart(config: &CliConfig) -> CartStore {
    CartStore::open(FileStorage::new(&config.cart_dir))
}

/// Add one unit of `name` to the cart.
///
/// Without a `--price` override the item must exist on the menu; the menu
/// price is already validated. With an override the raw string goes through
/// the store's price validation.
///
/// # Errors
///
/// Returns an error for an unknown menu item or an invalid price override.
#[allow(clippy::print_stdout)]
pub fn add(
    config: &CliConfig,
    name: &str,
    price: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = open_cart(config);

    match price {
        Some(raw) => cart.add_raw(name, raw, "")?,
        None => {
            let menu = default_menu()?;
            let item = menu
                .find(name)
                .ok_or_else(|| format!("{name:?} is not on the menu (see `hik-cafe menu`)"))?;
            cart.add(&item.name, item.price, &item.image_ref);
        }
    }

    println!("Added {name}. Cart: {} item(s), {}", cart.item_count(), cart.total_display());
    Ok(())
}

/// Render the cart panel.
#[allow(clippy::print_stdout)]
pub fn show(config: &CliConfig) {
    let cart = open_cart(config);
    let view = CartView::from(&cart.snapshot());

    if view.lines.is_empty() {
        println!("Your cart is empty - add something tasty!");
        return;
    }

    for (index, line) in view.lines.iter().enumerate() {
        println!(
            "[{index}] {:<14} {:>7} × {}  = {:>8}",
            line.name, line.unit_price, line.quantity, line.line_total,
        );
    }
    println!("Total: {}  ({} item(s))", view.total, view.item_count);
}

/// Change the quantity of the line item at `index` by `delta`.
///
/// # Errors
///
/// Returns an error for a stale index.
#[allow(clippy::print_stdout)]
pub fn change(
    config: &CliConfig,
    index: usize,
    delta: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = open_cart(config);
    let action = if delta >= 0 {
        LineAction::Increment
    } else {
        LineAction::Decrement
    };
    let snapshot = cart.apply(index, action)?;

    println!("Cart: {} item(s), {}", snapshot.item_count, cart.total_display());
    Ok(())
}

/// Remove the line item at `index`.
///
/// # Errors
///
/// Returns an error for a stale index.
#[allow(clippy::print_stdout)]
pub fn remove(config: &CliConfig, index: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = open_cart(config);
    cart.remove(index)?;

    println!("Removed. Cart: {} item(s), {}", cart.item_count(), cart.total_display());
    Ok(())
}

/// Empty the cart.
#[allow(clippy::print_stdout)]
pub fn clear(config: &CliConfig) {
    let mut cart = open_cart(config);
    cart.clear();
    println!("Cart cleared.");
}

/// Place the order: confirmation notice, then the cart empties.
#[allow(clippy::print_stdout)]
pub fn checkout(config: &CliConfig, name: Option<String>, notes: String) {
    let mut cart = open_cart(config);
    let checkout = Checkout::new();

    let outcome = match name {
        Some(customer_name) => {
            let form = OrderForm {
                customer_name,
                notes,
            };
            checkout.submit_order_form(&mut cart, &form)
        }
        None => checkout.submit(&mut cart),
    };

    match &outcome {
        CheckoutOutcome::EmptyCart => println!("{}", outcome.notice()),
        CheckoutOutcome::Confirmed { total, .. } => {
            println!("{} (total ${total:.2})", outcome.notice());
        }
    }
}

/// Print the badge count.
#[allow(clippy::print_stdout)]
pub fn badge(config: &CliConfig) {
    let cart = open_cart(config);
    println!("{}", cart.item_count());
}
