//! Hik Café cart engine.
//!
//! This crate owns the cart state for the café ordering site: the ordered
//! list of line items, the operations that mutate it, the persistence
//! contract that lets state survive between sessions, and the checkout flow.
//!
//! # Design
//!
//! [`store::CartStore`] is the single source of truth. Views never hold a
//! mutable reference to cart state; they subscribe as [`view::CartObserver`]s
//! and redraw from the read-only [`view::CartSnapshot`] delivered after every
//! mutation. Persist-then-notify runs synchronously inside each mutating
//! operation, so by the time a caller's next statement runs every surface
//! reflects the new state.
//!
//! # Failure policy
//!
//! Validation errors (bad price, stale index) surface to the caller as
//! [`error::CartError`]. Storage failures never do: a corrupt or unreadable
//! blob restores as an empty cart, and a failed write leaves the in-memory
//! state authoritative. A broken cart degrades to an empty cart, never a
//! broken page.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod error;
pub mod menu;
pub mod storage;
pub mod store;
pub mod view;

pub use checkout::{Checkout, CheckoutOutcome, OrderForm};
pub use error::{CartError, Result};
pub use menu::{ALL_CATEGORIES, Menu, default_menu};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::CartStore;
pub use view::{CartObserver, CartSnapshot, CartView, LineAction, LineView};
