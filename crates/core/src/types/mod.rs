//! Core types for the Hik Café cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod item;
pub mod menu;
pub mod price;

pub use item::LineItem;
pub use menu::MenuItem;
pub use price::{Price, PriceError};
