//! Hik Café Core - Shared domain types.
//!
//! This crate provides the common types used across the Hik Café cart
//! components:
//! - `cart` - Cart engine (state, persistence, checkout)
//! - `cli` - Command-line front end for the cart engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - `Price`, `LineItem`, and `MenuItem` domain types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
