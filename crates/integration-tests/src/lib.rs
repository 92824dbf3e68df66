//! Integration tests for the Hik Café cart.
//!
//! # Test Categories
//!
//! - `cart_persistence` - Round trips across store instances and storage
//!   backends, legacy blob migration, corruption recovery
//! - `checkout_flow` - Full session scenarios from first add to checkout
//!
//! The helpers here keep individual test files small: a shared temp
//! directory guard for file-backed storage and a stocked-cart builder.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use hik_cafe_cart::{CartStorage, CartStore, FileStorage, MemoryStorage};
use hik_cafe_core::Price;

/// A unique temp directory removed on drop.
pub struct TempCartDir {
    path: PathBuf,
}

impl TempCartDir {
    /// Create a fresh directory under the system temp dir, named so that
    /// parallel tests never collide.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "hik-cafe-it-{label}-{}-{:?}",
            std::process::id(),
            std::thread::current().id(),
        ));
        std::fs::create_dir_all(&path).expect("create temp cart dir");
        Self { path }
    }

    /// The directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File-backed storage rooted here.
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.path)
    }
}

impl Drop for TempCartDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Open a store over `storage` and stock it with the standard test order:
/// two lattes and a croissant.
///
/// # Panics
///
/// Panics if the fixture prices fail to parse.
pub fn stocked_cart(storage: impl CartStorage + 'static) -> CartStore {
    let mut cart = CartStore::open(storage);
    let latte = Price::parse("4.50").expect("valid price");
    let croissant = Price::parse("3.00").expect("valid price");
    cart.add("Latte", latte, "img/latte.jpg");
    cart.add("Latte", latte, "img/latte.jpg");
    cart.add("Croissant", croissant, "img/croissant.jpg");
    cart
}

/// Shorthand for a fresh in-memory backing.
#[must_use]
pub fn memory() -> MemoryStorage {
    MemoryStorage::new()
}
