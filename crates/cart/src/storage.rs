//! Persistence adapter for cart state.
//!
//! The cart persists as a single JSON blob under a fixed, versioned key.
//! The adapter is deliberately thin: a key-value contract the store depends
//! on through [`CartStorage`], with an in-memory implementation for tests
//! and a file-backed one for real sessions.
//!
//! # Blob layout
//!
//! ```json
//! {
//!   "schema_version": 2,
//!   "items": [
//!     { "name": "Latte", "unit_price": "4.50", "image_ref": "img/latte.jpg", "quantity": 2 }
//!   ]
//! }
//! ```
//!
//! Version 1 blobs (a bare item array, the layout of the original widget)
//! still decode. Anything else is corrupt and restores as an empty cart.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use hik_cafe_core::LineItem;

/// Versioned storage key. Bump the suffix together with [`SCHEMA_VERSION`].
pub const STORAGE_KEY: &str = "hik_cafe_cart_v2";

/// Current persisted blob schema version.
pub const SCHEMA_VERSION: u32 = 2;

/// Errors that can occur in the storage adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the underlying store failed.
    #[error("storage read failed: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the underlying store failed.
    #[error("storage write failed: {0}")]
    Write(#[source] std::io::Error),

    /// The persisted blob does not decode as any known schema.
    #[error("persisted cart is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The in-memory backing lock was poisoned by a panicking holder.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Key-value persistence contract the cart store depends on.
///
/// Implementations must tolerate an absent value (`Ok(None)` from `read`).
/// Interpreting the blob is the store's job, not the adapter's.
pub trait CartStorage {
    /// Read the persisted blob, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the underlying store cannot be read.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the persisted blob.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the blob cannot be written.
    fn write(&self, blob: &str) -> Result<(), StorageError>;

    /// Delete the persisted blob. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if deletion fails for any reason
    /// other than the blob not existing.
    fn remove(&self) -> Result<(), StorageError>;
}

/// Persisted blob envelope, schema version 2.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedCart {
    schema_version: u32,
    items: Vec<LineItem>,
}

/// Encode line items as the current blob layout.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if serialization fails, which for this
/// data model means a bug rather than bad input.
pub fn encode_items(items: &[LineItem]) -> Result<String, StorageError> {
    let blob = PersistedCart {
        schema_version: SCHEMA_VERSION,
        items: items.to_vec(),
    };
    Ok(serde_json::to_string(&blob)?)
}

/// Decode a persisted blob, accepting the current envelope or the legacy
/// bare-array layout.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if the blob matches neither layout or
/// carries an unknown schema version.
pub fn decode_items(blob: &str) -> Result<Vec<LineItem>, StorageError> {
    match serde_json::from_str::<PersistedCart>(blob) {
        Ok(cart) if cart.schema_version == SCHEMA_VERSION => Ok(cart.items),
        Ok(cart) => Err(StorageError::Corrupt(serde::de::Error::custom(format!(
            "unknown schema_version {}",
            cart.schema_version
        )))),
        // Legacy blobs are a bare array of items
        Err(envelope_err) => {
            serde_json::from_str::<Vec<LineItem>>(blob).map_err(|_| envelope_err.into())
        }
    }
}

/// In-memory storage with a shared backing.
///
/// Clones share the same backing cell, so a test can open a second store
/// over the "storage" a previous one wrote to.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    cell: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store pre-seeded with a blob.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            cell: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let cell = self.cell.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(cell.clone())
    }

    fn write(&self, blob: &str) -> Result<(), StorageError> {
        let mut cell = self.cell.lock().map_err(|_| StorageError::Poisoned)?;
        *cell = Some(blob.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        let mut cell = self.cell.lock().map_err(|_| StorageError::Poisoned)?;
        *cell = None;
        Ok(())
    }
}

/// File-backed storage: one JSON file named by [`STORAGE_KEY`] inside a
/// caller-chosen directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file store rooted at `dir`. The directory is created on the
    /// first write, not here.
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Full path of the blob file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(e)),
        }
    }

    fn write(&self, blob: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StorageError::Write)?;
        }
        fs::write(&self.path, blob).map_err(StorageError::Write)
    }

    fn remove(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use hik_cafe_core::Price;

    use super::*;

    fn latte() -> LineItem {
        LineItem::new(
            "Latte".to_owned(),
            Price::parse("4.50").expect("valid price"),
            "img/latte.jpg".to_owned(),
        )
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let items = vec![latte()];
        let blob = encode_items(&items).expect("encode");
        let back = decode_items(&blob).expect("decode");
        assert_eq!(back, items);
    }

    #[test]
    fn test_decode_legacy_bare_array() {
        let blob = r#"[{"name":"Latte","unit_price":"4.50","image_ref":"img/latte.jpg","quantity":2}]"#;
        let items = decode_items(blob).expect("legacy decode");
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_decode_legacy_numeric_price() {
        // The original widget stored prices as JSON numbers
        let blob = r#"[{"name":"Mocha","unit_price":5.25,"image_ref":"img/mocha.jpg","quantity":1}]"#;
        let items = decode_items(blob).expect("numeric price decode");
        assert_eq!(
            items.first().map(|i| i.unit_price.display()),
            Some("$5.25".to_owned())
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_items("not json at all").is_err());
        assert!(decode_items(r#"{"schema_version":99,"items":[]}"#).is_err());
        assert!(decode_items(r#"{"something":"else"}"#).is_err());
    }

    #[test]
    fn test_memory_storage_clones_share_backing() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.write("blob").expect("write");
        assert_eq!(b.read().expect("read"), Some("blob".to_owned()));
        b.remove().expect("remove");
        assert_eq!(a.read().expect("read"), None);
    }

    #[test]
    fn test_file_storage_absent_reads_none() {
        let dir = std::env::temp_dir().join("hik-cafe-test-absent");
        let storage = FileStorage::new(&dir);
        let _ = storage.remove();
        assert!(storage.read().expect("read").is_none());
    }

    #[test]
    fn test_file_storage_write_read_remove() {
        let dir = std::env::temp_dir().join(format!("hik-cafe-test-{}", std::process::id()));
        let storage = FileStorage::new(&dir);
        storage.write("blob").expect("write");
        assert_eq!(storage.read().expect("read"), Some("blob".to_owned()));
        storage.remove().expect("remove");
        assert!(storage.read().expect("read").is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
