//! Unified error handling for the cart engine.
//!
//! All fallible cart operations return `Result<T, CartError>`. The UI layer
//! maps these to user-facing notices; nothing here is fatal to the page.

use thiserror::Error;

use hik_cafe_core::PriceError;

use crate::storage::StorageError;

/// Errors surfaced by cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// An add was attempted with an invalid price.
    #[error("invalid item: {0}")]
    InvalidItem(#[from] PriceError),

    /// An index from a stale render no longer identifies a line item.
    #[error("no line item at index {index} (cart has {len})")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of line items at the time of the call.
        len: usize,
    },

    /// Storage adapter failure. Recovered internally wherever possible;
    /// only explicit storage calls surface this.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for [`CartError`].
pub type Result<T> = std::result::Result<T, CartError>;
