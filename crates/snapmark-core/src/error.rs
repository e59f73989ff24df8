//! Error handling for Snapmark core types.
//!
//! The editing engine never surfaces these to its host: the command and tool
//! layers log them and degrade to a no-op. They exist so that document
//! operations can report *why* nothing happened.

use thiserror::Error;

use crate::types::ItemId;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No item with this identity is in the document (stale reference).
    #[error("Item {0} not found")]
    ItemNotFound(ItemId),

    /// An item with this identity is already in the document.
    #[error("Item {0} already present")]
    DuplicateItem(ItemId),

    /// A z-order position outside the item sequence.
    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of items in the document.
        len: usize,
    },

    /// An operation needed a selection and there was none.
    #[error("No item selected")]
    NoSelection,

    /// A colour string that is not `#rrggbb` or `#rrggbbaa`.
    #[error("Invalid color '{0}'")]
    InvalidColor(String),
}

/// Result type alias using the core [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
