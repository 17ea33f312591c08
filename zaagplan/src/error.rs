//! Error types for the cutting-plan library.

use thiserror::Error;

/// Malformed piece input. The operation that produced it is rejected as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Label is empty (or only whitespace).
    #[error("piece label is empty")]
    EmptyLabel,

    /// Length is zero or negative.
    #[error("piece length must be positive, got {0} mm")]
    NonPositiveLength(i64),
}

/// Errors of operations on a [`PieceRegistry`](crate::entities::PieceRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The piece data itself is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The index does not refer to a piece in the registry.
    #[error("piece index {index} is out of range (registry holds {len} pieces)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The stock configuration makes it impossible to build a plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No stock lengths were supplied while there are pieces to cut.
    #[error("no stock lengths available to cut {n_pieces} pieces from")]
    NoStockLengths { n_pieces: usize },

    /// A stock length of 0 mm was supplied.
    #[error("stock lengths must be positive")]
    ZeroStockLength,
}

/// Errors while parsing a textual piece list, pointing at the offending line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PieceListError {
    #[error("line {line}: expected `length, quantity[, label]`, got {found:?}")]
    Format { line: usize, found: String },

    #[error("line {line}: invalid length {value:?}")]
    Length { line: usize, value: String },

    #[error("line {line}: invalid quantity {value:?}")]
    Quantity { line: usize, value: String },

    #[error("line {line}: {source}")]
    Piece {
        line: usize,
        #[source]
        source: ValidationError,
    },
}
