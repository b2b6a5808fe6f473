//! Error types for the cube-tiler engine.

use thiserror::Error;

/// Errors that can arise while building the generator tables or the dancing-links matrix.
///
/// Both variants are construction-time errors: once a [`crate::dlx::Dlx`] is built from a
/// well-formed set of placements, search itself is infallible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A walk description referenced a column index outside the matrix's column count.
    #[error("placement touches column {col}, but the matrix only has {column_count} columns")]
    ColumnOutOfRange { col: usize, column_count: usize },

    /// The piece table was empty; there is nothing to tile with.
    #[error("no pieces configured")]
    EmptyPieceTable,
}

pub type Result<T> = std::result::Result<T, AppError>;
