//! Grid-subsystem error type.

use thiserror::Error;

use bc_core::CoreError;

/// Errors produced by `bc-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid text contains no rows")]
    Empty,

    #[error("row {line} has {got} tiles, expected {expected}")]
    RaggedRow {
        line:     usize,
        expected: usize,
        got:      usize,
    },

    #[error("unknown tile glyph {glyph:?} at row {line}, column {column}")]
    UnknownGlyph {
        glyph:  char,
        line:   usize,
        column: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GridResult<T> = Result<T, GridError>;
