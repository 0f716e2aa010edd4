//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `DotsError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `dots-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DotsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `dots-*` crates.
pub type DotsResult<T> = Result<T, DotsError>;
