//! Error types for parsing page-provided configuration.

use thiserror::Error;

/// Errors produced when interpreting `data-*` attribute values.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// A dropdown item named a facet other than `stage` or `category`.
    #[error("unknown filter facet: {0}")]
    UnknownFacet(String),

    /// The canvas requested a color variant that does not exist.
    #[error("unknown color variant: {0}")]
    UnknownVariant(String),

    /// A numeric setting was not a finite, positive number.
    #[error("invalid value for '{name}': {value}")]
    InvalidNumber { name: String, value: String },
}
