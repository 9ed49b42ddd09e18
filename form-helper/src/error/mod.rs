//! Error types and error handling
//!
//! Form markup is produced by pure functions, so the only errors are
//! programmer misuse: asking the tag primitive for an element with no
//! name, or handing a builder something that is not an option list where
//! one is required. Missing keys are never errors; they fall back to
//! defaults.

use thiserror::Error;

/// Result alias used by every builder in this crate
pub type Result<T> = std::result::Result<T, FormError>;

/// Form builder error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Tag primitive called without an element name
    #[error("Tag name must not be empty")]
    EmptyTagName,

    /// Element name that cannot appear in markup
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    /// Attribute name that would break out of the tag
    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    /// A control entry that must be an option list holds something else
    #[error("Control entry `{key}` must be an option list")]
    NotAnOptionList {
        /// The offending key
        key: String,
    },

    /// An option list reached the tag primitive as an attribute
    #[error("Attribute `{key}` holds an option list and cannot be rendered")]
    UnrenderableAttribute {
        /// The offending attribute name
        key: String,
    },

    /// Options could not be ingested from an external representation
    #[error("Invalid field options: {0}")]
    InvalidOptions(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
