//! Error handling for MirrorStroke
//!
//! Provides error types for the recoverable edges of the system:
//! - Symmetry errors (property access on a multi-stroke feature)
//! - Guide errors (guide collection lookups in the host image)
//!
//! Contract violations inside the mirror core (bad stroke index, deactivating
//! an axis that has no guide) are assertions, not errors.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::data::GuideId;

/// Symmetry error type
///
/// Represents errors raised when a multi-stroke feature is configured
/// through its named properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymmetryError {
    /// No property with this name exists on the feature
    #[error("Unknown property '{name}'")]
    UnknownProperty {
        /// The property name that was requested.
        name: String,
    },

    /// The value has the wrong type for the property
    #[error("Invalid value for '{name}': expected {expected}")]
    InvalidValue {
        /// The property name.
        name: String,
        /// The expected value kind.
        expected: String,
    },

    /// A position outside `[0, +inf)`
    #[error("Value out of range for '{name}': {value}")]
    PositionOutOfRange {
        /// The property name.
        name: String,
        /// The rejected value.
        value: f64,
    },
}

/// Guide error type
///
/// Represents errors raised by the host guide collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// The guide is not part of the image
    #[error("Guide {id} not found")]
    NotFound {
        /// The guide id that was looked up.
        id: GuideId,
    },

    /// The guide is already attached to the image
    #[error("Guide {id} already attached")]
    AlreadyAttached {
        /// The guide id that was attached twice.
        id: GuideId,
    },
}

/// Main error type for MirrorStroke
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Symmetry error
    #[error(transparent)]
    Symmetry(#[from] SymmetryError),

    /// Guide error
    #[error(transparent)]
    Guide(#[from] GuideError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a symmetry error
    pub fn is_symmetry_error(&self) -> bool {
        matches!(self, Error::Symmetry(_))
    }

    /// Check if this is a guide error
    pub fn is_guide_error(&self) -> bool {
        matches!(self, Error::Guide(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
