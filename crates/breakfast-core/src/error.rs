//! # Error Types
//!
//! Domain-specific error types for breakfast-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  breakfast-core errors (this file)                                     │
//! │  ├── BreakfastError   - What a `process` call fails with               │
//! │  ├── PriceListError   - Price catalog construction failures            │
//! │  └── ValidationError  - Order record validation failures               │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - Adds I/O + config, maps to exit codes          │
//! │                                                                         │
//! │  Flow: ValidationError → BreakfastError → CliError → stderr            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, id, field)
//! 3. Errors are enum variants, never String
//! 4. Unknown item ids are NOT errors; they are warnings

use thiserror::Error;

// =============================================================================
// Breakfast Error
// =============================================================================

/// Errors returned by the order-processing pipeline.
///
/// Every variant aborts the whole call; no partial results accompany it.
#[derive(Debug, Error)]
pub enum BreakfastError {
    /// One of the JSON payloads could not be parsed, or was not an array.
    ///
    /// ## When This Occurs
    /// - Unterminated array, trailing garbage, invalid tokens
    /// - Payload is valid JSON but not an array (e.g. an object)
    #[error("Malformed JSON in {payload}: {reason}")]
    MalformedInput {
        payload: &'static str,
        reason: String,
    },

    /// The price list could not be turned into a catalog.
    #[error("Invalid price list: {0}")]
    InvalidPriceList(#[from] PriceListError),

    /// An order record failed validation.
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] ValidationError),

    /// The results could not be encoded as JSON.
    #[error("Failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Coarse classification of a [`BreakfastError`].
///
/// Lets callers react differently without matching on detail variants,
/// e.g. 400 for malformed input vs 422 for a bad order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    InvalidPriceList,
    InvalidOrder,
    Internal,
}

impl BreakfastError {
    /// Creates a malformed input error for the named payload.
    pub fn malformed(payload: &'static str, reason: impl Into<String>) -> Self {
        BreakfastError::MalformedInput {
            payload,
            reason: reason.into(),
        }
    }

    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BreakfastError::MalformedInput { .. } => ErrorKind::MalformedInput,
            BreakfastError::InvalidPriceList(_) => ErrorKind::InvalidPriceList,
            BreakfastError::InvalidOrder(_) => ErrorKind::InvalidOrder,
            BreakfastError::Encode(_) => ErrorKind::Internal,
        }
    }
}

// =============================================================================
// Price List Error
// =============================================================================

/// Price catalog construction errors.
#[derive(Debug, Error, PartialEq)]
pub enum PriceListError {
    /// An entry is missing `id` or `price`.
    ///
    /// A `price` of 0 is fine; only an absent key triggers this.
    #[error("entry {index} is missing '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// An entry has the key but the value has the wrong shape.
    #[error("entry {index} has invalid '{field}': {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },

    /// Two entries share the same id.
    #[error("duplicate item id '{id}'")]
    DuplicateId { id: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Order validation errors.
///
/// These occur when an order record doesn't meet requirements.
/// Validation runs before any price lookup.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("missing field '{field}'")]
    Required { field: &'static str },

    /// Invalid format (e.g. name with markup, non-numeric money).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    /// A computed amount overflowed to infinity or NaN.
    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BreakfastError.
pub type BreakfastResult<T> = Result<T, BreakfastError>;

// =============================================================================
// Unit Tests
// =============================================================================
