//! # breakfast-core: Pure Business Logic for Breakfast Till
//!
//! Works out the change owed on a batch of breakfast orders against a
//! price list. Every function here is pure apart from the warnings handed to
//! a [`WarningSink`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Breakfast Till Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  breakfast-till (apps/cli)                      │   │
//! │  │     config ──► read files ──► process ──► stdout / exit code    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ breakfast-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │validation │  │ processor │  │   money   │  │   │
//! │  │   │  id→price │  │  orders   │  │  change   │  │   cents   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENV • PURE FUNCTIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PriceListEntry, Order, OrderResult)
//! - [`catalog`] - Immutable price catalog
//! - [`validation`] - Order record validation
//! - [`processor`] - The orchestrating pipeline and warning sinks
//! - [`money`] - Integer-cent Money, where change gets rounded
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use breakfast_core::{process, ErrorKind};
//!
//! let prices = r#"[
//!     { "id": "espresso", "price": 2.0 },
//!     { "id": "flat-white", "price": 3.0 },
//!     { "id": "bacon-egg-roll", "price": 5.0 },
//!     { "id": "bbq-sauce", "price": 0.0 }
//! ]"#;
//! let orders = r#"[
//!     { "name": "dave", "money": 10.0, "items": ["flat-white", "bacon-egg-roll", "bbq-sauce"] },
//!     { "name": "jenny", "money": 5.0, "items": ["espresso"] }
//! ]"#;
//!
//! let output = process(prices, orders).unwrap();
//! assert_eq!(output, r#"[{"name":"dave","change":2.0},{"name":"jenny","change":3.0}]"#);
//!
//! let err = process(prices, "[").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedInput);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod processor;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::PriceCatalog;
pub use error::{BreakfastError, BreakfastResult, ErrorKind, PriceListError, ValidationError};
pub use money::Money;
pub use processor::{process, OrderProcessor, TracingWarnings, WarningLog, WarningSink};
pub use types::*;
pub use validation::OrderValidator;
