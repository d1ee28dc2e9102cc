//! # Domain Types
//!
//! Core domain types used throughout Breakfast Till.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PriceListEntry  │   │      Order      │   │   OrderResult   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (unique)    │   │  name           │   │  name           │       │
//! │  │  price          │   │  money          │   │  change         │       │
//! │  └─────────────────┘   │  items [id]     │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │  UnknownItems   │   Warning payload: order name + ids not priced    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Raw payloads are validated as `serde_json::Value` first, so a missing key
//! and a wrongly-typed key produce distinct errors. These types are what
//! survives validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::validation::OrderValidator;

// =============================================================================
// Price List Entry
// =============================================================================

/// One priced item on the menu.
///
/// Extra fields in the payload (such as a display `name`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListEntry {
    /// Item identifier referenced by orders, e.g. `"flat-white"`.
    pub id: String,

    /// Price in major units. Zero is a valid price.
    pub price: f64,
}

impl PriceListEntry {
    pub fn new(id: impl Into<String>, price: f64) -> Self {
        PriceListEntry {
            id: id.into(),
            price,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A validated customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Customer name; letters, digits, whitespace, `'`, `-`, `_` only.
    pub name: String,

    /// Money tendered, in major units.
    pub money: f64,

    /// Item ids in the order they were listed. May be empty.
    ///
    /// Non-string entries from the payload are kept as their JSON text so
    /// they can be reported as unknown items.
    pub items: Vec<String>,
}

impl Order {
    /// Validates a raw order record and extracts the typed order.
    ///
    /// ## Example
    /// ```rust
    /// use breakfast_core::Order;
    /// use serde_json::json;
    ///
    /// let order = Order::from_record(&json!({
    ///     "name": "jenny",
    ///     "money": 5,
    ///     "items": ["espresso"]
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(order.money, 5.0);
    /// assert_eq!(order.items, vec!["espresso".to_string()]);
    /// ```
    pub fn from_record(record: &Value) -> Result<Self, ValidationError> {
        OrderValidator::validate(record)?;

        // Shape is guaranteed by the validator from here on.
        let name = record["name"].as_str().unwrap_or_default().to_string();
        let money = record["money"].as_f64().unwrap_or_default();
        let items = record["items"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(id) => id.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Order { name, money, items })
    }
}

// =============================================================================
// Order Result
// =============================================================================

/// Change owed for one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    pub name: String,

    /// Money minus the cost of recognized items, rounded to 2 decimals.
    /// Negative when the order was under-paid.
    pub change: f64,
}

impl OrderResult {
    pub fn new(name: impl Into<String>, change: f64) -> Self {
        OrderResult {
            name: name.into(),
            change,
        }
    }
}

// =============================================================================
// Unknown Items
// =============================================================================

/// Item ids an order referenced that the catalog does not price.
///
/// Handed to a [`crate::WarningSink`]; never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownItems {
    pub order_name: String,
    pub item_ids: Vec<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
