//! # Order Processor
//!
//! The orchestrator: parse both payloads, build the catalog, then fold over
//! the orders computing change.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       OrderProcessor::process                           │
//! │                                                                         │
//! │  price list JSON ──► parse ──┐                                          │
//! │                              ├──► PriceCatalog::from_records            │
//! │  orders JSON ──────► parse ──┘            │                             │
//! │                                           ▼                             │
//! │                          for each order (input order):                  │
//! │                            OrderValidator::validate ── Err ──► ABORT   │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                            total_cost ── unknown ids? ──► WarningSink  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                            change = round(money - total, 2)             │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                          [{ name, change }, ...] ──► JSON               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failure is all-or-nothing: the first bad payload, price entry or order
//! ends the call and no results are returned. Unknown items never fail.

use serde_json::Value;
use std::cell::RefCell;
use tracing::{info, warn};

use crate::catalog::PriceCatalog;
use crate::error::{BreakfastError, BreakfastResult, ValidationError};
use crate::money::round_to_cents;
use crate::types::{Order, OrderResult, UnknownItems};

const PRICE_LIST: &str = "price list";
const ORDERS: &str = "orders";

// =============================================================================
// Warning Sink
// =============================================================================

/// Receives advisory warnings raised while processing.
///
/// Warnings never change results or control flow. Closures taking
/// `&UnknownItems` implement this trait directly.
pub trait WarningSink {
    /// Called once per order that referenced ids the catalog doesn't price.
    fn unknown_items(&self, warning: &UnknownItems);
}

impl<F> WarningSink for F
where
    F: Fn(&UnknownItems),
{
    fn unknown_items(&self, warning: &UnknownItems) {
        self(warning)
    }
}

/// Emits each warning as a `tracing` WARN event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarnings;

impl WarningSink for TracingWarnings {
    fn unknown_items(&self, warning: &UnknownItems) {
        warn!(
            order = %warning.order_name,
            items = %warning.item_ids.join(", "),
            "Skipping unknown items"
        );
    }
}

/// Keeps every warning in memory, in the order raised.
#[derive(Debug, Default)]
pub struct WarningLog {
    entries: RefCell<Vec<UnknownItems>>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the warnings raised so far.
    pub fn entries(&self) -> Vec<UnknownItems> {
        self.entries.borrow().clone()
    }

    /// Removes and returns the warnings raised so far.
    pub fn take(&self) -> Vec<UnknownItems> {
        self.entries.take()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl WarningSink for WarningLog {
    fn unknown_items(&self, warning: &UnknownItems) {
        self.entries.borrow_mut().push(warning.clone());
    }
}

// =============================================================================
// Order Processor
// =============================================================================

/// Computes change for a batch of orders against a price list.
///
/// ## Example
/// ```rust
/// use breakfast_core::{OrderProcessor, WarningLog};
///
/// let prices = r#"[
///     { "id": "espresso", "price": 2.0 },
///     { "id": "flat-white", "price": 3.0 }
/// ]"#;
/// let orders = r#"[
///     { "name": "jenny", "money": 5.0, "items": ["espresso", "unicorn-frappe"] }
/// ]"#;
///
/// let processor = OrderProcessor::new(WarningLog::new());
/// let output = processor.process(prices, orders).unwrap();
///
/// assert_eq!(output, r#"[{"name":"jenny","change":3.0}]"#);
/// assert_eq!(processor.sink().entries()[0].item_ids, vec!["unicorn-frappe"]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderProcessor<S = TracingWarnings> {
    sink: S,
}

/// Reports warnings through `tracing`.
impl Default for OrderProcessor<TracingWarnings> {
    fn default() -> Self {
        OrderProcessor::new(TracingWarnings)
    }
}

impl<S: WarningSink> OrderProcessor<S> {
    /// Creates a processor that reports warnings to `sink`.
    pub fn new(sink: S) -> Self {
        OrderProcessor { sink }
    }

    /// Returns the warning sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Processes JSON payloads and returns the result JSON.
    ///
    /// ## Errors
    /// - `MalformedInput` if either payload is not a JSON array
    /// - `InvalidPriceList` if the catalog can't be built
    /// - `InvalidOrder` on the first order that fails validation or whose
    ///   change can't be represented
    pub fn process(&self, price_list_json: &str, orders_json: &str) -> BreakfastResult<String> {
        let price_list = parse_records(PRICE_LIST, price_list_json)?;
        let orders = parse_records(ORDERS, orders_json)?;

        let results = self.process_records(&price_list, &orders)?;
        Ok(serde_json::to_string(&results)?)
    }

    /// Processes already-parsed records.
    ///
    /// Results follow input order one-for-one; duplicate names are kept.
    pub fn process_records(
        &self,
        price_list: &[Value],
        orders: &[Value],
    ) -> BreakfastResult<Vec<OrderResult>> {
        let catalog = PriceCatalog::from_records(price_list)?;

        let results = orders
            .iter()
            .map(|record| -> BreakfastResult<OrderResult> {
                let order = Order::from_record(record)?;
                self.process_order(&order, &catalog)
            })
            .collect::<BreakfastResult<Vec<_>>>()?;

        info!(orders = results.len(), "Orders processed");
        Ok(results)
    }

    /// Computes the change for one validated order.
    ///
    /// ## Errors
    /// `InvalidOrder` (`OutOfRange` on `change`) when money minus the total
    /// overflows to infinity or NaN.
    pub fn process_order(
        &self,
        order: &Order,
        catalog: &PriceCatalog,
    ) -> BreakfastResult<OrderResult> {
        let (total, unknown) = total_cost(&order.items, catalog);

        if !unknown.is_empty() {
            self.sink.unknown_items(&UnknownItems {
                order_name: order.name.clone(),
                item_ids: unknown,
            });
        }

        let change = round_to_cents(order.money - total)
            .ok_or(ValidationError::OutOfRange { field: "change" })?;
        Ok(OrderResult::new(&order.name, change))
    }
}

/// Sums the prices of known items.
///
/// Returns the total and the ids the catalog doesn't carry, in order of
/// appearance (repeats included). Unknown ids contribute exactly 0.
///
/// ## Example
/// ```rust
/// use breakfast_core::{processor::total_cost, PriceCatalog, PriceListEntry};
///
/// let catalog = PriceCatalog::from_entries(vec![PriceListEntry::new("espresso", 2.0)]).unwrap();
/// let items = vec!["espresso".to_string(), "muffin".to_string()];
///
/// let (total, unknown) = total_cost(&items, &catalog);
/// assert_eq!(total, 2.0);
/// assert_eq!(unknown, vec!["muffin".to_string()]);
/// ```
pub fn total_cost(items: &[String], catalog: &PriceCatalog) -> (f64, Vec<String>) {
    let mut unknown = Vec::new();
    let total: f64 = items
        .iter()
        .map(|id| {
            catalog.price_for(id).unwrap_or_else(|| {
                unknown.push(id.clone());
                0.0
            })
        })
        .sum();

    (total, unknown)
}

/// Processes JSON payloads, logging unknown items through `tracing`.
///
/// ## Example
/// ```rust
/// let prices = r#"[{ "id": "espresso", "price": 2.0 }]"#;
/// let orders = r#"[{ "name": "jenny", "money": 5.0, "items": ["espresso"] }]"#;
///
/// let output = breakfast_core::process(prices, orders).unwrap();
/// assert_eq!(output, r#"[{"name":"jenny","change":3.0}]"#);
/// ```
pub fn process(price_list_json: &str, orders_json: &str) -> BreakfastResult<String> {
    OrderProcessor::new(TracingWarnings).process(price_list_json, orders_json)
}

fn parse_records(payload: &'static str, json: &str) -> BreakfastResult<Vec<Value>> {
    match serde_json::from_str(json) {
        Ok(Value::Array(records)) => Ok(records),
        Ok(other) => Err(BreakfastError::malformed(
            payload,
            format!("expected an array, got {}", json_type(&other)),
        )),
        Err(e) => Err(BreakfastError::malformed(payload, e.to_string())),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
