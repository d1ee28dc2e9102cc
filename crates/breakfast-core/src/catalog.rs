//! # Price Catalog
//!
//! Immutable mapping from item id to price, built once per `process` call.
//!
//! ## Construction Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each record (in order, first failure wins):                        │
//! │    not an object / no "id"     → MissingField { index, "id" }           │
//! │    id not a non-empty string   → InvalidField { index, "id" }           │
//! │    no "price" key              → MissingField { index, "price" }        │
//! │    price not a number          → InvalidField { index, "price" }        │
//! │    id already seen             → DuplicateId { id }                     │
//! │                                                                         │
//! │  "price": 0 is valid. Only an ABSENT key is rejected.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

use crate::error::PriceListError;
use crate::types::PriceListEntry;

/// Validated id→price lookup.
///
/// ## Invariants
/// - No duplicate ids
/// - Every id is a non-empty string with a numeric price
/// - No mutation after construction
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    prices: HashMap<String, f64>,
}

impl PriceCatalog {
    /// Builds a catalog from raw price list records.
    ///
    /// ## Example
    /// ```rust
    /// use breakfast_core::PriceCatalog;
    /// use serde_json::json;
    ///
    /// let records = vec![
    ///     json!({ "id": "espresso", "name": "Espresso", "price": 2.0 }),
    ///     json!({ "id": "bbq-sauce", "price": 0 }),
    /// ];
    /// let catalog = PriceCatalog::from_records(&records).unwrap();
    ///
    /// assert_eq!(catalog.price_for("espresso"), Some(2.0));
    /// assert_eq!(catalog.price_for("bbq-sauce"), Some(0.0));
    /// assert_eq!(catalog.price_for("unicorn-frappe"), None);
    /// ```
    pub fn from_records(records: &[Value]) -> Result<Self, PriceListError> {
        let mut catalog = PriceCatalog::default();
        for (index, record) in records.iter().enumerate() {
            catalog.insert(entry_from_record(index, record)?)?;
        }

        debug!(items = catalog.len(), "Price catalog built");
        Ok(catalog)
    }

    /// Builds a catalog from typed entries, rejecting duplicate ids.
    pub fn from_entries(
        entries: impl IntoIterator<Item = PriceListEntry>,
    ) -> Result<Self, PriceListError> {
        let mut catalog = PriceCatalog::default();
        for entry in entries {
            catalog.insert(entry)?;
        }

        debug!(items = catalog.len(), "Price catalog built");
        Ok(catalog)
    }

    // Construction only; the catalog is never mutated once returned.
    fn insert(&mut self, entry: PriceListEntry) -> Result<(), PriceListError> {
        match self.prices.entry(entry.id) {
            Entry::Occupied(slot) => Err(PriceListError::DuplicateId {
                id: slot.key().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(entry.price);
                Ok(())
            }
        }
    }

    /// Returns the price for `id`, or `None` if the catalog doesn't carry it.
    #[inline]
    pub fn price_for(&self, id: &str) -> Option<f64> {
        self.prices.get(id).copied()
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.prices.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

fn entry_from_record(index: usize, record: &Value) -> Result<PriceListEntry, PriceListError> {
    let id = match record.get("id") {
        None => return Err(PriceListError::MissingField { index, field: "id" }),
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(other) => {
            return Err(PriceListError::InvalidField {
                index,
                field: "id",
                reason: format!("expected a non-empty string, got {}", other),
            })
        }
    };

    let price = match record.get("price") {
        None => {
            return Err(PriceListError::MissingField {
                index,
                field: "price",
            })
        }
        Some(value) => value.as_f64().ok_or_else(|| PriceListError::InvalidField {
            index,
            field: "price",
            reason: format!("expected a number, got {}", value),
        })?,
    };

    Ok(PriceListEntry { id, price })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn menu() -> Vec<Value> {
        vec![
            json!({ "id": "flat-white", "name": "Flat White", "price": 3.0 }),
            json!({ "id": "espresso", "name": "Espresso", "price": 2.0 }),
            json!({ "id": "bacon-egg-roll", "name": "Bacon & Egg Roll", "price": 5.0 }),
            json!({ "id": "bbq-sauce", "name": "BBQ Sauce", "price": 0.0 }),
        ]
    }

    #[test]
    fn test_builds_from_menu() {
        let catalog = PriceCatalog::from_records(&menu()).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.price_for("flat-white"), Some(3.0));
        assert_eq!(catalog.price_for("bbq-sauce"), Some(0.0));
        assert!(catalog.contains("espresso"));
        assert!(!catalog.contains("Espresso"));
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = PriceCatalog::from_records(&menu()).unwrap();
        assert_eq!(catalog.price_for("unicorn-frappe"), None);
        assert_eq!(catalog.price_for(""), None);
    }

    #[test]
    fn test_empty_price_list() {
        let catalog = PriceCatalog::from_records(&[]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.price_for("espresso"), None);
    }

    #[test]
    fn test_missing_id() {
        let err = PriceCatalog::from_records(&[json!({ "price": 2.0 })]).unwrap_err();
        assert_eq!(err, PriceListError::MissingField { index: 0, field: "id" });
    }

    #[test]
    fn test_missing_price_key() {
        let mut records = menu();
        records.push(json!({ "id": "muffin", "name": "Muffin" }));
        let err = PriceCatalog::from_records(&records).unwrap_err();
        assert_eq!(
            err,
            PriceListError::MissingField {
                index: 4,
                field: "price"
            }
        );
    }

    #[test]
    fn test_invalid_field_shapes() {
        for record in [
            json!({ "id": null, "price": 1.0 }),
            json!({ "id": "", "price": 1.0 }),
            json!({ "id": 7, "price": 1.0 }),
            json!({ "id": "muffin", "price": null }),
            json!({ "id": "muffin", "price": "4.50" }),
        ] {
            let err = PriceCatalog::from_records(&[record]).unwrap_err();
            assert!(matches!(err, PriceListError::InvalidField { index: 0, .. }));
        }
    }

    #[test]
    fn test_non_object_record() {
        let err = PriceCatalog::from_records(&[json!("espresso")]).unwrap_err();
        assert_eq!(err, PriceListError::MissingField { index: 0, field: "id" });
    }

    #[test]
    fn test_duplicate_id() {
        let mut records = menu();
        records.push(json!({ "id": "espresso", "price": 2.5 }));
        let err = PriceCatalog::from_records(&records).unwrap_err();
        assert_eq!(
            err,
            PriceListError::DuplicateId {
                id: "espresso".to_string()
            }
        );
    }

    #[test]
    fn test_from_entries() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceListEntry::new("espresso", 2.0),
            PriceListEntry::new("latte", 3.5),
        ])
        .unwrap();
        assert_eq!(catalog.price_for("latte"), Some(3.5));

        let err = PriceCatalog::from_entries(vec![
            PriceListEntry::new("latte", 3.5),
            PriceListEntry::new("latte", 3.5),
        ])
        .unwrap_err();
        assert!(matches!(err, PriceListError::DuplicateId { .. }));
    }

    proptest! {
        #[test]
        fn prop_duplicate_anywhere_is_rejected(
            size in 1usize..40,
            dup_seed in any::<usize>(),
            insert_seed in any::<usize>(),
        ) {
            let mut records: Vec<Value> = (0..size)
                .map(|i| json!({ "id": format!("item-{i}"), "price": i as f64 }))
                .collect();
            let dup = records[dup_seed % size].clone();
            records.insert(insert_seed % (size + 1), dup);

            prop_assert!(
                matches!(
                    PriceCatalog::from_records(&records),
                    Err(PriceListError::DuplicateId { .. })
                ),
                "expected DuplicateId error"
            );
        }
    }
}
