//! # Validation Module
//!
//! Shape and content checks for raw order records.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     OrderValidator::validate                            │
//! │                                                                         │
//! │  record                                                                 │
//! │    │                                                                    │
//! │    ├── name / money / items key absent? → Required { field }           │
//! │    │                                                                    │
//! │    ├── name not a string, or outside [A-Za-z0-9_\s'-]+ ?               │
//! │    │                                    → InvalidFormat { "name" }     │
//! │    │                                                                    │
//! │    ├── items not an array?              → InvalidFormat { "items" }    │
//! │    │                                                                    │
//! │    ├── money not a number?              → InvalidFormat { "money" }    │
//! │    │                                                                    │
//! │    └── OK                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use breakfast_core::validation::OrderValidator;
//! use serde_json::json;
//!
//! let order = json!({ "name": "O'Brien-Smith", "money": 4.5, "items": [] });
//! assert!(OrderValidator::validate(&order).is_ok());
//!
//! let order = json!({ "name": "<script>alert(1)</script>", "money": 4.5, "items": [] });
//! assert!(OrderValidator::validate(&order).is_err());
//! ```

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fields every order must carry, in the order they are checked.
const REQUIRED_FIELDS: [&str; 3] = ["name", "money", "items"];

/// Whole-string match; `[:alnum:]` and `[:space:]` are ASCII classes.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:alnum:][:space:]_'-]+$").expect("Invalid customer name regex pattern")
});

/// Validates raw order records.
pub struct OrderValidator;

impl OrderValidator {
    /// Validates one order record.
    ///
    /// Success carries no value; the absence of an error is the contract.
    pub fn validate(order: &Value) -> ValidationResult<()> {
        for field in REQUIRED_FIELDS {
            if order.get(field).is_none() {
                return Err(ValidationError::Required { field });
            }
        }

        validate_name(&order["name"])?;

        if !order["items"].is_array() {
            return Err(ValidationError::InvalidFormat {
                field: "items",
                reason: "must be an array".to_string(),
            });
        }

        if !order["money"].is_number() {
            return Err(ValidationError::InvalidFormat {
                field: "money",
                reason: "must be numeric".to_string(),
            });
        }

        Ok(())
    }
}

/// Validates a customer name against the character whitelist.
///
/// ## Rules
/// - Must be a JSON string
/// - Must be non-empty
/// - Only letters, digits, whitespace, apostrophe, hyphen, underscore
///
/// ## Example
/// ```rust
/// use breakfast_core::validation::validate_name;
/// use serde_json::json;
///
/// assert!(validate_name(&json!("jenny")).is_ok());
/// assert!(validate_name(&json!("mary_jane 2")).is_ok());
/// assert!(validate_name(&json!("bob!")).is_err());
/// assert!(validate_name(&json!(7)).is_err());
/// ```
pub fn validate_name(name: &Value) -> ValidationResult<()> {
    let Some(name) = name.as_str() else {
        return Err(ValidationError::InvalidFormat {
            field: "name",
            reason: format!("must be a string, got {}", name),
        });
    };

    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidFormat {
            field: "name",
            reason: format!("invalid characters in {:?}", name),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn order(name: Value) -> Value {
        json!({ "name": name, "money": 10.0, "items": ["espresso"] })
    }

    #[test]
    fn test_valid_order() {
        assert!(OrderValidator::validate(&order(json!("dave"))).is_ok());
        assert!(OrderValidator::validate(&json!({
            "name": "jenny", "money": 0, "items": []
        }))
        .is_ok());
    }

    #[test]
    fn test_missing_fields() {
        for field in REQUIRED_FIELDS {
            let mut record = order(json!("dave"));
            record.as_object_mut().unwrap().remove(field);
            assert_eq!(
                OrderValidator::validate(&record),
                Err(ValidationError::Required { field })
            );
        }
    }

    #[test]
    fn test_non_object_record_is_missing_fields() {
        assert_eq!(
            OrderValidator::validate(&json!(["dave", 10.0])),
            Err(ValidationError::Required { field: "name" })
        );
        assert_eq!(
            OrderValidator::validate(&json!(null)),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn test_null_value_counts_as_present() {
        // The key exists, so this is a type error, not a missing field.
        let err = OrderValidator::validate(&json!({
            "name": "dave", "money": null, "items": []
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "money", .. }));
    }

    #[test]
    fn test_name_whitelist() {
        // Valid names
        assert!(validate_name(&json!("dave")).is_ok());
        assert!(validate_name(&json!("O'Neil")).is_ok());
        assert!(validate_name(&json!("anne-marie")).is_ok());
        assert!(validate_name(&json!("table_7")).is_ok());
        assert!(validate_name(&json!("Mary Jane\tSmith")).is_ok());

        // Invalid names
        assert!(validate_name(&json!("")).is_err());
        assert!(validate_name(&json!("<script>alert('x')</script>")).is_err());
        assert!(validate_name(&json!("dave;")).is_err());
        assert!(validate_name(&json!("dave\u{00a0}")).is_err());
        assert!(validate_name(&json!("José")).is_err());
        assert!(validate_name(&json!(null)).is_err());
        assert!(validate_name(&json!(["dave"])).is_err());
    }

    #[test]
    fn test_name_checked_before_items_and_money() {
        let err = OrderValidator::validate(&json!({
            "name": "<b>", "money": "ten", "items": "espresso"
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "name", .. }));
    }

    #[test]
    fn test_items_must_be_array() {
        let err = OrderValidator::validate(&json!({
            "name": "dave", "money": 10, "items": "espresso"
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "items", .. }));
    }

    #[test]
    fn test_money_must_be_numeric() {
        for money in [json!("10.0"), json!(true), json!([10])] {
            let err = OrderValidator::validate(&json!({
                "name": "dave", "money": money, "items": []
            }))
            .unwrap_err();
            assert!(matches!(err, ValidationError::InvalidFormat { field: "money", .. }));
        }
    }

    proptest! {
        #[test]
        fn prop_names_outside_whitelist_are_rejected(
            prefix in "[a-z]{0,5}",
            bad in "[<>;!@#$%^&*()=+{}\\[\\]|\\\\/?.,:\"]",
            suffix in "[a-z]{0,5}",
        ) {
            let name = format!("{prefix}{bad}{suffix}");
            prop_assert!(OrderValidator::validate(&order(json!(name))).is_err());
        }

        #[test]
        fn prop_whitelisted_names_are_accepted(name in "[A-Za-z0-9_ '-]{1,30}") {
            prop_assert!(OrderValidator::validate(&order(json!(name))).is_ok());
        }
    }
}
