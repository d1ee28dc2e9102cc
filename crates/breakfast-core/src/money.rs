//! # Money Module
//!
//! Provides the `Money` type and the one rounding point for change.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Payloads carry prices and tendered money as JSON numbers (floats).    │
//! │                                                                         │
//! │    money - sum(prices)  ──►  round_to_cents  ──►  change (f64)         │
//! │         (f64)                      │                                    │
//! │                                    ├── fits in i64 cents: via Money    │
//! │                                    ├── beyond i64 cents: unchanged     │
//! │                                    └── NaN / ±inf: None                │
//! │                                                                         │
//! │  Change inside the cent range is derived from whole cents, so          │
//! │  10.0 - 0.1 - 0.2 comes out as 9.70, never 9.700000000000001.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use breakfast_core::money::{round_to_cents, Money};
//!
//! let change = Money::try_from_major(10.0 - 0.1 - 0.2).unwrap();
//! assert_eq!(change.cents(), 970);
//! assert_eq!(round_to_cents(10.0 - 0.1 - 0.2), Some(9.7));
//! ```

/// 2^63 as f64: the first cent count an i64 can't hold.
const CENTS_LIMIT: f64 = 9_223_372_036_854_775_808.0;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: change can be negative when an order is under-paid
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use breakfast_core::money::Money;
    ///
    /// let price = Money::from_cents(350); // 3.50
    /// assert_eq!(price.cents(), 350);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit amount into cents, rounding to 2 decimals.
    ///
    /// ## Rounding
    /// Half away from zero (`f64::round` on the cent value):
    /// 0.125 → 0.13, -0.125 → -0.13. Values whose binary representation
    /// falls just below the half (1.005 is stored as 1.00499…) round down.
    ///
    /// Returns `None` for NaN, infinities, and amounts whose cent count
    /// doesn't fit in an i64.
    ///
    /// ## Example
    /// ```rust
    /// use breakfast_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_major(2.0).map(|m| m.cents()), Some(200));
    /// assert_eq!(Money::try_from_major(-0.125).map(|m| m.cents()), Some(-13));
    /// assert_eq!(Money::try_from_major(1e20), None);
    /// assert_eq!(Money::try_from_major(f64::NAN), None);
    /// ```
    pub fn try_from_major(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        if cents.is_finite() && cents.abs() < CENTS_LIMIT {
            Some(Money(cents as i64))
        } else {
            None
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in major units, for JSON output.
    ///
    /// ## Example
    /// ```rust
    /// use breakfast_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).to_major(), 10.99);
    /// ```
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a major-unit amount to 2 decimals, half away from zero.
///
/// Amounts too large for i64 cents are returned as they are: at that
/// magnitude an f64 has no fractional digits left to round. Returns `None`
/// only for NaN and infinities.
///
/// ## Example
/// ```rust
/// use breakfast_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(1.0 - (0.1 + 0.2)), Some(0.7));
/// assert_eq!(round_to_cents(1e20), Some(1e20));
/// assert_eq!(round_to_cents(f64::INFINITY), None);
/// ```
pub fn round_to_cents(amount: f64) -> Option<f64> {
    if !amount.is_finite() {
        return None;
    }
    Some(Money::try_from_major(amount).map_or(amount, |money| money.to_major()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(amount: f64) -> Option<i64> {
        Money::try_from_major(amount).map(|m| m.cents())
    }

    #[test]
    fn test_try_from_major() {
        assert_eq!(cents(2.0), Some(200));
        assert_eq!(cents(3.333), Some(333));
        assert_eq!(cents(3.336), Some(334));
        assert_eq!(cents(-0.004), Some(0));
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        assert_eq!(cents(0.125), Some(13));
        assert_eq!(cents(-0.125), Some(-13));
        assert_eq!(cents(0.375), Some(38));
    }

    #[test]
    fn test_float_noise_is_absorbed() {
        // 0.1 + 0.2 = 0.30000000000000004
        assert_eq!(cents(1.0 - (0.1 + 0.2)), Some(70));
        assert_eq!(round_to_cents(1.0 - (0.1 + 0.2)), Some(0.7));
    }

    #[test]
    fn test_out_of_cent_range_is_none() {
        assert_eq!(cents(f64::NAN), None);
        assert_eq!(cents(f64::INFINITY), None);
        assert_eq!(cents(1e20), None);
        assert_eq!(cents(-1e20), None);
        // Scaling by 100 overflows to infinity.
        assert_eq!(cents(1.7e308), None);
        assert_eq!(cents(9.0e16), Some(9_000_000_000_000_000_000));
    }

    #[test]
    fn test_round_to_cents_keeps_large_amounts() {
        assert_eq!(round_to_cents(1e20), Some(1e20));
        assert_eq!(round_to_cents(-1e20), Some(-1e20));
        assert_eq!(round_to_cents(1.7e308), Some(1.7e308));
        assert_eq!(round_to_cents(-2.5), Some(-2.5));
    }

    #[test]
    fn test_round_to_cents_rejects_non_finite() {
        assert_eq!(round_to_cents(f64::NAN), None);
        assert_eq!(round_to_cents(f64::INFINITY), None);
        assert_eq!(round_to_cents(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_to_major() {
        assert_eq!(Money::from_cents(-550).to_major(), -5.5);
        assert_eq!(Money::from_cents(0).to_major(), 0.0);
    }
}
