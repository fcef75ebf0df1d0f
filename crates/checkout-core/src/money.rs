//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point prices:                                            │
//! │    19 × $0.10 summed one by one = 1.9000000000000004  ❌                │
//! │                                                                         │
//! │  Bulk tiers add prices many times in a loop, so the error compounds.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    A unit price of 10.5 is stored as 1050 cents, and every tier         │
//! │    addition is exact.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Arithmetic is checked: quantities come straight from callers, so a
//! product of price and quantity can leave the `i64` range. Callers get
//! `None` and turn it into a pricing error.
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let price = Money::from_cents(1050); // $10.50
//!
//! let tripled = price.checked_mul(3).unwrap();
//! let total = tripled.checked_add(Money::from_cents(900)).unwrap();
//! assert_eq!(total.to_string(), "$40.50");
//!
//! assert!(price.checked_mul(i64::MAX).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative line totals exist when negative quantities
///   are allowed (returns)
/// - **Single field tuple struct**: Serializes as a bare integer
///
/// ```text
/// Product.price ──────┐
///                     ├──► LineItem.total ──► Receipt.total
/// BulkPrice.price ────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Price of `qty` units, or `None` on overflow.
    #[inline]
    pub const fn checked_mul(self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Sum of two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

/// Shows money as `$10.50` / `-$5.50`. Receipt and log output only.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(14400)), "$144.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-$0.05");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(i64::MIN)), "-$92233720368547758.08");
    }

    #[test]
    fn test_checked_mul() {
        let unit = Money::from_cents(800);
        assert_eq!(unit.checked_mul(4), Some(Money::from_cents(3200)));
        assert_eq!(unit.checked_mul(-1), Some(Money::from_cents(-800)));
        assert_eq!(Money::from_cents(900).checked_mul(i64::MAX / 100), None);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(900);
        assert_eq!(a.checked_add(Money::from_cents(13500)), Some(Money::from_cents(14400)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_cents(1050)).unwrap();
        assert_eq!(json, "1050");

        let parsed: Money = serde_json::from_str("800").unwrap();
        assert_eq!(parsed, Money::from_cents(800));
    }
}
