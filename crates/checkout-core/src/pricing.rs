//! # Pricing
//!
//! Greedy bulk-tier matching for a single product and quantity.
//!
//! ## Algorithm
//! ```text
//! Product c: unit $8.00, tiers [5 for $35.00, 2 for $15.00] (min desc)
//! Quantity 19
//!
//!   tier min 5:  19 ≥ 5 → +35  14 ≥ 5 → +35  9 ≥ 5 → +35   remaining 4
//!   tier min 2:   4 ≥ 2 → +15   2 ≥ 2 → +15                remaining 0
//!   unit price:   0 × $8.00
//!                                                  total = $135.00
//! ```
//!
//! Each tier is applied `remaining / min` times, which is exactly what the
//! repeated subtraction above does, without looping per application.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// How many times one bulk tier was applied to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TierUsage {
    pub min: i64,
    pub price: Money,
    pub times: i64,
}

/// The priced result of one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub sku: String,
    pub quantity: i64,
    pub unit_price: Money,

    /// Tiers that matched at least once, highest `min` first.
    pub tiers_applied: Vec<TierUsage>,

    /// Units left over after tier matching, charged at `unit_price`.
    pub remainder: i64,

    pub total: Money,
}

/// Every priced line of a cart plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    pub items: Vec<LineItem>,
    pub total: Money,
}

impl Receipt {
    /// Sums the line totals. Fails with [`CoreError::AmountOverflow`] if the
    /// grand total does not fit in `i64` cents.
    pub fn from_items(items: Vec<LineItem>) -> CoreResult<Self> {
        let total = sum_totals(items.iter().map(|item| item.total))?;
        Ok(Receipt { items, total })
    }
}

/// Adds amounts in order, failing on the first overflow.
pub(crate) fn sum_totals(amounts: impl IntoIterator<Item = Money>) -> CoreResult<Money> {
    amounts.into_iter().try_fold(Money::zero(), |total, amount| {
        total
            .checked_add(amount)
            .ok_or_else(|| CoreError::AmountOverflow("cart total".to_string()))
    })
}

// =============================================================================
// Calculation
// =============================================================================

/// Prices `quantity` units of `product`.
///
/// Tiers are walked in stored order (descending `min`). A non-positive
/// quantity matches no tier and is charged entirely at unit price.
///
/// Fails with [`CoreError::AmountOverflow`] when the line total does not
/// fit in `i64` cents.
///
/// ## Example
/// ```rust
/// use checkout_core::pricing::price_line;
/// use checkout_core::validation::validate_product;
/// use checkout_core::{Money, ProductDraft};
///
/// let product = validate_product(
///     ProductDraft::new("c", Money::from_cents(800))
///         .with_bulk_price(2, Money::from_cents(1500))
///         .with_bulk_price(5, Money::from_cents(3500)),
/// )
/// .unwrap();
///
/// assert_eq!(price_line(&product, 8).unwrap().total, Money::from_cents(5800));
/// assert_eq!(price_line(&product, 19).unwrap().total, Money::from_cents(13500));
/// ```
pub fn price_line(product: &Product, quantity: i64) -> CoreResult<LineItem> {
    let overflow = || CoreError::AmountOverflow(product.sku.clone());

    let mut remaining = quantity;
    let mut total = Money::zero();
    let mut tiers_applied = Vec::new();

    for tier in &product.bulk_prices {
        if remaining < tier.min {
            continue;
        }

        let times = remaining / tier.min;
        remaining -= tier.min * times;
        total = tier
            .price
            .checked_mul(times)
            .and_then(|subtotal| total.checked_add(subtotal))
            .ok_or_else(overflow)?;
        tiers_applied.push(TierUsage {
            min: tier.min,
            price: tier.price,
            times,
        });
    }

    total = product
        .price
        .checked_mul(remaining)
        .and_then(|rest| total.checked_add(rest))
        .ok_or_else(overflow)?;

    Ok(LineItem {
        sku: product.sku.clone(),
        quantity,
        unit_price: product.price,
        tiers_applied,
        remainder: remaining,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
