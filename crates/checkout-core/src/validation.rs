//! # Validation Module
//!
//! Turns [`ProductDraft`]s into [`Product`]s and checks quantities before
//! they are priced.
//!
//! ## Product Rules (checked in this order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. sku present (any string)           → Required { "sku" }             │
//! │  2. price present                      → Required { "price" }           │
//! │  3. price >= 0                         → OutOfRange { "price" }         │
//! │  4. for each tier, in input order:                                      │
//! │     min present                        → Required { "bulkPrices.min" }  │
//! │     price present                      → Required { "bulkPrices.price" }│
//! │     min > 0                            → MustBePositive                 │
//! │     price >= 0                         → OutOfRange                     │
//! │  5. tiers stable-sorted by min, descending                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A tier with `min <= 0` would never let the greedy matcher make progress,
//! so it is rejected here rather than at pricing time.
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::validate_product;
//! use checkout_core::{Money, ProductDraft};
//!
//! let product = validate_product(
//!     ProductDraft::new("c", Money::from_cents(800))
//!         .with_bulk_price(2, Money::from_cents(1500))
//!         .with_bulk_price(5, Money::from_cents(3500)),
//! )
//! .unwrap();
//!
//! assert_eq!(product.bulk_prices[0].min, 5);
//! assert_eq!(product.bulk_prices[1].min, 2);
//! ```

use crate::config::NegativeQuantityPolicy;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{BulkPrice, BulkPriceDraft, Product, ProductDraft};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates one bulk tier and converts it to its stored form.
pub fn validate_bulk_price(draft: &BulkPriceDraft) -> ValidationResult<BulkPrice> {
    let min = draft
        .min
        .ok_or_else(|| ValidationError::required("bulkPrices.min"))?;
    let price = draft
        .price
        .ok_or_else(|| ValidationError::required("bulkPrices.price"))?;

    if min <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "bulkPrices.min".to_string(),
        });
    }
    validate_price("bulkPrices.price", price)?;

    Ok(BulkPrice::new(min, price))
}

/// Validates a quantity about to be priced.
///
/// Zero is always fine. Negative quantities pass under
/// [`NegativeQuantityPolicy::Allow`] and fail under
/// [`NegativeQuantityPolicy::Reject`].
pub fn validate_line_quantity(
    quantity: i64,
    policy: NegativeQuantityPolicy,
) -> ValidationResult<()> {
    if quantity < 0 && policy == NegativeQuantityPolicy::Reject {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Product Validation
// =============================================================================

/// Validates a draft and produces a storable [`Product`].
///
/// Only presence is checked for the SKU: empty and long SKUs are valid
/// keys. Tiers come back sorted by `min` descending; tiers with the same
/// `min` keep their input order.
pub fn validate_product(draft: ProductDraft) -> ValidationResult<Product> {
    let sku = draft.sku.ok_or_else(|| ValidationError::required("sku"))?;

    let price = draft
        .price
        .ok_or_else(|| ValidationError::required("price"))?;
    validate_price("price", price)?;

    let mut bulk_prices = draft
        .bulk_prices
        .unwrap_or_default()
        .iter()
        .map(validate_bulk_price)
        .collect::<ValidationResult<Vec<_>>>()?;
    sort_bulk_prices(&mut bulk_prices);

    Ok(Product {
        sku,
        price,
        bulk_prices,
    })
}

/// Orders tiers by `min` descending. `sort_by` is stable, so equal
/// thresholds stay in insertion order.
pub fn sort_bulk_prices(bulk_prices: &mut [BulkPrice]) {
    bulk_prices.sort_by(|a, b| b.min.cmp(&a.min));
}

// =============================================================================
// Unit Tests
// =============================================================================
