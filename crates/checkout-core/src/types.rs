//! # Domain Types
//!
//! Core domain types used throughout Checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Input (unvalidated)          validation.rs         Stored (validated)  │
//! │  ┌─────────────────┐                                ┌─────────────────┐ │
//! │  │  ProductDraft   │                                │    Product      │ │
//! │  │  sku?   price?  │ ──── validate_product() ────►  │  sku   price    │ │
//! │  │  bulkPrices?    │                                │  bulk_prices    │ │
//! │  └─────────────────┘                                │  (min desc)     │ │
//! │                                                     └─────────────────┘ │
//! │  ┌─────────────────┐                                                    │
//! │  │    CartLine     │   sku + quantity, one per SKU                      │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Drafts use camelCase keys and cents for prices:
//! ```json
//! { "sku": "c", "price": 800, "bulkPrices": [{ "min": 2, "price": 1500 }] }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Bulk Price
// =============================================================================

/// A validated bulk pricing tier: `min` units sell together for `price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BulkPrice {
    /// Units consumed each time the tier applies. Always > 0.
    pub min: i64,

    /// Price charged for one application of the tier.
    pub price: Money,
}

impl BulkPrice {
    pub const fn new(min: i64, price: Money) -> Self {
        BulkPrice { min, price }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Only ever built by [`crate::validation::validate_product`], so every
/// stored product has a SKU, a non-negative price and descending tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stock Keeping Unit - catalog key.
    pub sku: String,

    /// Unit price for units not covered by a bulk tier.
    pub price: Money,

    /// Bulk tiers sorted by `min` descending.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bulk_prices: Vec<BulkPrice>,
}

impl Product {
    /// Returns true when at least one bulk tier is defined.
    #[inline]
    pub fn has_bulk_pricing(&self) -> bool {
        !self.bulk_prices.is_empty()
    }
}

// =============================================================================
// Drafts
// =============================================================================

/// An unvalidated bulk tier. Either field may be missing on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkPriceDraft {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub price: Option<Money>,
}

/// An unvalidated product, as supplied by a caller or a catalog file.
///
/// ## Example
/// ```rust
/// use checkout_core::{Money, ProductDraft};
///
/// let draft = ProductDraft::new("c", Money::from_cents(800))
///     .with_bulk_price(2, Money::from_cents(1500))
///     .with_bulk_price(5, Money::from_cents(3500));
/// assert_eq!(draft.bulk_prices.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_prices: Option<Vec<BulkPriceDraft>>,
}

impl ProductDraft {
    /// Creates a draft with SKU and unit price set and no tiers.
    pub fn new(sku: impl Into<String>, price: Money) -> Self {
        ProductDraft {
            sku: Some(sku.into()),
            price: Some(price),
            bulk_prices: None,
        }
    }

    /// Appends a complete bulk tier.
    pub fn with_bulk_price(mut self, min: i64, price: Money) -> Self {
        self.bulk_prices
            .get_or_insert_with(Vec::new)
            .push(BulkPriceDraft {
                min: Some(min),
                price: Some(price),
            });
        self
    }
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        let bulk_prices = if product.bulk_prices.is_empty() {
            None
        } else {
            Some(
                product
                    .bulk_prices
                    .into_iter()
                    .map(|tier| BulkPriceDraft {
                        min: Some(tier.min),
                        price: Some(tier.price),
                    })
                    .collect(),
            )
        };

        ProductDraft {
            sku: Some(product.sku),
            price: Some(product.price),
            bulk_prices,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One entry of the cart: a SKU and its quantity.
///
/// The SKU is not checked against the catalog until the line is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    pub sku: String,
    pub quantity: i64,
}

impl CartLine {
    pub fn new(sku: impl Into<String>, quantity: i64) -> Self {
        CartLine {
            sku: sku.into(),
            quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_parses_camel_case_json() {
        let json = r#"{ "sku": "c", "price": 800, "bulkPrices": [{ "min": 2, "price": 1500 }] }"#;
        let draft: ProductDraft = serde_json::from_str(json).unwrap();

        assert_eq!(draft.sku.as_deref(), Some("c"));
        assert_eq!(draft.price, Some(Money::from_cents(800)));
        assert_eq!(
            draft.bulk_prices,
            Some(vec![BulkPriceDraft {
                min: Some(2),
                price: Some(Money::from_cents(1500)),
            }])
        );
    }

    #[test]
    fn test_draft_missing_fields_are_none() {
        let draft: ProductDraft =
            serde_json::from_str(r#"{ "bulkPrices": [{ "min": 3 }] }"#).unwrap();

        assert!(draft.sku.is_none());
        assert!(draft.price.is_none());
        let tiers = draft.bulk_prices.unwrap();
        assert_eq!(tiers[0].min, Some(3));
        assert!(tiers[0].price.is_none());
    }

    #[test]
    fn test_product_into_draft_keeps_tiers() {
        let product = Product {
            sku: "a".to_string(),
            price: Money::from_cents(1050),
            bulk_prices: vec![BulkPrice::new(3, Money::from_cents(2800))],
        };
        let draft = ProductDraft::from(product);

        let expected = ProductDraft::new("a", Money::from_cents(1050))
            .with_bulk_price(3, Money::from_cents(2800));
        assert_eq!(draft, expected);
    }

    #[test]
    fn test_product_without_tiers_omits_bulk_prices() {
        let product = Product {
            sku: "b".to_string(),
            price: Money::from_cents(900),
            bulk_prices: Vec::new(),
        };
        assert!(!product.has_bulk_pricing());

        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"sku":"b","price":900}"#);
    }
}
