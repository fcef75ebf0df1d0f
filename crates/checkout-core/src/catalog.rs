//! # Catalog
//!
//! SKU-keyed product store. Products only enter through
//! [`validate_product`], so lookups never need to re-check invariants.

use std::collections::BTreeMap;

use tracing::debug;

use crate::types::{Product, ProductDraft};
use crate::validation::{validate_product, ValidationResult};

/// Mapping from SKU to [`Product`], iterated in SKU order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from drafts, in input order.
    ///
    /// Later drafts overwrite earlier ones with the same SKU. The first
    /// invalid draft fails the whole build.
    pub fn from_drafts<I, P>(drafts: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<ProductDraft>,
    {
        let mut catalog = Catalog::new();
        for draft in drafts {
            catalog.insert(draft.into())?;
        }
        Ok(catalog)
    }

    /// Validates and inserts one product, replacing any entry with the same
    /// SKU wholesale. Returns the replaced product.
    pub fn insert(&mut self, draft: ProductDraft) -> ValidationResult<Option<Product>> {
        let product = validate_product(draft)?;
        debug!(
            sku = %product.sku,
            price = %product.price,
            tiers = product.bulk_prices.len(),
            "Inserting product"
        );
        Ok(self.products.insert(product.sku.clone(), product))
    }

    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    pub fn remove(&mut self, sku: &str) -> Option<Product> {
        debug!(sku = %sku, "Removing product");
        self.products.remove(sku)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Read-only view of the whole mapping.
    pub fn products(&self) -> &BTreeMap<String, Product> {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::money::Money;

    #[test]
    fn test_insert_and_get() {
        let mut catalog = Catalog::new();
        let replaced = catalog
            .insert(ProductDraft::new("d", Money::from_cents(1200)))
            .unwrap();

        assert!(replaced.is_none());
        assert_eq!(catalog.get("d").map(|p| p.price), Some(Money::from_cents(1200)));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_insert_replaces_wholesale() {
        let mut catalog = Catalog::new();
        catalog
            .insert(
                ProductDraft::new("a", Money::from_cents(1050))
                    .with_bulk_price(3, Money::from_cents(2800)),
            )
            .unwrap();

        let replaced = catalog
            .insert(ProductDraft::new("a", Money::from_cents(1000)))
            .unwrap();

        assert_eq!(replaced.map(|p| p.bulk_prices.len()), Some(1));
        let product = catalog.get("a").unwrap();
        assert_eq!(product.price, Money::from_cents(1000));
        assert!(product.bulk_prices.is_empty());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_drafts_later_duplicates_win() {
        let catalog = Catalog::from_drafts(vec![
            ProductDraft::new("b", Money::from_cents(900)),
            ProductDraft::new("b", Money::from_cents(950)),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("b").unwrap().price, Money::from_cents(950));
    }

    #[test]
    fn test_from_drafts_stops_at_first_invalid() {
        let result = Catalog::from_drafts(vec![
            ProductDraft::new("b", Money::from_cents(900)),
            ProductDraft::default(),
        ]);
        assert_eq!(result, Err(ValidationError::required("sku")));
    }

    #[test]
    fn test_invalid_insert_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.insert(ProductDraft::new("b", Money::from_cents(900))).unwrap();

        let draft = ProductDraft {
            sku: Some("b".to_string()),
            price: None,
            bulk_prices: None,
        };
        assert!(catalog.insert(draft).is_err());
        assert_eq!(catalog.get("b").unwrap().price, Money::from_cents(900));
    }

    #[test]
    fn test_remove() {
        let mut catalog = Catalog::new();
        catalog.insert(ProductDraft::new("b", Money::from_cents(900))).unwrap();

        assert!(catalog.remove("b").is_some());
        assert!(catalog.remove("b").is_none());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_iterates_in_sku_order() {
        let catalog = Catalog::from_drafts(vec![
            ProductDraft::new("c", Money::from_cents(800)),
            ProductDraft::new("a", Money::from_cents(1050)),
            ProductDraft::new("b", Money::from_cents(900)),
        ])
        .unwrap();

        let skus: Vec<&str> = catalog.products().keys().map(String::as_str).collect();
        assert_eq!(skus, vec!["a", "b", "c"]);
    }
}
