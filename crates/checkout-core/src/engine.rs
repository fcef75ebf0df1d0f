//! # Pricing Engine
//!
//! The owned aggregate tying catalog, cart and pricing together.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       PricingEngine                                     │
//! │                                                                         │
//! │  Catalog                    Cart                       Pricing          │
//! │  ───────                    ────                       ───────          │
//! │  set_catalog                add_to_cart                calculate_line_item
//! │  get_catalog                update_product_quantity    price_line_item  │
//! │  set_product                remove_from_cart           calculate_total  │
//! │  get_product                get_cart_content           price_cart       │
//! │  remove_product             get_product_quantity_in_cart                │
//! │                             clear_cart                                  │
//! │                                                                         │
//! │  Errors: ValidationError (catalog writes, Reject policy)               │
//! │          CoreError::ProductNotFound (pricing an unknown SKU)           │
//! │          CoreError::*Overflow (quantity or amount past i64)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is synchronous and does no I/O. Mutations take
//! `&mut self`; a host that shares one engine across threads wraps it in a
//! `Mutex` itself.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{price_line, sum_totals, LineItem, Receipt};
use crate::types::{CartLine, Product, ProductDraft};
use crate::validation::{validate_line_quantity, ValidationResult};

/// In-memory catalog + cart + pricing.
///
/// ## Example
/// ```rust
/// use checkout_core::{Money, PricingEngine, ProductDraft};
///
/// let mut engine = PricingEngine::new();
/// engine
///     .set_catalog(vec![
///         ProductDraft::new("b", Money::from_cents(900)),
///         ProductDraft::new("c", Money::from_cents(800))
///             .with_bulk_price(2, Money::from_cents(1500))
///             .with_bulk_price(5, Money::from_cents(3500)),
///     ])
///     .unwrap();
///
/// engine.add_to_cart("b", 1).unwrap();
/// engine.add_to_cart("c", 19).unwrap();
///
/// assert_eq!(engine.calculate_total().unwrap(), Money::from_cents(14400));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: EngineConfig,
    catalog: Catalog,
    cart: Cart,
}

impl PricingEngine {
    /// Creates an engine with an empty catalog, an empty cart and the
    /// default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        PricingEngine {
            config,
            ..Self::default()
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Replaces the whole catalog.
    ///
    /// Drafts are inserted in input order, so a later draft with the same
    /// SKU wins. All drafts are validated before anything is replaced: on
    /// error the previous catalog is still in place.
    pub fn set_catalog<I, P>(&mut self, products: I) -> ValidationResult<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<ProductDraft>,
    {
        let catalog = Catalog::from_drafts(products)?;
        debug!(products = catalog.len(), "Replacing catalog");
        self.catalog = catalog;
        Ok(())
    }

    /// Read-only view of the catalog, keyed by SKU.
    pub fn get_catalog(&self) -> &BTreeMap<String, Product> {
        self.catalog.products()
    }

    /// Validates and inserts one product, replacing any existing entry for
    /// the same SKU.
    pub fn set_product(&mut self, product: impl Into<ProductDraft>) -> ValidationResult<()> {
        self.catalog.insert(product.into())?;
        Ok(())
    }

    pub fn get_product(&self, sku: &str) -> Option<&Product> {
        self.catalog.get(sku)
    }

    /// Deletes a product from the catalog. Cart lines for it are kept and
    /// will fail pricing until the product is defined again.
    pub fn remove_product(&mut self, sku: &str) -> Option<Product> {
        self.catalog.remove(sku)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds `quantity` units of `sku`. The SKU is not checked against the
    /// catalog here.
    ///
    /// ## Errors
    /// - [`CoreError::QuantityOverflow`] if the summed quantity leaves the
    ///   `i64` range. The cart is left as it was.
    pub fn add_to_cart(&mut self, sku: &str, quantity: i64) -> CoreResult<()> {
        self.cart.add(sku, quantity, self.config.orphan_lines)
    }

    /// Adds a single unit of `sku`.
    pub fn add_one_to_cart(&mut self, sku: &str) -> CoreResult<()> {
        self.add_to_cart(sku, 1)
    }

    /// Sets the absolute quantity for `sku`. See [`crate::cart`] for the
    /// handling of non-positive quantities.
    pub fn update_product_quantity(&mut self, sku: &str, quantity: i64) {
        self.cart.set_quantity(sku, quantity, self.config.orphan_lines);
    }

    pub fn remove_from_cart(&mut self, sku: &str) {
        self.cart.remove(sku, self.config.orphan_lines);
    }

    pub fn get_cart_content(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn get_product_quantity_in_cart(&self, sku: &str) -> i64 {
        self.cart.quantity_of(sku)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Prices one line and returns the full breakdown.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] if the SKU is not in the catalog
    /// - [`CoreError::Validation`] for a negative quantity when the engine
    ///   is configured with `NegativeQuantityPolicy::Reject`
    /// - [`CoreError::AmountOverflow`] if the line total does not fit in
    ///   `i64` cents
    pub fn price_line_item(&self, line: &CartLine) -> CoreResult<LineItem> {
        let product = self.catalog.get(&line.sku).ok_or_else(|| {
            warn!(sku = %line.sku, "Pricing a SKU missing from the catalog");
            CoreError::ProductNotFound(line.sku.clone())
        })?;

        validate_line_quantity(line.quantity, self.config.negative_quantities).map_err(|e| {
            warn!(sku = %line.sku, quantity = line.quantity, "Rejected negative quantity");
            e
        })?;

        price_line(product, line.quantity)
    }

    /// Prices one line. Same rules as [`PricingEngine::price_line_item`].
    pub fn calculate_line_item(&self, line: &CartLine) -> CoreResult<Money> {
        Ok(self.price_line_item(line)?.total)
    }

    /// Sums every cart line in order. The first failing line aborts the
    /// whole total. An empty cart totals zero.
    pub fn calculate_total(&self) -> CoreResult<Money> {
        let mut totals = Vec::with_capacity(self.cart.len());
        for line in self.cart.lines() {
            totals.push(self.calculate_line_item(line)?);
        }
        sum_totals(totals)
    }

    /// Prices every cart line in order, with the same failure rule as
    /// [`PricingEngine::calculate_total`].
    pub fn price_cart(&self) -> CoreResult<Receipt> {
        let items = self
            .cart
            .lines()
            .iter()
            .map(|line| self.price_line_item(line))
            .collect::<CoreResult<Vec<_>>>()?;

        let receipt = Receipt::from_items(items)?;
        debug!(lines = receipt.items.len(), total = %receipt.total, "Cart priced");
        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
