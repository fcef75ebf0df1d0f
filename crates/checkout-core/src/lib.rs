//! # checkout-core: Pure Pricing Logic for Checkout
//!
//! Holds a product catalog (unit prices plus optional bulk tiers) and a
//! shopping cart, and prices line items and totals. No I/O, no global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/checkout-cli                               │   │
//! │  │     read scenario.json ──► run engine ──► print receipt          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  pricing  │  │ validation│  │   │
//! │  │   │  Product  │  │ CartLine  │  │ LineItem  │  │  drafts   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                  └──────── engine ────────┘                     │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - `PricingEngine`, the public entry point
//! - [`catalog`] / [`cart`] - the two owned collections
//! - [`pricing`] - greedy bulk-tier matching
//! - [`types`] / [`money`] - domain types, integer money
//! - [`validation`] - draft → product rules
//! - [`config`] - behavior switches, TOML loading
//! - [`scenario`] - JSON catalog + cart fixtures
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{CartLine, Money, PricingEngine, ProductDraft};
//!
//! let mut engine = PricingEngine::new();
//! let draft = ProductDraft::new("a", Money::from_cents(1050))
//!     .with_bulk_price(3, Money::from_cents(2800));
//! engine.set_product(draft).unwrap();
//!
//! // 4 units: one tier of 3 for $28.00 plus 1 at $10.50
//! let total = engine.calculate_line_item(&CartLine::new("a", 4)).unwrap();
//! assert_eq!(total.to_string(), "$38.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod money;
pub mod pricing;
pub mod scenario;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{EngineConfig, NegativeQuantityPolicy, OrphanLinePolicy};
pub use engine::PricingEngine;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{LineItem, Receipt, TierUsage};
pub use scenario::Scenario;
pub use types::*;
