//! # Scenarios
//!
//! A catalog plus a list of cart additions, as a JSON document. Used by the
//! CLI and handy for fixtures.
//!
//! ```json
//! {
//!   "catalog": [
//!     { "sku": "b", "price": 900 },
//!     { "sku": "c", "price": 800, "bulkPrices": [{ "min": 2, "price": 1500 }] }
//!   ],
//!   "cart": [
//!     { "sku": "b", "quantity": 1 },
//!     { "sku": "c", "quantity": 19 }
//!   ]
//! }
//! ```
//!
//! Prices are integer cents (`900` is $9.00); a decimal such as `10.5` is a
//! parse error. Cart entries are replayed with `add_to_cart`, so repeating a
//! SKU adds up.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::PricingEngine;
use crate::error::{CoreError, ValidationError};
use crate::pricing::Receipt;
use crate::types::{CartLine, ProductDraft};

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Invalid scenario JSON (prices are integer cents, e.g. 1050 for $10.50): {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub catalog: Vec<ProductDraft>,

    #[serde(default)]
    pub cart: Vec<CartLine>,
}

impl Scenario {
    pub fn from_json(contents: &str) -> ScenarioResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Loads the catalog into `engine` and replays the cart additions.
    pub fn apply(&self, engine: &mut PricingEngine) -> ScenarioResult<()> {
        engine.set_catalog(self.catalog.iter().cloned())?;
        for line in &self.cart {
            engine.add_to_cart(&line.sku, line.quantity)?;
        }
        debug!(
            products = self.catalog.len(),
            cart_entries = self.cart.len(),
            "Scenario applied"
        );
        Ok(())
    }

    /// Builds a fresh engine with `config`, applies the scenario and prices
    /// the cart.
    pub fn run(&self, config: EngineConfig) -> ScenarioResult<Receipt> {
        let mut engine = PricingEngine::with_config(config);
        self.apply(&mut engine)?;
        Ok(engine.price_cart()?)
    }
}
