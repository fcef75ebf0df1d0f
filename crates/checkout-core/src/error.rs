//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Pricing failures (unknown SKU, overflow)       │
//! │  └── ValidationError  - Product / quantity input failures              │
//! │                                                                         │
//! │  config.rs / scenario.rs                                               │
//! │  ├── ConfigError      - Engine config file failures                    │
//! │  └── ScenarioError    - Scenario file failures                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ScenarioError → CLI (anyhow)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
///
/// Raised synchronously by the pricing operations. Nothing here is
/// retryable: the caller must fix the catalog or the cart first.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A cart line references a SKU that is not in the catalog.
    ///
    /// ## When This Occurs
    /// ```text
    /// add_to_cart("x", 2)      ← no catalog check here
    ///      │
    ///      ▼
    /// calculate_total()
    ///      │
    ///      ▼
    /// ProductNotFound("x")     ← whole total is aborted
    /// ```
    #[error("Product not found in catalog: {0}")]
    ProductNotFound(String),

    /// Adding to a cart line would take its quantity past `i64::MAX`
    /// (or below `i64::MIN`). The line keeps its previous quantity.
    #[error("Quantity out of range for {0}")]
    QuantityOverflow(String),

    /// A line total or the cart total does not fit in `i64` cents.
    #[error("Amount out of range: {0}")]
    AmountOverflow(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a product draft or a quantity doesn't meet
/// requirements. The engine state is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Required`].
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
