//! # Engine Configuration
//!
//! Behavior switches for [`crate::PricingEngine`].
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. TOML Config File (passed explicitly, e.g. `--config engine.toml`)  │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     orphan_lines = keep, negative_quantities = allow                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # engine.toml
//! orphan_lines = "drop"            # keep | drop
//! negative_quantities = "reject"   # allow | reject
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// Config Error
// =============================================================================

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has unknown values.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A policy name given as a string was not recognised.
    #[error("Invalid engine configuration: {0}")]
    InvalidValue(String),
}

// =============================================================================
// Orphan Line Policy
// =============================================================================

/// What `update_product_quantity` does with a non-positive quantity for a
/// SKU that is not in the cart yet.
///
/// ```text
/// cart: [b×1]      remove_from_cart("z")
///
///   KEEP (default)          DROP
///   cart: [b×1, z×0]        cart: [b×1]
/// ```
///
/// A line that already exists is always removed by a non-positive
/// quantity; the policy only decides the absent case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanLinePolicy {
    /// Append the line anyway, with the given quantity.
    #[default]
    Keep,

    /// Leave the cart unchanged.
    Drop,
}

impl std::fmt::Display for OrphanLinePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrphanLinePolicy::Keep => write!(f, "keep"),
            OrphanLinePolicy::Drop => write!(f, "drop"),
        }
    }
}

impl std::str::FromStr for OrphanLinePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(OrphanLinePolicy::Keep),
            "drop" | "skip" => Ok(OrphanLinePolicy::Drop),
            other => Err(ConfigError::InvalidValue(format!(
                "Unknown orphan line policy: '{}'. Valid options: keep, drop",
                other
            ))),
        }
    }
}

// =============================================================================
// Negative Quantity Policy
// =============================================================================

/// Whether a cart line with a negative quantity may be priced.
///
/// Under `Allow` no tier ever matches a negative quantity, so the line
/// total is `quantity × unit price` (a negative amount, e.g. a return).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeQuantityPolicy {
    #[default]
    Allow,

    /// Fail pricing with a validation error.
    Reject,
}

impl std::fmt::Display for NegativeQuantityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NegativeQuantityPolicy::Allow => write!(f, "allow"),
            NegativeQuantityPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for NegativeQuantityPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allow" => Ok(NegativeQuantityPolicy::Allow),
            "reject" | "deny" => Ok(NegativeQuantityPolicy::Reject),
            other => Err(ConfigError::InvalidValue(format!(
                "Unknown negative quantity policy: '{}'. Valid options: allow, reject",
                other
            ))),
        }
    }
}

// =============================================================================
// Engine Config
// =============================================================================

/// Full engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub orphan_lines: OrphanLinePolicy,

    #[serde(default)]
    pub negative_quantities: NegativeQuantityPolicy,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading engine config from file");
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!(
            orphan_lines = %config.orphan_lines,
            negative_quantities = %config.negative_quantities,
            "Engine config loaded"
        );
        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Failed to load engine config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn with_orphan_lines(mut self, policy: OrphanLinePolicy) -> Self {
        self.orphan_lines = policy;
        self
    }

    pub fn with_negative_quantities(mut self, policy: NegativeQuantityPolicy) -> Self {
        self.negative_quantities = policy;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.orphan_lines, OrphanLinePolicy::Keep);
        assert_eq!(config.negative_quantities, NegativeQuantityPolicy::Allow);
    }

    #[test]
    fn test_from_toml_str() {
        let config = EngineConfig::from_toml_str(
            r#"
            orphan_lines = "drop"
            negative_quantities = "reject"
            "#,
        )
        .unwrap();

        assert_eq!(config.orphan_lines, OrphanLinePolicy::Drop);
        assert_eq!(config.negative_quantities, NegativeQuantityPolicy::Reject);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str(r#"orphan_lines = "drop""#).unwrap();
        assert_eq!(config.orphan_lines, OrphanLinePolicy::Drop);
        assert_eq!(config.negative_quantities, NegativeQuantityPolicy::Allow);

        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = EngineConfig::from_toml_str(r#"orphan_lines = "sometimes""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("KEEP".parse::<OrphanLinePolicy>().unwrap(), OrphanLinePolicy::Keep);
        assert_eq!("drop".parse::<OrphanLinePolicy>().unwrap(), OrphanLinePolicy::Drop);
        assert!("maybe".parse::<OrphanLinePolicy>().is_err());

        assert_eq!(
            "reject".parse::<NegativeQuantityPolicy>().unwrap(),
            NegativeQuantityPolicy::Reject
        );
        assert_eq!(NegativeQuantityPolicy::Allow.to_string(), "allow");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/engine.toml");
        assert!(matches!(EngineConfig::load(path), Err(ConfigError::Io(_))));
        assert_eq!(EngineConfig::load_or_default(path), EngineConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new()
            .with_orphan_lines(OrphanLinePolicy::Drop)
            .with_negative_quantities(NegativeQuantityPolicy::Reject);
        assert_eq!(config.orphan_lines, OrphanLinePolicy::Drop);
        assert_eq!(config.negative_quantities, NegativeQuantityPolicy::Reject);
    }
}
