//! # Checkout Scenario Runner
//!
//! Prices a cart described in a JSON scenario file.
//!
//! ## Usage
//! ```bash
//! cargo run -p checkout-cli -- demos/scenario.json
//!
//! # With engine configuration
//! cargo run -p checkout-cli -- demos/scenario.json --config demos/engine.toml
//!
//! # Verbose engine logging (goes to stderr)
//! RUST_LOG=checkout_core=debug cargo run -p checkout-cli -- demos/scenario.json
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load engine config (defaults when no `--config`)
//! 3. Parse the scenario
//! 4. Run the engine and print the receipt

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use checkout_core::{EngineConfig, LineItem, Receipt, Scenario};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Args {
    scenario: PathBuf,
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let Some(args) = parse_args(std::env::args().skip(1).collect())? else {
        print_usage();
        return Ok(());
    };

    init_tracing();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let contents = std::fs::read_to_string(&args.scenario)
        .with_context(|| format!("reading scenario {}", args.scenario.display()))?;
    let scenario = Scenario::from_json(&contents)
        .with_context(|| format!("parsing scenario {}", args.scenario.display()))?;

    info!(
        path = %args.scenario.display(),
        products = scenario.catalog.len(),
        cart_entries = scenario.cart.len(),
        "Pricing scenario"
    );

    let receipt = scenario.run(config).context("pricing cart")?;
    print!("{}", render_receipt(&receipt));

    Ok(())
}

/// Returns `None` when help was requested.
fn parse_args(args: Vec<String>) -> Result<Option<Args>> {
    let mut scenario = None;
    let mut config = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config needs a path");
                };
                config = Some(PathBuf::from(path));
                i += 1;
            }
            "-h" | "--help" => return Ok(None),
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            other => {
                if scenario.is_some() {
                    bail!("only one scenario file may be given");
                }
                scenario = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    match scenario {
        Some(scenario) => Ok(Some(Args { scenario, config })),
        None => Ok(None),
    }
}

fn print_usage() {
    println!("Checkout scenario runner");
    println!();
    println!("Usage: checkout <SCENARIO.json> [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>  Engine config TOML (orphan_lines, negative_quantities)");
    println!("  -h, --help           Show this help message");
}

/// Initializes the tracing subscriber on stderr so stdout only carries
/// the receipt.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: `warn,checkout_core=info`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,checkout_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_line(item: &LineItem) -> String {
    let mut out = format!(
        "{:<12} x{:<5} {:>12}\n",
        item.sku,
        item.quantity,
        item.total.to_string()
    );
    for tier in &item.tiers_applied {
        out.push_str(&format!(
            "    {} x ({} for {})\n",
            tier.times, tier.min, tier.price
        ));
    }
    if item.remainder != 0 && !item.tiers_applied.is_empty() {
        out.push_str(&format!("    {} x {}\n", item.remainder, item.unit_price));
    }
    out
}

fn render_receipt(receipt: &Receipt) -> String {
    let mut out = String::new();
    for item in &receipt.items {
        out.push_str(&render_line(item));
    }
    out.push_str(&format!("{:<19} {:>12}\n", "TOTAL", receipt.total.to_string()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::Money;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let parsed = parse_args(args(&["cart.json", "--config", "engine.toml"]))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.scenario, PathBuf::from("cart.json"));
        assert_eq!(parsed.config, Some(PathBuf::from("engine.toml")));

        assert!(parse_args(args(&["--help"])).unwrap().is_none());
        assert!(parse_args(args(&[])).unwrap().is_none());
        assert!(parse_args(args(&["cart.json", "--config"])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_render_receipt() {
        let scenario = Scenario::from_json(
            r#"{
                "catalog": [
                    { "sku": "b", "price": 900 },
                    { "sku": "c", "price": 800, "bulkPrices": [{ "min": 5, "price": 3500 }] }
                ],
                "cart": [{ "sku": "b", "quantity": 1 }, { "sku": "c", "quantity": 6 }]
            }"#,
        )
        .unwrap();
        let receipt = scenario.run(EngineConfig::default()).unwrap();
        assert_eq!(receipt.total, Money::from_cents(900 + 3500 + 800));

        let text = render_receipt(&receipt);
        assert!(text.contains("1 x (5 for $35.00)"));
        assert!(text.contains("1 x $8.00"));
        assert!(text.lines().last().unwrap().ends_with("$52.00"));
    }
}
