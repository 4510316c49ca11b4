//! Till CLI
//!
//! Prices a cart of line items from the command line:
//!
//! ```text
//! till --items '[{"sku":"A","qty":3,"unit_price":10.0}]' --strategy percent --percent 10
//! ```

use std::{io, process};

use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use till::{
    config::{StrategyOptions, strategy_for},
    items::LineItem,
    receipt::Receipt,
};

/// Price a cart of line items
#[derive(Debug, Parser)]
#[command(name = "till", about = "Price a cart of line items", long_about = None)]
struct Cli {
    /// JSON list of items: [{"sku":"A","qty":2,"unit_price":10.0}, ...]
    #[arg(long)]
    items: String,

    /// Strategy kind: none, percent, bulk or composite
    #[arg(long, default_value = "none")]
    strategy: String,

    /// Percent discount for `percent` or `composite`
    #[arg(long)]
    percent: Option<Decimal>,

    /// Sku for `bulk` or `composite`
    #[arg(long)]
    sku: Option<String>,

    /// Quantity threshold for `bulk` or `composite`
    #[arg(long)]
    threshold: Option<i64>,

    /// Per-item discount for `bulk` or `composite`
    #[arg(long)]
    per_item_off: Option<Decimal>,
}

impl Cli {
    fn options(&self) -> StrategyOptions {
        StrategyOptions {
            percent: self.percent,
            sku: self.sku.clone(),
            threshold: self.threshold,
            per_item_off: self.per_item_off,
        }
    }
}

#[expect(clippy::exit, clippy::print_stderr, reason = "CLI entry point")]
fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let items: Vec<LineItem> = serde_json::from_str(&cli.items)
        .map_err(|error| format!("failed to parse items: {error}"))?;

    let strategy = strategy_for(&cli.strategy, &cli.options())
        .map_err(|error| format!("failed to build strategy: {error}"))?;

    debug!(
        item_count = items.len(),
        strategy = %cli.strategy,
        "pricing cart"
    );

    let receipt = Receipt::from_strategy(&items, &cli.strategy, &strategy);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt
        .write_to(&mut handle)
        .map_err(|error| format!("failed to write receipt: {error}"))?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
