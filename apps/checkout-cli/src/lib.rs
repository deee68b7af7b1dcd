//! # checkout-cli
//!
//! A thin shell around `checkout-core`: one JSON request in, one JSON
//! document out.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize tracing ─────► stderr, RUST_LOG or "info"                │
//! │  2. Load config ────────────► defaults → checkout.toml → env           │
//! │  3. Read request ───────────► file argument, or stdin for "-"/none     │
//! │  4. Process ────────────────► Checkout::process                        │
//! │  5. Print ──────────────────► OrderResponse (exit 0)                   │
//! │                               ApiError      (exit 2)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! I/O and configuration failures propagate as `anyhow` errors (exit 1).

pub mod config;
pub mod error;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use checkout_core::{Checkout, OrderResponse};
use clap::Parser;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ApiError;

/// Exit status for a rejected request.
pub const EXIT_REJECTED: u8 = 2;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "checkout", version, about = "Price a checkout request")]
pub struct Cli {
    /// JSON request file; "-" or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Pricing config file (TOML)
    #[arg(long, env = "CHECKOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Runs the CLI and returns the process exit code.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    init_tracing();

    let config = config::load(cli.config).context("Failed to load pricing config")?;
    info!(
        currency = %config.default_currency,
        tax_rate_bps = config.tax_rate_bps,
        "Configuration loaded"
    );
    let checkout = Checkout::new(config)?;

    let request = read_request(cli.input.as_deref())?;

    let (body, status) = match handle(&checkout, &request) {
        Ok(response) => (serde_json::to_value(response)?, ExitCode::SUCCESS),
        Err(err) => (serde_json::to_value(err)?, ExitCode::from(EXIT_REJECTED)),
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        serde_json::to_string(&body)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;

    Ok(status)
}

/// Processes one request, translating pipeline errors for the caller.
pub fn handle(checkout: &Checkout, request: &Value) -> Result<OrderResponse, ApiError> {
    checkout.process(request).map_err(ApiError::from)
}

/// Reads and parses the request JSON.
fn read_request(input: Option<&Path>) -> anyhow::Result<Value> {
    let contents = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request from {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&contents).context("Request is not valid JSON")
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every pipeline stage
/// - `RUST_LOG=checkout_core=debug` - Pipeline stages only
/// - Default: INFO level
///
/// Logs go to stderr so stdout stays a single JSON document.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
