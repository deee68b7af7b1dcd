//! # checkout
//!
//! Prices one checkout request.
//!
//! ```text
//! $ echo '{"user_id":"u1","items":[{"price":100,"qty":2}]}' | checkout
//! {"currency":"USD","discount":0,"items_count":1,"order_id":"u1-1-X",...}
//! ```

use std::process::ExitCode;

use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    // The actual setup is in lib.rs for better testability
    checkout_cli::run(checkout_cli::Cli::parse())
}
