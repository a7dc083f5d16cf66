mod analyzer;
mod error;
mod models;
mod run;
mod ui;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => run::as_tui(),
        _ => {
            init_logging();
            run::as_cli(&args)
        }
    }
}

/// Log to stderr for CLI runs only; the TUI owns the terminal.
fn init_logging() {
    let filter = EnvFilter::try_from_env("BUDGETCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();
}
