//! wifi-range entry point.

use std::io::{self, IsTerminal};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wifi_range_cli::{scan, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let backend = scan::select_backend(&cli);
    scan::execute(&cli, backend.as_ref(), &mut io::stdout().lock())?;

    if cli.should_pause(io::stdin().is_terminal()) {
        scan::wait_for_enter(&mut io::stdout(), &mut io::stdin().lock());
    }

    Ok(())
}
