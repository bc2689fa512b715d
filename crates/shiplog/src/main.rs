//! shiplog - Grouped changelog generation from PR release notes

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::Cli;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    cli.execute()
}

/// Set up tracing on stderr, controlled by RUST_LOG (default: warn)
///
/// The changelog document owns stdout, so diagnostics must never land there.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
