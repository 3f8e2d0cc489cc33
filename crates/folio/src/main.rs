//! Folio command-line binary.

use anyhow::Result;
use clap::Parser;
use folio::cli::{Cli, run_generation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Progress goes to stdout; keep log output to warnings unless RUST_LOG
    // says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(message) = cli.validate() {
        anyhow::bail!(message);
    }
    run_generation(cli).await
}
