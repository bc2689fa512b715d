//! Command-line interface definitions

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use shiplog_changelog::ChangelogGenerator;
use shiplog_core::load_pull_requests;

/// Generate a grouped markdown changelog from pull request release notes
#[derive(Debug, Parser)]
#[command(name = "shiplog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON file containing the pull requests to scan
    #[arg(value_name = "PR_FILE")]
    pub input: PathBuf,
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        info!("Generating changelog from {}", self.input.display());

        let prs = load_pull_requests(&self.input)?;
        let changelog = ChangelogGenerator::new().generate_formatted(&prs);

        // The document carries its own trailing newline.
        print!("{changelog}");

        Ok(())
    }
}
