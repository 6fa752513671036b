//! partialgen CLI — glossary and FAQ partial generator.
//!
//! Fetches a project's glossary definitions and FAQ entries from the
//! content workspace and renders them into two markdown partial files
//! for the documentation site.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
