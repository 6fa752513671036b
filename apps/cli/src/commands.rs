//! CLI argument surface, tracing setup, and the single build command.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use partialgen_core::{BuildConfig, BuildResult, ProgressReporter, build_partials};
use partialgen_shared::{load_config, load_config_from, validate_api_token};
use partialgen_source::HttpContentSource;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// partialgen — render glossary and FAQ partials from the content workspace.
///
/// There are no subcommands: invoking the binary runs the whole build
/// using the config file defaults.
#[derive(Parser)]
#[command(
    name = "partialgen",
    version,
    about = "Render glossary and FAQ markdown partials from the content workspace.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Config file path (defaults to ~/.partialgen/partialgen.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory override.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "partialgen=info",
        1 => "partialgen=debug",
        _ => "partialgen=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// The build command
// ---------------------------------------------------------------------------

/// Run the build.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    let token = validate_api_token(&config)?;

    let source = HttpContentSource::new(&config, token)?;

    let output_dir = cli
        .out
        .unwrap_or_else(|| PathBuf::from(&config.output.dir));

    let build_config = BuildConfig {
        project_name: config.project.name.clone(),
        output_dir,
        glossary_file: config.output.glossary_file.clone(),
        faq_file: config.output.faq_file.clone(),
    };

    info!(
        project = %build_config.project_name,
        out = %build_config.output_dir.display(),
        "building partials"
    );

    let reporter = CliProgress::new();
    let result = build_partials(&build_config, &source, &reporter).await?;

    // Print summary
    println!();
    println!("  Partials written!");
    println!("  Glossary: {}", result.glossary_path.display());
    println!(
        "            {} published, {} skipped",
        result.definitions_published, result.definitions_skipped
    );
    println!("  FAQ:      {}", result.faq_path.display());
    println!(
        "            {} entries in {} sections",
        result.faq_entries, result.faq_sections
    );
    println!("  Time:     {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _result: &BuildResult) {
        self.spinner.finish_and_clear();
    }
}
