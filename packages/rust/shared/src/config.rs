//! Application configuration for partialgen.
//!
//! User config lives at `~/.partialgen/partialgen.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PartialgenError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "partialgen.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".partialgen";

// ---------------------------------------------------------------------------
// Config structs (matching partialgen.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Content workspace connection settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// The project whose content is fetched.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Output file locations.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[source]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the content workspace API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the env var holding the API token (never store the token itself).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://content.example.com/api".into()
}
fn default_api_key_env() -> String {
    "PARTIALGEN_API_TOKEN".into()
}
fn default_timeout_secs() -> u64 {
    30
}

/// `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name to look up in the workspace.
    #[serde(default = "default_project_name")]
    pub name: String,

    /// Site path the glossary partial is included at. Used as the link
    /// target for glossary cross-references when the workspace record
    /// does not carry one.
    #[serde(default = "default_glossary_path")]
    pub glossary_path: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            glossary_path: default_glossary_path(),
        }
    }
}

fn default_project_name() -> String {
    "docs".into()
}
fn default_glossary_path() -> String {
    "/glossary".into()
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the partial files are written into.
    #[serde(default = "default_output_dir")]
    pub dir: String,

    /// Glossary partial file name.
    #[serde(default = "default_glossary_file")]
    pub glossary_file: String,

    /// FAQ partial file name.
    #[serde(default = "default_faq_file")]
    pub faq_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            glossary_file: default_glossary_file(),
            faq_file: default_faq_file(),
        }
    }
}

fn default_output_dir() -> String {
    "docs/partials".into()
}
fn default_glossary_file() -> String {
    "glossary.md".into()
}
fn default_faq_file() -> String {
    "faq.md".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.partialgen/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| PartialgenError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.partialgen/partialgen.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| PartialgenError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        PartialgenError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Check that the workspace API token env var is set and non-empty,
/// returning the token.
pub fn validate_api_token(config: &AppConfig) -> Result<String> {
    let var_name = &config.source.api_key_env;
    match std::env::var(var_name) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(PartialgenError::config(format!(
            "content workspace API token not found. Set the {var_name} environment variable."
        ))),
    }
}
