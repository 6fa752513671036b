//! Shared types, error model, and configuration for partialgen.
//!
//! This crate is the foundation depended on by all other partialgen crates.
//! It provides:
//! - [`PartialgenError`] — the unified error type
//! - Domain types ([`Definition`], [`FaqEntry`], [`RichText`], [`LinkableTerms`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, OutputConfig, ProjectConfig, SourceConfig, config_dir, config_file_path,
    load_config, load_config_from, validate_api_token,
};
pub use error::{PartialgenError, Result};
pub use types::{
    Annotations, Block, Definition, DefinitionStatus, FaqEntry, LinkableTerm, LinkableTerms,
    PageId, Project, RichText,
};
