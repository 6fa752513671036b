//! Core pipeline orchestration for partialgen.
//!
//! This crate ties the fetch, composition, and persistence layers together:
//! - [`pipeline`] — the linear build pipeline ([`pipeline::build_partials`])
//! - [`writer`] — partial file persistence

pub mod pipeline;
pub mod writer;

pub use pipeline::{BuildConfig, BuildResult, ProgressReporter, SilentProgress, build_partials};
pub use writer::{WriteOutcome, write_partial};
