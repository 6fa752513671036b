//! Glossary and FAQ composition.
//!
//! This crate provides:
//! - [`Validity`] — publish-readiness classification for definitions
//! - [`build_linkable_terms`] — the cross-reference table constructor
//! - [`compose_glossary`] — valid definitions → glossary fragment
//! - [`compose_faq`] — FAQ entries → sectioned definition-list fragment

pub mod faq;
pub mod glossary;
pub mod linkable;
pub mod validity;

pub use faq::compose_faq;
pub use glossary::compose_glossary;
pub use linkable::build_linkable_terms;
pub use validity::{Validity, classify};
