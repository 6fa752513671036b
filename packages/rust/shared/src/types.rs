//! Core domain types for glossary and FAQ content.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PageId
// ---------------------------------------------------------------------------

/// Wrapper for the stable page identifier assigned by the content workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl PageId {
    /// Borrow the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Rich text
// ---------------------------------------------------------------------------

/// Inline formatting flags carried by a rich-text span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub code: bool,
}

/// A single formatted text span.
///
/// A span may carry an external link (`href`) or a reference to another
/// page in the workspace (`mention`). Mentions are resolved against the
/// glossary's linkable-term table at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention: Option<PageId>,
}

impl RichText {
    /// A plain, unformatted span — the common case in tests and fixtures.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Content blocks
// ---------------------------------------------------------------------------

/// A structured content block from a page body.
///
/// Block types the renderer does not understand deserialize to
/// [`Block::Unsupported`] and render to nothing — an unknown block must
/// never fail a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    BulletedListItem {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    NumberedListItem {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    #[serde(other)]
    Unsupported,
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Publication status of a definition in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionStatus {
    Published,
    Draft,
}

/// A glossary definition record, immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Stable page identifier in the workspace.
    pub page_id: PageId,
    /// Publication status maintained by the content editors.
    pub status: DefinitionStatus,
    /// The term being defined.
    pub term: Vec<RichText>,
    /// The definition body.
    pub definition: Vec<RichText>,
    /// Source page URL in the workspace, for traceability.
    pub url: String,
}

// ---------------------------------------------------------------------------
// FAQ entries
// ---------------------------------------------------------------------------

/// A single FAQ entry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Stable page identifier in the workspace.
    pub page_id: PageId,
    /// Section heading the entry is grouped under.
    pub section: String,
    /// Sort position within the section (ascending).
    pub order: i64,
    /// The question, as plain text.
    pub question: String,
    /// The answer as a flat rich-text sequence.
    #[serde(default)]
    pub answer: Vec<RichText>,
    /// Richer block content; when non-empty it takes precedence over `answer`.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// The project that owns the fetched content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Workspace identifier for the project.
    pub id: String,
    /// Human-readable project name (the lookup key).
    pub name: String,
    /// Site path the glossary partial is published at; cross-reference links
    /// point into this page.
    pub glossary_path: String,
}

// ---------------------------------------------------------------------------
// Linkable terms
// ---------------------------------------------------------------------------

/// Public rendering metadata for one glossary definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkableTerm {
    /// The term rendered to plain text.
    pub text: String,
    /// URL-fragment anchor key derived from the term text.
    pub key: String,
    /// Site path of the page the term is published on.
    pub path: String,
    /// Whether the definition passed publish-readiness classification.
    /// Invalid definitions are never linked to.
    pub valid: bool,
    /// Source page URL in the workspace.
    pub url: String,
}

/// Cross-reference table from page identifier to rendering metadata.
///
/// Built once per run before any rendering that needs cross-references,
/// then passed by shared reference — read-only thereafter.
pub type LinkableTerms = HashMap<PageId, LinkableTerm>;
