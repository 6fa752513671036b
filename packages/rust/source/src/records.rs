//! Wire records for the content workspace API.
//!
//! The workspace returns loosely-shaped JSON; these DTOs pin the shapes we
//! rely on and convert into domain records at the fetch boundary, so the
//! rest of the pipeline only ever sees validated data.

use serde::Deserialize;

use partialgen_shared::{
    Block, Definition, DefinitionStatus, FaqEntry, PageId, PartialgenError, Project, Result,
    RichText,
};

/// Standard list-response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A project record as returned by `GET /v1/projects?name=`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    /// Site path the glossary is published at; optional on the wire.
    #[serde(default)]
    pub glossary_path: Option<String>,
}

impl ProjectRecord {
    /// Validate and convert, filling `glossary_path` from the configured
    /// fallback when the workspace does not carry one.
    pub fn into_domain(self, glossary_path_fallback: &str) -> Result<Project> {
        if self.id.trim().is_empty() {
            return Err(PartialgenError::validation(format!(
                "project \"{}\" has an empty id",
                self.name
            )));
        }
        Ok(Project {
            id: self.id,
            name: self.name,
            glossary_path: self
                .glossary_path
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| glossary_path_fallback.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// A definition record as returned by `GET /v1/projects/{id}/definitions`.
#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionRecord {
    pub page_id: String,
    /// Publication status string; validated into [`DefinitionStatus`].
    pub status: String,
    #[serde(default)]
    pub term: Vec<RichText>,
    #[serde(default)]
    pub definition: Vec<RichText>,
    pub url: String,
}

impl DefinitionRecord {
    /// Validate and convert into a domain [`Definition`].
    pub fn into_domain(self) -> Result<Definition> {
        if self.page_id.trim().is_empty() {
            return Err(PartialgenError::validation(
                "definition record has an empty page_id",
            ));
        }
        let status = parse_status(&self.page_id, &self.status)?;
        Ok(Definition {
            page_id: PageId(self.page_id),
            status,
            term: self.term,
            definition: self.definition,
            url: self.url,
        })
    }
}

/// Map a wire status string onto the closed status set.
fn parse_status(page_id: &str, status: &str) -> Result<DefinitionStatus> {
    match status {
        "published" => Ok(DefinitionStatus::Published),
        "draft" => Ok(DefinitionStatus::Draft),
        other => Err(PartialgenError::validation(format!(
            "definition {page_id} has unknown status \"{other}\""
        ))),
    }
}

// ---------------------------------------------------------------------------
// FAQ entries
// ---------------------------------------------------------------------------

/// A FAQ record as returned by `GET /v1/projects/{id}/faqs`.
#[derive(Debug, Clone, Deserialize)]
pub struct FaqRecord {
    pub page_id: String,
    pub section: String,
    pub order: i64,
    pub question: String,
    #[serde(default)]
    pub answer: Vec<RichText>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl FaqRecord {
    /// Validate and convert into a domain [`FaqEntry`].
    pub fn into_domain(self) -> Result<FaqEntry> {
        if self.page_id.trim().is_empty() {
            return Err(PartialgenError::validation(
                "FAQ record has an empty page_id",
            ));
        }
        if self.question.trim().is_empty() {
            return Err(PartialgenError::validation(format!(
                "FAQ record {} has an empty question",
                self.page_id
            )));
        }
        Ok(FaqEntry {
            page_id: PageId(self.page_id),
            section: self.section,
            order: self.order,
            question: self.question,
            answer: self.answer,
            blocks: self.blocks,
        })
    }
}
