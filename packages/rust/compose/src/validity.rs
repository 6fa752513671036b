//! Publish-readiness classification for glossary definitions.

use partialgen_shared::{Definition, DefinitionStatus};
use partialgen_render::render_plain;

/// Outcome of classifying a definition for publication.
///
/// A closed set rather than a boolean, so composers and logs can say *why*
/// a definition was excluded. Only [`Validity::Valid`] is publishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// Eligible for the glossary and for cross-reference links.
    Valid,
    /// The workspace still marks the definition as a draft.
    Draft,
    /// The term renders to empty or whitespace-only text.
    EmptyTerm,
    /// The definition body renders to empty or whitespace-only text.
    EmptyDefinition,
}

impl Validity {
    /// Whether the definition may be published.
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }

    /// Short reason string for logs.
    pub fn reason(self) -> &'static str {
        match self {
            Validity::Valid => "valid",
            Validity::Draft => "not published",
            Validity::EmptyTerm => "empty term",
            Validity::EmptyDefinition => "empty definition",
        }
    }
}

impl std::fmt::Display for Validity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Classify a definition's publish-readiness.
///
/// Checks run in order: draft status, then term content, then body content.
pub fn classify(definition: &Definition) -> Validity {
    if definition.status != DefinitionStatus::Published {
        return Validity::Draft;
    }
    if render_plain(&definition.term).trim().is_empty() {
        return Validity::EmptyTerm;
    }
    if render_plain(&definition.definition).trim().is_empty() {
        return Validity::EmptyDefinition;
    }
    Validity::Valid
}
