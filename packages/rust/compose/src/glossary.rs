//! Glossary fragment composition.

use partialgen_render::{cleanup, render_rich_text};
use partialgen_shared::{Definition, LinkableTerms};
use tracing::{debug, instrument};

use crate::validity::classify;

/// One rendered glossary entry.
#[derive(Debug, Clone)]
struct GlossaryEntry {
    /// Term rendered with inline formatting, for the heading.
    term: String,
    /// Term rendered to plain text, the sort key.
    term_plain: String,
    /// Anchor key embedded in the heading.
    key: String,
    /// Definition body rendered with cross-reference links.
    definition: String,
}

/// Compose the glossary partial from the fetched definition set.
///
/// Only definitions classified as valid appear. Entries are sorted by the
/// lowercased rendered term; equal terms keep their fetch order (stable
/// sort), so identical input reproduces identical output.
#[instrument(skip_all, fields(definitions = definitions.len()))]
pub fn compose_glossary(definitions: &[Definition], terms: &LinkableTerms) -> String {
    let mut entries: Vec<GlossaryEntry> = Vec::new();

    for definition in definitions {
        let validity = classify(definition);
        if !validity.is_valid() {
            debug!(
                page_id = %definition.page_id,
                reason = %validity,
                "definition excluded from glossary"
            );
            continue;
        }

        // The table already rendered the plain term and key once; reuse them.
        let cached = terms.get(&definition.page_id);
        let (term_plain, key) = match cached {
            Some(t) => (t.text.clone(), t.key.clone()),
            None => (
                partialgen_render::render_plain(&definition.term),
                partialgen_render::anchor::anchor_key(&definition.term),
            ),
        };

        entries.push(GlossaryEntry {
            term: render_rich_text(&definition.term, terms),
            term_plain,
            key,
            definition: render_rich_text(&definition.definition, terms),
        });
    }

    entries.sort_by_key(|e| e.term_plain.to_lowercase());

    debug!(entries = entries.len(), "glossary composed");

    let mut fragment = String::from("<div class=\"glossary\">\n");
    for entry in &entries {
        fragment.push_str(&format!(
            "\n### {} {{#{}}}\n\n{}\n",
            entry.term, entry.key, entry.definition
        ));
    }
    fragment.push_str("\n</div>\n");

    cleanup::normalize(&fragment)
}
