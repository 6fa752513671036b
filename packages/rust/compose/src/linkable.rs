//! Cross-reference table construction.

use partialgen_render::{anchor::anchor_key, render_plain};
use partialgen_shared::{Definition, LinkableTerm, LinkableTerms, Project};
use tracing::{debug, instrument};

use crate::validity::classify;

/// Build the linkable-term table from the fetched definition set.
///
/// Each definition's term is rendered and classified exactly once here;
/// composers reuse the cached text and key instead of re-rendering. The
/// table is populated in fetch order, so when two distinct terms normalize
/// to the same anchor key the later one wins — mirrored by the glossary,
/// which emits entries in term order regardless.
#[instrument(skip_all, fields(project = %project.name, definitions = definitions.len()))]
pub fn build_linkable_terms(project: &Project, definitions: &[Definition]) -> LinkableTerms {
    let mut terms = LinkableTerms::with_capacity(definitions.len());

    for definition in definitions {
        let validity = classify(definition);
        let text = render_plain(&definition.term);
        let key = anchor_key(&definition.term);

        if !validity.is_valid() {
            debug!(
                page_id = %definition.page_id,
                reason = %validity,
                "definition not linkable"
            );
        }

        terms.insert(
            definition.page_id.clone(),
            LinkableTerm {
                text,
                key,
                path: project.glossary_path.clone(),
                valid: validity.is_valid(),
                url: definition.url.clone(),
            },
        );
    }

    debug!(entries = terms.len(), "linkable-term table built");
    terms
}
