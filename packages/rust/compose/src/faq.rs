//! FAQ fragment composition.

use partialgen_render::{cleanup, render_blocks, render_rich_text};
use partialgen_shared::{FaqEntry, LinkableTerms};
use tracing::{debug, instrument};

/// Compose the FAQ partial from the fetched entry set.
///
/// Entries group by section in first-seen order; within a section they
/// stable-sort by ascending `order`. Each section renders as a heading
/// followed by a definition list of its question/answer pairs.
#[instrument(skip_all, fields(entries = entries.len()))]
pub fn compose_faq(entries: &[FaqEntry], terms: &LinkableTerms) -> String {
    let sections = group_by_section(entries);

    debug!(sections = sections.len(), "FAQ composed");

    let mut fragment = String::new();
    for (section, section_entries) in &sections {
        fragment.push_str(&format!("### {section}\n\n<dl>\n"));
        for entry in section_entries {
            fragment.push_str(&format!(
                "<dt>{}</dt>\n<dd>\n\n{}\n\n</dd>\n",
                normalize_question(&entry.question),
                render_answer(entry, terms)
            ));
        }
        fragment.push_str("</dl>\n\n");
    }

    cleanup::normalize(&fragment)
}

/// Group entries by section, preserving first-seen section order, and sort
/// each section's entries by `order` (stable, so equal orders keep fetch
/// order).
fn group_by_section(entries: &[FaqEntry]) -> Vec<(String, Vec<&FaqEntry>)> {
    let mut sections: Vec<(String, Vec<&FaqEntry>)> = Vec::new();

    for entry in entries {
        match sections.iter_mut().find(|(name, _)| *name == entry.section) {
            Some((_, bucket)) => bucket.push(entry),
            None => sections.push((entry.section.clone(), vec![entry])),
        }
    }

    for (_, bucket) in &mut sections {
        bucket.sort_by_key(|e| e.order);
    }

    sections
}

/// Render an entry's answer: structured blocks when present, else the flat
/// rich-text answer.
fn render_answer(entry: &FaqEntry, terms: &LinkableTerms) -> String {
    if entry.blocks.is_empty() {
        render_rich_text(&entry.answer, terms)
    } else {
        render_blocks(&entry.blocks, terms)
    }
}

/// Questions are plain strings; they get the same quote treatment as spans.
fn normalize_question(question: &str) -> String {
    question
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}
