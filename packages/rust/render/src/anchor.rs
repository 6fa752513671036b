//! Anchor-key derivation for glossary headings.
//!
//! Keys are a pure function of the term text, so they are stable across
//! runs and independent of fetch order.

use partialgen_shared::RichText;

use crate::render_plain;

/// Characters retained in anchor keys besides letters, digits, and whitespace.
const RETAINED_CHARS: &[char] = &['$', '-', '(', ')'];

/// Derive a lowercase, hyphen-delimited anchor key from a term's rich text.
///
/// The term is rendered to plain text, characters outside the retained set
/// are removed, and whitespace runs collapse to single hyphens. Two terms
/// with identical text produce identical keys.
pub fn anchor_key(term: &[RichText]) -> String {
    let plain = render_plain(term);

    let filtered: String = plain
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || RETAINED_CHARS.contains(c))
        .collect();

    filtered
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
