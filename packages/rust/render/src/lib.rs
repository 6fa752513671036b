//! Rich-text and block rendering to Markdown.
//!
//! This crate provides:
//! - [`render_rich_text`] — formatted span sequence → Markdown, with
//!   glossary cross-references resolved against a [`LinkableTerms`] table
//! - [`render_plain`] — span sequence → unformatted text
//! - [`render_blocks`] — structured content blocks → Markdown
//! - [`anchor`] — anchor-key derivation for glossary headings
//! - [`cleanup`] — whitespace normalization for composed fragments

pub mod anchor;
pub mod cleanup;

use partialgen_shared::{Block, LinkableTerms, RichText};

/// Render a rich-text sequence to Markdown.
///
/// Formatting degrades, never fails: a `mention` that is absent from the
/// table, or present but not valid, renders the span's text without a link.
pub fn render_rich_text(spans: &[RichText], terms: &LinkableTerms) -> String {
    spans.iter().map(|span| render_span(span, terms)).collect()
}

/// Render a rich-text sequence to plain text: quote normalization only,
/// no formatting, no links.
pub fn render_plain(spans: &[RichText]) -> String {
    spans
        .iter()
        .map(|span| normalize_quotes(&span.text))
        .collect()
}

/// Render a block sequence to Markdown.
///
/// Paragraphs are separated by blank lines. Consecutive list items of the
/// same kind form a single list. [`Block::Unsupported`] renders to nothing.
pub fn render_blocks(blocks: &[Block], terms: &LinkableTerms) -> String {
    let mut chunks: Vec<String> = Vec::new();
    let mut list: Vec<String> = Vec::new();
    let mut numbered = false;

    let flush_list = |list: &mut Vec<String>, chunks: &mut Vec<String>, numbered: bool| {
        if list.is_empty() {
            return;
        }
        let chunk = list
            .iter()
            .enumerate()
            .map(|(i, text)| {
                if numbered {
                    format!("{}. {text}", i + 1)
                } else {
                    format!("- {text}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        chunks.push(chunk);
        list.clear();
    };

    for block in blocks {
        match block {
            Block::Paragraph { rich_text } => {
                flush_list(&mut list, &mut chunks, numbered);
                let text = render_rich_text(rich_text, terms);
                if !text.trim().is_empty() {
                    chunks.push(text);
                }
            }
            Block::BulletedListItem { rich_text } => {
                if numbered {
                    flush_list(&mut list, &mut chunks, numbered);
                }
                numbered = false;
                list.push(render_rich_text(rich_text, terms));
            }
            Block::NumberedListItem { rich_text } => {
                if !numbered {
                    flush_list(&mut list, &mut chunks, numbered);
                }
                numbered = true;
                list.push(render_rich_text(rich_text, terms));
            }
            Block::Unsupported => {
                flush_list(&mut list, &mut chunks, numbered);
            }
        }
    }
    flush_list(&mut list, &mut chunks, numbered);

    chunks.join("\n\n")
}

// ---------------------------------------------------------------------------
// Span rendering
// ---------------------------------------------------------------------------

/// Render one span: normalize quotes, apply inline formatting, then wrap in
/// a link when the span resolves to a linkable target.
fn render_span(span: &RichText, terms: &LinkableTerms) -> String {
    let mut text = normalize_quotes(&span.text);

    // Inline formatting, innermost to outermost: code, italic, bold.
    if span.annotations.code {
        text = format!("`{text}`");
    }
    if span.annotations.italic {
        text = format!("*{text}*");
    }
    if span.annotations.bold {
        text = format!("**{text}**");
    }

    if let Some(target) = link_target(span, terms) {
        return format!("[{text}]({target})");
    }

    text
}

/// Resolve the link target for a span, if any.
///
/// A mention of a valid glossary term links to `{path}#{key}`; a mention
/// that does not resolve falls back to the span's `href`, so author-provided
/// external links keep working when a referenced definition is withdrawn.
fn link_target(span: &RichText, terms: &LinkableTerms) -> Option<String> {
    if let Some(page_id) = &span.mention {
        match terms.get(page_id) {
            Some(term) if term.valid => {
                return Some(format!("{}#{}", term.path, term.key));
            }
            _ => {}
        }
    }
    span.href.clone()
}

/// Replace curly quotes with their straight equivalents.
fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use partialgen_shared::{Annotations, LinkableTerm, PageId};

    fn span(text: &str) -> RichText {
        RichText::plain(text)
    }

    fn formatted(text: &str, bold: bool, italic: bool, code: bool) -> RichText {
        RichText {
            text: text.into(),
            annotations: Annotations { bold, italic, code },
            ..RichText::default()
        }
    }

    fn table_with(page_id: &str, key: &str, valid: bool) -> LinkableTerms {
        let mut terms = LinkableTerms::new();
        terms.insert(
            PageId::from(page_id),
            LinkableTerm {
                text: key.to_string(),
                key: key.to_string(),
                path: "/glossary".into(),
                valid,
                url: format!("https://workspace.example.com/{page_id}"),
            },
        );
        terms
    }

    // --- Inline formatting ---

    #[test]
    fn plain_spans_concatenate() {
        let spans = vec![span("Hello, "), span("world")];
        assert_eq!(render_rich_text(&spans, &LinkableTerms::new()), "Hello, world");
    }

    #[test]
    fn bold_italic_code_markers() {
        let spans = vec![
            formatted("bold", true, false, false),
            span(" and "),
            formatted("italic", false, true, false),
            span(" and "),
            formatted("code", false, false, true),
        ];
        assert_eq!(
            render_rich_text(&spans, &LinkableTerms::new()),
            "**bold** and *italic* and `code`"
        );
    }

    #[test]
    fn combined_formatting_nests_code_innermost() {
        let spans = vec![formatted("all", true, true, true)];
        assert_eq!(render_rich_text(&spans, &LinkableTerms::new()), "***`all`***");
    }

    #[test]
    fn curly_quotes_normalized() {
        let spans = vec![span("\u{201C}don\u{2019}t\u{201D}")];
        assert_eq!(render_rich_text(&spans, &LinkableTerms::new()), "\"don't\"");
    }

    // --- Links and mentions ---

    #[test]
    fn href_renders_markdown_link() {
        let spans = vec![RichText {
            text: "docs".into(),
            href: Some("https://example.com".into()),
            ..RichText::default()
        }];
        assert_eq!(
            render_rich_text(&spans, &LinkableTerms::new()),
            "[docs](https://example.com)"
        );
    }

    #[test]
    fn valid_mention_links_to_glossary_anchor() {
        let terms = table_with("pg_1", "quorum", true);
        let spans = vec![RichText {
            text: "quorum".into(),
            mention: Some(PageId::from("pg_1")),
            ..RichText::default()
        }];
        assert_eq!(render_rich_text(&spans, &terms), "[quorum](/glossary#quorum)");
    }

    #[test]
    fn invalid_mention_renders_plain() {
        let terms = table_with("pg_1", "quorum", false);
        let spans = vec![RichText {
            text: "quorum".into(),
            mention: Some(PageId::from("pg_1")),
            ..RichText::default()
        }];
        assert_eq!(render_rich_text(&spans, &terms), "quorum");
    }

    #[test]
    fn missing_mention_renders_plain() {
        let spans = vec![RichText {
            text: "quorum".into(),
            mention: Some(PageId::from("pg_absent")),
            ..RichText::default()
        }];
        assert_eq!(render_rich_text(&spans, &LinkableTerms::new()), "quorum");
    }

    #[test]
    fn unresolved_mention_falls_back_to_href() {
        let spans = vec![RichText {
            text: "whitepaper".into(),
            href: Some("https://example.com/whitepaper".into()),
            mention: Some(PageId::from("pg_absent")),
            ..RichText::default()
        }];
        assert_eq!(
            render_rich_text(&spans, &LinkableTerms::new()),
            "[whitepaper](https://example.com/whitepaper)"
        );
    }

    #[test]
    fn mention_wins_over_href_when_valid() {
        let terms = table_with("pg_1", "quorum", true);
        let spans = vec![RichText {
            text: "quorum".into(),
            href: Some("https://elsewhere.example.com".into()),
            mention: Some(PageId::from("pg_1")),
            ..RichText::default()
        }];
        assert_eq!(render_rich_text(&spans, &terms), "[quorum](/glossary#quorum)");
    }

    #[test]
    fn formatted_mention_keeps_formatting_inside_link() {
        let terms = table_with("pg_1", "quorum", true);
        let spans = vec![RichText {
            text: "quorum".into(),
            annotations: Annotations {
                bold: true,
                ..Annotations::default()
            },
            mention: Some(PageId::from("pg_1")),
            ..RichText::default()
        }];
        assert_eq!(
            render_rich_text(&spans, &terms),
            "[**quorum**](/glossary#quorum)"
        );
    }

    // --- Plain rendering ---

    #[test]
    fn render_plain_drops_formatting_and_links() {
        let spans = vec![
            formatted("Delegated ", true, false, false),
            RichText {
                text: "quorum".into(),
                mention: Some(PageId::from("pg_1")),
                ..RichText::default()
            },
        ];
        assert_eq!(render_plain(&spans), "Delegated quorum");
    }

    #[test]
    fn render_plain_normalizes_quotes() {
        assert_eq!(render_plain(&[span("it\u{2019}s")]), "it's");
    }

    // --- Block rendering ---

    #[test]
    fn paragraphs_joined_with_blank_line() {
        let blocks = vec![
            Block::Paragraph {
                rich_text: vec![span("First.")],
            },
            Block::Paragraph {
                rich_text: vec![span("Second.")],
            },
        ];
        assert_eq!(
            render_blocks(&blocks, &LinkableTerms::new()),
            "First.\n\nSecond."
        );
    }

    #[test]
    fn consecutive_bullets_form_one_list() {
        let blocks = vec![
            Block::Paragraph {
                rich_text: vec![span("Options:")],
            },
            Block::BulletedListItem {
                rich_text: vec![span("yes")],
            },
            Block::BulletedListItem {
                rich_text: vec![span("no")],
            },
        ];
        assert_eq!(
            render_blocks(&blocks, &LinkableTerms::new()),
            "Options:\n\n- yes\n- no"
        );
    }

    #[test]
    fn numbered_items_increment() {
        let blocks = vec![
            Block::NumberedListItem {
                rich_text: vec![span("register")],
            },
            Block::NumberedListItem {
                rich_text: vec![span("vote")],
            },
        ];
        assert_eq!(
            render_blocks(&blocks, &LinkableTerms::new()),
            "1. register\n2. vote"
        );
    }

    #[test]
    fn list_kind_change_starts_new_list() {
        let blocks = vec![
            Block::BulletedListItem {
                rich_text: vec![span("a")],
            },
            Block::NumberedListItem {
                rich_text: vec![span("b")],
            },
        ];
        assert_eq!(render_blocks(&blocks, &LinkableTerms::new()), "- a\n\n1. b");
    }

    #[test]
    fn unsupported_blocks_render_nothing() {
        let blocks = vec![
            Block::Paragraph {
                rich_text: vec![span("kept")],
            },
            Block::Unsupported,
            Block::Paragraph {
                rich_text: vec![span("also kept")],
            },
        ];
        assert_eq!(
            render_blocks(&blocks, &LinkableTerms::new()),
            "kept\n\nalso kept"
        );
    }

    #[test]
    fn empty_paragraph_skipped() {
        let blocks = vec![
            Block::Paragraph { rich_text: vec![] },
            Block::Paragraph {
                rich_text: vec![span("content")],
            },
        ];
        assert_eq!(render_blocks(&blocks, &LinkableTerms::new()), "content");
    }
}
