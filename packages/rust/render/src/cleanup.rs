//! Whitespace normalization for composed Markdown fragments.
//!
//! Each pass is a function `&str -> String` applied in sequence. Composers
//! run the pipeline once over a finished fragment before it is persisted.

use std::sync::LazyLock;

use regex::Regex;

/// Run the normalization pipeline on a composed fragment.
pub fn normalize(fragment: &str) -> String {
    let mut result = fragment.to_string();

    result = collapse_blank_lines(&result);
    result = strip_trailing_spaces(&result);
    result = ensure_trailing_newline(&result);

    result
}

// ---------------------------------------------------------------------------
// Pass 1: Collapse excessive blank lines
// ---------------------------------------------------------------------------

/// Collapse runs of 2+ blank lines into exactly 1.
fn collapse_blank_lines(md: &str) -> String {
    static MULTI_BLANK_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

    MULTI_BLANK_RE.replace_all(md, "\n\n").to_string()
}

// ---------------------------------------------------------------------------
// Pass 2: Strip trailing whitespace per line
// ---------------------------------------------------------------------------

/// Remove trailing spaces and tabs from every line.
fn strip_trailing_spaces(md: &str) -> String {
    static TRAILING_WS_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid regex"));

    TRAILING_WS_RE.replace_all(md, "").to_string()
}

// ---------------------------------------------------------------------------
// Pass 3: Single trailing newline
// ---------------------------------------------------------------------------

/// Guarantee the fragment ends with exactly one newline.
fn ensure_trailing_newline(md: &str) -> String {
    let mut result = md.trim_end_matches('\n').to_string();
    result.push('\n');
    result
}
