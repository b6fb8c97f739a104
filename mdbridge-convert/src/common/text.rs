//! Text escaping and identifier helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("NON_SLUG_CHARS: hardcoded regex is valid"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN: hardcoded regex is valid"));

/// Entity-encode `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Decode the entities [`escape_html`] produces, plus `&nbsp;` and `&#x27;`.
///
/// `&amp;` is decoded last so `&amp;lt;` becomes `&lt;` rather than `<`.
pub fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Build a heading anchor id: lowercase, drop everything that is not a word character,
/// whitespace or hyphen, then replace whitespace runs with a single hyphen.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUN.replace_all(&stripped, "-").into_owned()
}
