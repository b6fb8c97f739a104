//! Inline span transformation
//!
//! Rewrites the span-level Markdown syntax of one block's text into HTML tags. The rules run
//! as an ordered chain of pure string substitutions and each rule sees the output of the
//! previous one, so the order is part of the contract:
//!
//! 1. bold (`**x**`, `__x__`)
//! 2. italic (`*x*`, `_x_`)
//! 3. strikethrough (`~~x~~`), when enabled
//! 4. inline code (`` `x` ``)
//! 5. links (`[text](url "title")`)
//! 6. images (`![alt](url "title")`)
//! 7. autolinks (bare `http(s)://` URLs and e-mail addresses), when enabled
//!
//! Bold runs before italic so `**x**` never becomes nested `<em>`. Inline code content is not
//! escaped: `` `<b>` `` passes through as raw HTML. Code block bodies never reach this module.

use crate::config::ConversionConfig;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD_STARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("BOLD_STARS: hardcoded regex is valid"));
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b__(.+?)__\b").expect("BOLD_UNDERSCORES: hardcoded regex is valid")
});
static ITALIC_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("ITALIC_STAR: hardcoded regex is valid"));
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b_(.+?)_\b").expect("ITALIC_UNDERSCORE: hardcoded regex is valid")
});
static STRIKETHROUGH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"~~(.+?)~~").expect("STRIKETHROUGH: hardcoded regex is valid"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("INLINE_CODE: hardcoded regex is valid"));
// Links and images share one shape; the optional `!` decides which rule owns a match.
static LINK_OR_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(!?)\[([^\[\]]*)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)"#)
        .expect("LINK_OR_IMAGE: hardcoded regex is valid")
});
static BARE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(^|[\s(])(https?://[^\s<>"]+)"#).expect("BARE_URL: hardcoded regex is valid")
});
static BARE_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|\s)([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})\b")
        .expect("BARE_EMAIL: hardcoded regex is valid")
});

const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Apply the inline rule chain to the text of one block
pub fn transform_inline(text: &str, config: &ConversionConfig) -> String {
    let mut out = bold(text);
    out = italic(&out);
    if config.enable_strikethrough {
        out = strikethrough(&out);
    }
    out = inline_code(&out);
    out = links(&out);
    out = images(&out);
    if config.enable_autolinks {
        out = autolinks(&out);
    }
    out
}

fn bold(text: &str) -> String {
    let out = BOLD_STARS.replace_all(text, "<strong>${1}</strong>");
    BOLD_UNDERSCORES
        .replace_all(&out, "<strong>${1}</strong>")
        .into_owned()
}

fn italic(text: &str) -> String {
    let out = ITALIC_STAR.replace_all(text, "<em>${1}</em>");
    ITALIC_UNDERSCORE
        .replace_all(&out, "<em>${1}</em>")
        .into_owned()
}

fn strikethrough(text: &str) -> String {
    STRIKETHROUGH
        .replace_all(text, "<del>${1}</del>")
        .into_owned()
}

fn inline_code(text: &str) -> String {
    INLINE_CODE
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

fn links(text: &str) -> String {
    LINK_OR_IMAGE
        .replace_all(text, |caps: &Captures| {
            if !caps[1].is_empty() {
                return caps[0].to_string();
            }
            let label = &caps[2];
            let href = &caps[3];
            match caps.get(4) {
                Some(title) => format!(
                    r#"<a href="{href}" title="{}">{label}</a>"#,
                    title.as_str()
                ),
                None => format!(r#"<a href="{href}">{label}</a>"#),
            }
        })
        .into_owned()
}

fn images(text: &str) -> String {
    LINK_OR_IMAGE
        .replace_all(text, |caps: &Captures| {
            if caps[1].is_empty() {
                return caps[0].to_string();
            }
            let alt = &caps[2];
            let src = &caps[3];
            match caps.get(4) {
                Some(title) => format!(
                    r#"<img src="{src}" alt="{alt}" title="{}">"#,
                    title.as_str()
                ),
                None => format!(r#"<img src="{src}" alt="{alt}">"#),
            }
        })
        .into_owned()
}

fn autolinks(text: &str) -> String {
    let out = BARE_URL.replace_all(text, |caps: &Captures| {
        let lead = &caps[1];
        let raw = &caps[2];
        let url = raw.trim_end_matches(URL_TRAILING_PUNCTUATION);
        let trailing = &raw[url.len()..];
        format!(r#"{lead}<a href="{url}">{url}</a>{trailing}"#)
    });
    BARE_EMAIL
        .replace_all(&out, r#"${1}<a href="mailto:${2}">${2}</a>"#)
        .into_owned()
}
