//! HTML → Markdown conversion
//!
//! A fixed, ordered sequence of regex substitutions that turns common HTML tags back into
//! Markdown syntax. This is best effort and intentionally lossy: nested or overlapping tags
//! are not generally handled, and there is no HTML parser behind it. Callers get reasonable
//! Markdown for simple HTML, not round-trip fidelity.
//!
//! Order of the passes:
//!
//! 1. drop `<head>`, `<script>`, `<style>` and comments; join tags separated by newlines
//! 2. headings `<h1>`..`<h6>`
//! 3. fenced code from `<pre><code>` (before paragraphs and inline code, which would
//!    otherwise consume it)
//! 4. paragraphs
//! 5. bold, italic, strikethrough, inline code
//! 6. images, then links
//! 7. line breaks and horizontal rules
//! 8. list items (with task checkboxes) and blockquotes
//! 9. strip any remaining tag, decode basic entities, collapse 3+ newlines to 2

use crate::common::decode_entities;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

macro_rules! regex {
    ($name:ident, $pattern:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| {
            Regex::new($pattern).expect(concat!(stringify!($name), ": hardcoded regex is valid"))
        });
    };
}

regex!(HEAD, r"(?is)<head(?:\s[^>]*)?>.*?</head>");
regex!(SCRIPT, r"(?is)<script(?:\s[^>]*)?>.*?</script>");
regex!(STYLE, r"(?is)<style(?:\s[^>]*)?>.*?</style>");
regex!(COMMENT, r"(?s)<!--.*?-->");
regex!(NEWLINE_BETWEEN_TAGS, r">[ \t\r]*\n\s*<");
regex!(
    PRE_CODE,
    r#"(?is)<pre(?:\s[^>]*)?>\s*<code(?:\s+class="language-([^"]*)")?[^>]*>(.*?)</code>\s*</pre>"#
);
regex!(PARAGRAPH, r"(?is)<p(?:\s[^>]*)?>(.*?)</p>");
regex!(BOLD, r"(?is)<(?:strong|b)(?:\s[^>]*)?>(.*?)</(?:strong|b)>");
regex!(ITALIC, r"(?is)<(?:em|i)(?:\s[^>]*)?>(.*?)</(?:em|i)>");
regex!(
    STRIKETHROUGH,
    r"(?is)<(?:del|s|strike)(?:\s[^>]*)?>(.*?)</(?:del|s|strike)>"
);
regex!(INLINE_CODE, r"(?is)<code(?:\s[^>]*)?>(.*?)</code>");
regex!(IMAGE, r"(?is)<img(\s[^>]*)?/?>");
regex!(LINK, r"(?is)<a(\s[^>]*)?>(.*?)</a>");
regex!(ATTRIBUTE, r#"(?i)([a-z-]+)\s*=\s*"([^"]*)""#);
regex!(LINE_BREAK, r"(?i)<br\s*/?>");
regex!(HORIZONTAL_RULE, r"(?i)<hr(?:\s[^>]*)?/?>");
regex!(CHECKBOX, r#"(?i)<input(\s[^>]*)?type="checkbox"([^>]*)>\s*"#);
regex!(LIST_ITEM, r"(?is)<li(?:\s[^>]*)?>(.*?)</li>");
regex!(LIST_END, r"(?i)</(?:ul|ol)>");
regex!(BLOCKQUOTE, r"(?is)<blockquote(?:\s[^>]*)?>(.*?)</blockquote>");
regex!(ANY_TAG, r"<[^>]+>");
regex!(EXCESS_NEWLINES, r"\n{3,}");

static HEADINGS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    (1..=6)
        .map(|level| {
            let pattern = format!(r"(?is)<h{level}(?:\s[^>]*)?>(.*?)</h{level}>");
            let regex = Regex::new(&pattern).expect("HEADINGS: generated regex is valid");
            let replacement = format!("{} ${{1}}\n\n", "#".repeat(level));
            (regex, replacement)
        })
        .collect()
});

/// Convert HTML to Markdown
pub fn html_to_markdown(html: &str) -> String {
    let mut md = drop_non_content(html);
    md = NEWLINE_BETWEEN_TAGS.replace_all(&md, "><").into_owned();

    for (regex, replacement) in HEADINGS.iter() {
        md = regex.replace_all(&md, replacement.as_str()).into_owned();
    }

    md = PRE_CODE
        .replace_all(&md, |caps: &Captures| {
            let language = caps.get(1).map_or("", |m| m.as_str());
            format!("```{language}\n{}\n```\n\n", &caps[2])
        })
        .into_owned();

    md = PARAGRAPH.replace_all(&md, "${1}\n\n").into_owned();
    md = BOLD.replace_all(&md, "**${1}**").into_owned();
    md = ITALIC.replace_all(&md, "*${1}*").into_owned();
    md = STRIKETHROUGH.replace_all(&md, "~~${1}~~").into_owned();
    md = INLINE_CODE.replace_all(&md, "`${1}`").into_owned();

    md = IMAGE
        .replace_all(&md, |caps: &Captures| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            let src = attribute(attrs, "src").unwrap_or_default();
            let alt = attribute(attrs, "alt").unwrap_or_default();
            match attribute(attrs, "title") {
                Some(title) => format!("![{alt}]({src} \"{title}\")"),
                None => format!("![{alt}]({src})"),
            }
        })
        .into_owned();

    md = LINK
        .replace_all(&md, |caps: &Captures| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            let text = &caps[2];
            match (attribute(attrs, "href"), attribute(attrs, "title")) {
                (Some(href), Some(title)) => format!("[{text}]({href} \"{title}\")"),
                (Some(href), None) => format!("[{text}]({href})"),
                (None, _) => text.to_string(),
            }
        })
        .into_owned();

    md = LINE_BREAK.replace_all(&md, "  \n").into_owned();
    md = HORIZONTAL_RULE.replace_all(&md, "\n---\n\n").into_owned();

    md = CHECKBOX
        .replace_all(&md, |caps: &Captures| {
            let attrs = format!(
                "{}{}",
                caps.get(1).map_or("", |m| m.as_str()),
                &caps[2]
            );
            if attrs.to_ascii_lowercase().contains("checked") {
                "[x] ".to_string()
            } else {
                "[ ] ".to_string()
            }
        })
        .into_owned();
    md = LIST_ITEM.replace_all(&md, "- ${1}\n").into_owned();
    md = LIST_END.replace_all(&md, "\n").into_owned();

    md = BLOCKQUOTE
        .replace_all(&md, |caps: &Captures| {
            let quoted: Vec<String> = caps[1]
                .trim()
                .lines()
                .map(|line| {
                    if line.trim().is_empty() {
                        ">".to_string()
                    } else {
                        format!("> {line}")
                    }
                })
                .collect();
            format!("{}\n\n", quoted.join("\n"))
        })
        .into_owned();

    md = ANY_TAG.replace_all(&md, "").into_owned();
    md = decode_entities(&md);
    md = EXCESS_NEWLINES.replace_all(&md, "\n\n").into_owned();
    md.trim().to_string()
}

fn drop_non_content(html: &str) -> String {
    let out = HEAD.replace_all(html, "");
    let out = SCRIPT.replace_all(&out, "");
    let out = STYLE.replace_all(&out, "");
    COMMENT.replace_all(&out, "").into_owned()
}

fn attribute(attrs: &str, name: &str) -> Option<String> {
    ATTRIBUTE
        .captures_iter(attrs)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .map(|caps| caps[2].to_string())
}
