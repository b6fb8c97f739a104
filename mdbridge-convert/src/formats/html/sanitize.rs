//! HTML sanitization
//!
//! Parses HTML into a DOM with `html5ever`, removes active content and serializes the
//! remaining body content back to a fragment.
//!
//! Removed:
//! - `script`, `style`, `iframe`, `object`, `embed` and `form` elements with their content
//! - `on*` event-handler attributes
//! - `href`/`src`/`action` values whose scheme is not `http`, `https` or `mailto`
//!
//! Relative URLs (`#intro`, `/img.png`, `docs/a.html`) are kept.

use crate::error::ConvertError;
use html5ever::tendril::TendrilSink;
use html5ever::{
    parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute,
};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use url::Url;

const BLOCKED_ELEMENTS: &[&str] = &["script", "style", "iframe", "object", "embed", "form"];
const URL_ATTRIBUTES: &[&str] = &["href", "src", "action"];
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Sanitize an HTML fragment or document, returning the cleaned body content
pub fn sanitize_html(html: &str) -> Result<String, ConvertError> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    let body = find_element(&dom.document, "body").ok_or_else(|| {
        ConvertError::SerializationError("parsed document has no body".to_string())
    })?;

    let removed = clean_children(&body);
    if removed > 0 {
        tracing::warn!(removed, "sanitizer dropped unsafe elements or attributes");
    }

    serialize_children(&body)
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == tag {
            return Some(handle.clone());
        }
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

/// Remove blocked children and unsafe attributes below `handle`, returning how many were dropped
fn clean_children(handle: &Handle) -> usize {
    let mut removed = 0;
    let mut children = handle.children.borrow_mut();
    children.retain(|child| {
        let blocked = is_blocked(child);
        if blocked {
            removed += 1;
        }
        !blocked
    });

    for child in children.iter() {
        if let NodeData::Element { attrs, .. } = &child.data {
            let mut attrs = attrs.borrow_mut();
            let before = attrs.len();
            attrs.retain(is_safe_attribute);
            removed += before - attrs.len();
        }
        removed += clean_children(child);
    }
    removed
}

fn is_blocked(handle: &Handle) -> bool {
    match &handle.data {
        NodeData::Element { name, .. } => BLOCKED_ELEMENTS.contains(&&*name.local),
        _ => false,
    }
}

fn is_safe_attribute(attr: &Attribute) -> bool {
    let name = attr.name.local.to_ascii_lowercase();
    if name.starts_with("on") {
        return false;
    }
    if URL_ATTRIBUTES.contains(&&*name) {
        return is_safe_url(&attr.value);
    }
    true
}

fn is_safe_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

fn serialize_children(parent: &Handle) -> Result<String, ConvertError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in parent.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            ConvertError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| ConvertError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}
