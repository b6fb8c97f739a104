//! Shared helpers used by both conversion directions.

pub mod text;

pub use text::{decode_entities, escape_html, slugify};
