//! Intermediate Representation (IR) for Markdown documents.
//!
//! The scanner produces a flat sequence of [`nodes::Block`] values, one per structural unit
//! of the input. Blocks are created in a single left-to-right pass, never mutated afterwards,
//! and consumed once by the HTML serializer.

pub mod nodes;
