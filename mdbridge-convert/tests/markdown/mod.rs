//! Markdown format tests
//!
//! Tests for the Markdown → HTML direction.

mod export;
mod kitchensink;
mod table;
