//! Converter trait definition
//!
//! Each conversion direction implements [`Converter`]. The trait gives the registry and the
//! CLI a uniform way to describe, select and run a direction.

use crate::config::{ConversionConfig, Mode};
use crate::error::ConvertError;
use crate::stats::Statistics;
use serde::Serialize;

/// Successful result of one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub stats: Statistics,
}

/// Serializable view of a conversion outcome: `{success, output?, error?, stats?}`
///
/// Built from a `Result`, so exactly one of `output` and `error` is ever populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Statistics>,
}

impl From<Result<Conversion, ConvertError>> for ConversionReport {
    fn from(result: Result<Conversion, ConvertError>) -> Self {
        match result {
            Ok(Conversion { output, stats }) => ConversionReport {
                success: true,
                output: Some(output),
                error: None,
                stats: Some(stats),
            },
            Err(err) => ConversionReport {
                success: false,
                output: None,
                error: Some(err.to_string()),
                stats: None,
            },
        }
    }
}

/// Trait for conversion directions
///
/// # Examples
///
/// ```ignore
/// struct Upper;
///
/// impl Converter for Upper {
///     fn mode(&self) -> Mode {
///         Mode::MarkdownToHtml
///     }
///
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn convert(&self, source: &str, _config: &ConversionConfig) -> Result<Conversion, ConvertError> {
///         let output = source.to_uppercase();
///         let stats = compute_reverse_stats(source, &output);
///         Ok(Conversion { output, stats })
///     }
/// }
/// ```
pub trait Converter: Send + Sync {
    /// The direction this converter implements
    fn mode(&self) -> Mode;

    /// Name of the source format (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// File extensions of the source format, without the leading dot
    ///
    /// Used for automatic mode detection from filenames.
    fn source_extensions(&self) -> &[&str] {
        &[]
    }

    /// Convert source text. Input is assumed non-empty; emptiness is checked by the caller.
    fn convert(&self, source: &str, config: &ConversionConfig)
        -> Result<Conversion, ConvertError>;
}
