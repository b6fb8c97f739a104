//! Functional entry points
//!
//! These wrap the [`ConverterRegistry`] in plain functions for callers that do not need to
//! manage converters themselves, such as the CLI or embedding hosts.

use crate::config::ConversionConfig;
use crate::converter::{Conversion, ConversionReport};
use crate::error::ConvertError;
use crate::registry::ConverterRegistry;
use std::panic::{self, AssertUnwindSafe};

/// Convert `input` in the direction named by `config.mode`
///
/// Whitespace-only input is rejected with [`ConvertError::EmptyInput`]. A panic inside a
/// converter is caught and reported as [`ConvertError::Internal`].
///
/// # Example
///
/// ```ignore
/// use mdbridge_convert::{convert, ConversionConfig};
///
/// let result = convert("# Hello", &ConversionConfig::default()).unwrap();
/// assert_eq!(result.output, "<h1 id=\"hello\">Hello</h1>\n");
/// ```
pub fn convert(input: &str, config: &ConversionConfig) -> Result<Conversion, ConvertError> {
    if input.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let registry = ConverterRegistry::default();
    match panic::catch_unwind(AssertUnwindSafe(|| registry.convert(input, config))) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(mode = %config.mode, %message, "conversion panicked");
            Err(ConvertError::Internal(message))
        }
    }
}

/// Convert and fold the outcome into a serializable [`ConversionReport`]
pub fn convert_to_report(input: &str, config: &ConversionConfig) -> ConversionReport {
    ConversionReport::from(convert(input, config))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "conversion failed unexpectedly".to_string()
    }
}
