//! Converter registry for direction discovery and selection
//!
//! This module provides a centralized registry for the available converters.
//! Converters are registered and retrieved by [`Mode`].

use crate::config::{ConversionConfig, Mode};
use crate::converter::{Conversion, Converter};
use crate::error::ConvertError;
use std::collections::HashMap;

/// Registry of converters
///
/// # Examples
///
/// ```ignore
/// let registry = ConverterRegistry::default();
/// let converter = registry.get(Mode::MarkdownToHtml)?;
/// let result = converter.convert("# Title", &ConversionConfig::default())?;
/// ```
pub struct ConverterRegistry {
    converters: HashMap<Mode, Box<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter for the same mode already exists, it will be replaced.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) {
        self.converters.insert(converter.mode(), Box::new(converter));
    }

    /// Get the converter for a mode
    pub fn get(&self, mode: Mode) -> Result<&dyn Converter, ConvertError> {
        self.converters
            .get(&mode)
            .map(|c| c.as_ref())
            .ok_or_else(|| ConvertError::ConverterNotFound(mode.to_string()))
    }

    /// Check if a converter exists for a mode
    pub fn has(&self, mode: Mode) -> bool {
        self.converters.contains_key(&mode)
    }

    /// List registered modes (sorted by name)
    pub fn list_modes(&self) -> Vec<Mode> {
        let mut modes: Vec<_> = self.converters.keys().copied().collect();
        modes.sort_by_key(|m| m.as_str());
        modes
    }

    /// Detect the conversion mode from a filename's extension
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = ConverterRegistry::default();
    /// assert_eq!(registry.detect_mode_from_filename("doc.md"), Some(Mode::MarkdownToHtml));
    /// assert_eq!(registry.detect_mode_from_filename("page.html"), Some(Mode::HtmlToMarkdown));
    /// assert_eq!(registry.detect_mode_from_filename("doc.unknown"), None);
    /// ```
    pub fn detect_mode_from_filename(&self, filename: &str) -> Option<Mode> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.converters
            .values()
            .find(|c| c.source_extensions().contains(&extension))
            .map(|c| c.mode())
    }

    /// Run the converter selected by `config.mode`
    pub fn convert(
        &self,
        source: &str,
        config: &ConversionConfig,
    ) -> Result<Conversion, ConvertError> {
        self.get(config.mode)?.convert(source, config)
    }

    /// Create a registry with both built-in directions
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::MarkdownToHtml);
        registry.register(crate::formats::HtmlToMarkdown);
        registry
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
