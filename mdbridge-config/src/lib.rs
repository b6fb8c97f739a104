//! Shared configuration loader for mdbridge.
//!
//! `defaults/mdbridge.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdbridgeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdbridge_convert::{ConversionConfig, Mode, OutputFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdbridge.default.toml");

/// Top-level configuration consumed by mdbridge applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdbridgeConfig {
    pub convert: ConvertSettings,
    pub logging: LoggingConfig,
}

/// Mirrors the knobs of [`ConversionConfig`].
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertSettings {
    pub mode: Mode,
    pub enable_tables: bool,
    pub enable_strikethrough: bool,
    pub enable_task_lists: bool,
    pub enable_autolinks: bool,
    pub generate_toc: bool,
    pub sanitize_html: bool,
    pub output_format: OutputFormat,
    pub heading_offset: i32,
    pub html: HtmlSettings,
}

/// Settings for full-html documents.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlSettings {
    pub title: String,
    /// Path to a stylesheet. Reading it is left to the caller.
    #[serde(default)]
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl From<&ConvertSettings> for ConversionConfig {
    fn from(settings: &ConvertSettings) -> Self {
        let title = settings.html.title.trim();
        ConversionConfig {
            mode: settings.mode,
            enable_tables: settings.enable_tables,
            enable_strikethrough: settings.enable_strikethrough,
            enable_task_lists: settings.enable_task_lists,
            enable_autolinks: settings.enable_autolinks,
            generate_toc: settings.generate_toc,
            sanitize_html: settings.sanitize_html,
            output_format: settings.output_format,
            heading_offset: settings.heading_offset,
            title: (!title.is_empty()).then(|| title.to_string()),
            // Holds the stylesheet text, which the caller loads from `html.custom_css`.
            custom_css: None,
        }
    }
}

impl From<ConvertSettings> for ConversionConfig {
    fn from(settings: ConvertSettings) -> Self {
        ConversionConfig::from(&settings)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdbridgeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdbridgeConfig, ConfigError> {
    Loader::new().build()
}
