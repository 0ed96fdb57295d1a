//! Shared configuration loader for the tabmark toolchain.
//!
//! `defaults/tabmark.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`TabmarkConfig`].
//!
//! Invalid option values (an unknown list style, a misspelled indentation
//! name) are rejected here, at deserialization time; the engine's option
//! types are closed enums that cannot hold them.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
pub use config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tabmark_core::{IndentationStyle, Markdown, UnorderedListMarker};

const DEFAULT_TOML: &str = include_str!("../defaults/tabmark.default.toml");

/// Top-level configuration consumed by tabmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TabmarkConfig {
    pub markdown: MarkdownConfig,
    pub links: LinksConfig,
}

impl TabmarkConfig {
    /// Build the engine's formatter from this configuration.
    pub fn markdown_formatter(&self) -> Markdown {
        Markdown {
            always_escape_link_bracket: self.markdown.always_escape_link_brackets,
            unordered_list_marker: self.markdown.unordered_list_style.into(),
            indentation: self.markdown.tab_group_indentation.into(),
            decode_urls: self.links.decode_urls,
        }
    }
}

/// Mirrors the knobs exposed by the Markdown formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub always_escape_link_brackets: bool,
    pub unordered_list_style: UnorderedListStyle,
    pub tab_group_indentation: TabGroupIndentation,
}

/// Link-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    pub decode_urls: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UnorderedListStyle {
    #[serde(rename = "dash")]
    Dash,
    #[serde(rename = "asterisk")]
    Asterisk,
    #[serde(rename = "plus")]
    Plus,
}

impl From<UnorderedListStyle> for UnorderedListMarker {
    fn from(style: UnorderedListStyle) -> Self {
        match style {
            UnorderedListStyle::Dash => UnorderedListMarker::Dash,
            UnorderedListStyle::Asterisk => UnorderedListMarker::Asterisk,
            UnorderedListStyle::Plus => UnorderedListMarker::Plus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TabGroupIndentation {
    #[serde(rename = "spaces")]
    Spaces,
    #[serde(rename = "tab")]
    Tab,
}

impl From<TabGroupIndentation> for IndentationStyle {
    fn from(indentation: TabGroupIndentation) -> Self {
        match indentation {
            TabGroupIndentation::Spaces => IndentationStyle::Spaces,
            TabGroupIndentation::Tab => IndentationStyle::Tab,
        }
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
    pub fn build(self) -> Result<TabmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TabmarkConfig, ConfigError> {
    Loader::new().build()
}
