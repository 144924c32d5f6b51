//! Configuration types for editor sessions and code generation.
//!
//! All types implement [`serde::Deserialize`] for flexible loading from
//! external sources (the CLI loads them from TOML files).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`HistoryConfig`] - Undo history retention settings.
//! - [`GeneratorConfig`] - Code generation settings.

use serde::Deserialize;

use crate::generate::Language;

/// Top-level application configuration combining history and generator
/// settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// History configuration section.
    #[serde(default)]
    history: HistoryConfig,

    /// Generator configuration section.
    #[serde(default)]
    generator: GeneratorConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(history: HistoryConfig, generator: GeneratorConfig) -> Self {
        Self { history, generator }
    }

    /// Returns the history configuration.
    pub fn history(&self) -> &HistoryConfig {
        &self.history
    }

    /// Returns the generator configuration.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }
}

/// Undo history retention settings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of undo snapshots to retain. Unset keeps the full
    /// session history; a cap evicts the oldest snapshot when reached,
    /// shortening the available undo depth.
    #[serde(default)]
    limit: Option<usize>,
}

impl HistoryConfig {
    /// Creates a new [`HistoryConfig`] with the given snapshot cap.
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit }
    }

    /// Returns the undo snapshot cap, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// Code generation settings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Default target [`Language`] when the caller does not select one.
    #[serde(default)]
    language: Language,
}

impl GeneratorConfig {
    /// Creates a new [`GeneratorConfig`] with the given default language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Returns the default target language.
    pub fn language(&self) -> Language {
        self.language
    }
}
