// Rust guideline compliant 2026-10-15

//! Configuration management for Stockroom.

use crate::{Category, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "stockroom.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for shell results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses a format name as used on the command line and in the environment.
    #[must_use]
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name {
            "json" => Some(OutputFormat::Json),
            "table" => Some(OutputFormat::Table),
            "plain" => Some(OutputFormat::Plain),
            _ => None,
        }
    }
}

/// The categories a session accepts, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(Vec<Category>);

impl Default for CategorySet {
    fn default() -> Self {
        Self(Category::ALL.to_vec())
    }
}

impl From<Vec<Category>> for CategorySet {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

impl CategorySet {
    /// Resolves a raw selection to a configured category.
    ///
    /// The selection must equal a configured category's canonical name;
    /// blank input and categories outside the set resolve to `None`.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Option<Category> {
        Category::from_name(raw).filter(|category| self.contains(*category))
    }

    /// Returns whether the category is part of the set.
    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    /// Iterates over the configured categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }

    /// Returns the number of configured categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no category is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Configuration for Stockroom behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Categories offered by the category field.
    #[serde(default)]
    pub categories: CategorySet,

    /// Default output format for the shell.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level used when none is given on the command line.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether to colour status lines when the terminal supports it.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: CategorySet::default(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if it exists
    /// 3. Environment variables with `STOCKROOM_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - An environment variable holds an invalid value
    /// - The resulting values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
            tracing::debug!(path = %path.display(), "loaded config file");
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Supported keys:
    /// - `STOCKROOM_CATEGORIES` - Comma-separated category names
    /// - `STOCKROOM_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `STOCKROOM_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `STOCKROOM_COLOR` - Colour status lines (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("STOCKROOM_CATEGORIES") {
            let categories = val
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| {
                    Category::from_name(name).ok_or_else(|| {
                        Error::Config(format!("STOCKROOM_CATEGORIES: unknown category '{}'", name))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            self.categories = CategorySet::from(categories);
        }

        if let Some(val) = lookup("STOCKROOM_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::from_name(&val).ok_or_else(|| {
                Error::Config("STOCKROOM_OUTPUT_FORMAT must be json, table, or plain".to_string())
            })?;
        }

        if let Some(val) = lookup("STOCKROOM_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Some(val) = lookup("STOCKROOM_COLOR") {
            self.color = val.parse().map_err(|_| {
                Error::Config("STOCKROOM_COLOR must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No category is configured
    /// - A category is listed twice
    /// - The log level is unknown
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::Config(
                "categories must list at least one category".to_string(),
            ));
        }

        for (index, category) in self.categories.iter().enumerate() {
            if self.categories.iter().skip(index + 1).any(|c| c == category) {
                return Err(Error::Config(format!(
                    "category '{}' is listed more than once",
                    category
                )));
            }
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
