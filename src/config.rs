// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `ROUTEIFY_*` environment variables (nested keys use `__`, e.g.
//! `ROUTEIFY_RANKING__STRATEGY=shortest`).

use crate::ranker::StrategyKind;
use crate::validation::ValidationPolicy;
use anyhow::{Context, Result};
use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Ranking behaviour
    pub ranking: RankingConfig,
    /// Terminal output
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ranking: RankingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Ranking settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Which ordering picks the best route
    pub strategy: StrategyKind,
    /// Whether bad values are rejected before ranking
    pub validation: ValidationPolicy,
}

/// Output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Highlight the recommended route with colour
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Look up a dotted key such as `ranking.strategy`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let root = toml::Value::try_from(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&root, |node, part| node.get(part))?;
        Some(match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Default location of the configuration file, if the platform has one
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("za", "routeify", "routeify")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from disk and environment, or use defaults.
///
/// An explicit `path` must exist; the platform default file is optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();
    let mut builder = config::Config::builder()
        .set_default("log_level", defaults.log_level.clone())?
        .set_default("ranking.strategy", defaults.ranking.strategy.to_string())?
        .set_default("ranking.validation", defaults.ranking.validation.to_string())?
        .set_default("output.color", defaults.output.color)?;

    match path {
        Some(p) => {
            tracing::debug!("Loading configuration from {}", p.display());
            builder = builder.add_source(File::from(p).format(FileFormat::Toml).required(true));
        }
        None => {
            if let Some(p) = default_config_path() {
                tracing::debug!("Looking for configuration at {}", p.display());
                builder = builder.add_source(File::from(p).format(FileFormat::Toml).required(false));
            }
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("ROUTEIFY")
            .prefix_separator("_")
            .separator("__"),
    );

    builder
        .build()
        .context("Failed to load configuration")?
        .try_deserialize()
        .context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.ranking.strategy, StrategyKind::Fastest);
        assert_eq!(config.ranking.validation, ValidationPolicy::Permissive);
        assert!(config.output.color);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("routeify.toml");
        std::fs::write(
            &path,
            "[ranking]\nstrategy = \"shortest\"\nvalidation = \"strict\"\n\n[output]\ncolor = false\n",
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();

        assert_eq!(config.ranking.strategy, StrategyKind::Shortest);
        assert_eq!(config.ranking.validation, ValidationPolicy::Strict);
        assert!(!config.output.color);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ranking]\nstrategy = \"scenic\"\n").unwrap();

        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn test_get_dotted_key() {
        let config = Config::default();
        assert_eq!(config.get("ranking.strategy").as_deref(), Some("fastest"));
        assert_eq!(config.get("output.color").as_deref(), Some("true"));
        assert_eq!(config.get("log_level").as_deref(), Some("info"));
        assert!(config.get("ranking.nope").is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
