/// Configuration module for docalign.
///
/// Handles loading, validating, and providing default tuning values for the
/// chunker, evidence anchor, and pairing palette. The fuzzy-match constants
/// are empirical defaults, kept tunable rather than hard-coded.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::pairing::DEFAULT_PALETTE;

// ── Default value functions ──────────────────────────────────────────

fn default_chunk_words() -> usize {
    1000
}

fn default_overlap_words() -> usize {
    200
}

fn default_score_threshold() -> f64 {
    0.5
}

fn default_max_signature_tokens() -> usize {
    8
}

fn default_min_signature_tokens() -> usize {
    2
}

fn default_window_min() -> usize {
    15
}

fn default_window_max() -> usize {
    50
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

// ── Config struct ────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Words per oracle chunk.
    #[serde(default = "default_chunk_words")]
    pub chunk_words: usize,

    /// Words shared between consecutive chunks.
    #[serde(default = "default_overlap_words")]
    pub overlap_words: usize,

    /// Minimum fraction of signature tokens a window must contain.
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f64,

    /// Signature cap; bounds the worst-case fuzzy scan cost.
    #[serde(default = "default_max_signature_tokens")]
    pub max_signature_tokens: usize,

    /// Below this many signature tokens the anchor abstains.
    #[serde(default = "default_min_signature_tokens")]
    pub min_signature_tokens: usize,

    #[serde(default = "default_window_min")]
    pub window_min: usize,

    #[serde(default = "default_window_max")]
    pub window_max: usize,

    /// Highlight colors, cycled by pairing index.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_words: default_chunk_words(),
            overlap_words: default_overlap_words(),
            score_threshold: default_score_threshold(),
            max_signature_tokens: default_max_signature_tokens(),
            min_signature_tokens: default_min_signature_tokens(),
            window_min: default_window_min(),
            window_max: default_window_max(),
            palette: default_palette(),
        }
    }
}

// ── Config implementation ────────────────────────────────────────────

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// If `config_path` is empty, defaults to `"config.json"`.
    /// If the file does not exist, returns a default config and optionally
    /// generates a template file.
    pub fn load(config_path: &str) -> Result<Self> {
        let path = if config_path.is_empty() {
            "config.json"
        } else {
            config_path
        };

        if !Path::new(path).exists() {
            info!("{path} not found, using defaults");
            let cfg = Self::default();

            // Generate template only for the default path
            if path == "config.json" {
                match cfg.save(path) {
                    Ok(()) => info!("Generated config template: {path}"),
                    Err(e) => warn!("Failed to generate config template: {e}"),
                }
            }

            return Ok(cfg);
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {path}"))?;

        let cfg: Config = match serde_json::from_str(&data) {
            Ok(c) => c,
            Err(e) => {
                warn!("Invalid JSON in {path}: {e}");
                warn!("Using default configuration");
                return Ok(Self::default());
            }
        };

        info!("Loaded configuration from {path}");
        Ok(cfg)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &str) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("failed to marshal config")?;
        std::fs::write(path, data).with_context(|| format!("failed to write config: {path}"))?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.chunk_words > 0, "chunk_words must be positive");
        anyhow::ensure!(
            self.overlap_words < self.chunk_words,
            "overlap_words must be smaller than chunk_words"
        );
        anyhow::ensure!(
            self.score_threshold > 0.0 && self.score_threshold <= 1.0,
            "score_threshold must be in (0, 1]"
        );
        anyhow::ensure!(
            self.min_signature_tokens >= 1,
            "min_signature_tokens must be at least 1"
        );
        anyhow::ensure!(
            self.max_signature_tokens >= self.min_signature_tokens,
            "max_signature_tokens must not be below min_signature_tokens"
        );
        anyhow::ensure!(
            self.window_min > 0 && self.window_min <= self.window_max,
            "window bounds must satisfy 0 < window_min <= window_max"
        );
        anyhow::ensure!(
            !self.palette.is_empty(),
            "at least one palette color must be specified"
        );
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chunk_words, 1000);
        assert_eq!(config.overlap_words, 200);
        assert_eq!(config.score_threshold, 0.5);
        assert_eq!(config.max_signature_tokens, 8);
        assert_eq!(config.min_signature_tokens, 2);
        assert_eq!(config.window_min, 15);
        assert_eq!(config.window_max, 50);
        assert_eq!(config.palette.len(), 20);
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"{"chunk_words": 500, "overlap_words": 100}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.chunk_words, 500);
        assert_eq!(config.overlap_words, 100);
        // Other fields should have defaults
        assert_eq!(config.score_threshold, 0.5);
        assert_eq!(config.max_signature_tokens, 8);
    }

    #[test]
    fn test_validate_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_overlap() {
        let mut config = Config::default();
        config.overlap_words = config.chunk_words;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_threshold() {
        let mut config = Config::default();
        config.score_threshold = 0.0;
        assert!(config.validate().is_err());
        config.score_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_palette() {
        let mut config = Config::default();
        config.palette = vec![];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_window_bounds() {
        let mut config = Config::default();
        config.window_min = 60;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.chunk_words, config.chunk_words);
        assert_eq!(parsed.score_threshold, config.score_threshold);
        assert_eq!(parsed.palette, config.palette);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.chunk_words, 1000);
        // No template generated for non-default paths
        assert!(!path.exists());
    }

    #[test]
    fn test_load_invalid_json_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.chunk_words, 1000);
    }
}
