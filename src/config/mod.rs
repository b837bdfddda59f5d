//! Configuration for wordreduce runs
//!
//! Values are layered, lowest priority first: built-in defaults, the global
//! `config.toml`, the project `wordreduce.toml`, an explicit `--config` file,
//! `WORDREDUCE_*` environment variables, and finally command-line flags.

use crate::error::{Error, Result};
use crate::mapreduce::formatter::FormatType;
use crate::mapreduce::types::DEFAULT_TOP_N;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

/// Default number of chunks the input is split into
pub const DEFAULT_CHUNK_COUNT: usize = 4;

/// Name of the per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "wordreduce.toml";

/// Get the global wordreduce directory holding `config.toml`
pub fn get_global_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "wordreduce", "wordreduce")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

fn default_max_parallel() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReduceConfig {
    /// Target number of chunks for the map phase
    pub chunk_count: usize,
    /// Number of words kept in the report's distribution
    pub top_n: usize,
    /// Maximum number of map tasks running at once
    pub max_parallel: usize,
    /// Output format for reports
    pub format: FormatType,
}

impl Default for WordReduceConfig {
    fn default() -> Self {
        Self {
            chunk_count: DEFAULT_CHUNK_COUNT,
            top_n: DEFAULT_TOP_N,
            max_parallel: default_max_parallel(),
            format: FormatType::Text,
        }
    }
}

/// One configuration layer, as read from a file; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub chunk_count: Option<usize>,
    pub top_n: Option<usize>,
    pub max_parallel: Option<usize>,
    pub format: Option<FormatType>,
}

impl WordReduceConfig {
    /// Overlay every value set in `layer`
    pub fn apply(&mut self, layer: &ConfigLayer) {
        if let Some(chunk_count) = layer.chunk_count {
            self.chunk_count = chunk_count;
        }
        if let Some(top_n) = layer.top_n {
            self.top_n = top_n;
        }
        if let Some(max_parallel) = layer.max_parallel {
            self.max_parallel = max_parallel;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
    }

    /// Overlay values from `WORDREDUCE_*` variables
    pub fn merge_env_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut layer = ConfigLayer::default();

        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                "WORDREDUCE_CHUNK_COUNT" => {
                    layer.chunk_count = Some(parse_env_number("WORDREDUCE_CHUNK_COUNT", value)?)
                }
                "WORDREDUCE_TOP_N" => layer.top_n = Some(parse_env_number("WORDREDUCE_TOP_N", value)?),
                "WORDREDUCE_MAX_PARALLEL" => {
                    layer.max_parallel = Some(parse_env_number("WORDREDUCE_MAX_PARALLEL", value)?)
                }
                "WORDREDUCE_FORMAT" => {
                    layer.format = Some(value.parse().map_err(|e| {
                        Error::Config(format!("WORDREDUCE_FORMAT: {}", e))
                    })?)
                }
                _ => {}
            }
        }

        self.apply(&layer);
        Ok(())
    }

    /// Check values that cannot be clamped into range
    ///
    /// A `chunk_count` of zero is accepted and treated as one by the splitter.
    pub fn validate(&self) -> Result<()> {
        if self.max_parallel == 0 {
            return Err(Error::Validation(
                "max_parallel must be at least 1".to_string(),
            ));
        }
        if self.top_n == 0 {
            return Err(Error::Validation("top_n must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn parse_env_number(name: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} must be a non-negative integer, got '{}'", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WordReduceConfig::default();
        assert_eq!(config.chunk_count, 4);
        assert_eq!(config.top_n, 10);
        assert!(config.max_parallel >= 1);
        assert_eq!(config.format, FormatType::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_layer_only_overrides_set_fields() {
        let mut config = WordReduceConfig::default();
        config.apply(&ConfigLayer {
            chunk_count: Some(8),
            format: Some(FormatType::Json),
            ..Default::default()
        });

        assert_eq!(config.chunk_count, 8);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.format, FormatType::Json);
    }

    #[test]
    fn test_merge_env_vars() {
        let mut config = WordReduceConfig::default();
        config
            .merge_env_vars([
                ("WORDREDUCE_CHUNK_COUNT", "6"),
                ("WORDREDUCE_MAX_PARALLEL", " 2 "),
                ("WORDREDUCE_FORMAT", "markdown"),
                ("PATH", "/usr/bin"),
            ])
            .unwrap();

        assert_eq!(config.chunk_count, 6);
        assert_eq!(config.max_parallel, 2);
        assert_eq!(config.format, FormatType::Markdown);
    }

    #[test]
    fn test_merge_env_vars_rejects_garbage() {
        let mut config = WordReduceConfig::default();
        let err = config
            .merge_env_vars([("WORDREDUCE_TOP_N", "lots")])
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("WORDREDUCE_TOP_N"));
    }

    #[test]
    fn test_validate_rejects_zero_parallelism() {
        let config = WordReduceConfig {
            max_parallel: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_zero_chunk_count_is_valid() {
        let config = WordReduceConfig {
            chunk_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layer_parses_from_toml() {
        let layer: ConfigLayer = toml::from_str("chunk_count = 3\nformat = \"json-pretty\"\n").unwrap();
        assert_eq!(layer.chunk_count, Some(3));
        assert_eq!(layer.format, Some(FormatType::JsonPretty));
        assert_eq!(layer.top_n, None);
    }

    #[test]
    fn test_layer_rejects_unknown_keys() {
        assert!(toml::from_str::<ConfigLayer>("chunks = 3\n").is_err());
    }
}
