use super::{get_global_config_dir, ConfigLayer, WordReduceConfig, PROJECT_CONFIG_FILE};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Resolves a [`WordReduceConfig`] from files and the environment
pub struct ConfigLoader {
    global_path: Option<PathBuf>,
    project_path: Option<PathBuf>,
    explicit_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader using the standard global and current-directory locations
    pub fn new() -> Self {
        let global_path = get_global_config_dir()
            .map(|dir| dir.join("config.toml"))
            .ok();
        let project_path = std::env::current_dir()
            .map(|dir| dir.join(PROJECT_CONFIG_FILE))
            .ok();

        Self {
            global_path,
            project_path,
            explicit_path: None,
        }
    }

    /// Loader that only reads the given locations
    pub fn with_paths(global_path: Option<PathBuf>, project_path: Option<PathBuf>) -> Self {
        Self {
            global_path,
            project_path,
            explicit_path: None,
        }
    }

    /// Add a file that must exist, applied after the global and project files
    pub fn with_explicit_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Load configuration, including `WORDREDUCE_*` variables from the process
    pub async fn load(&self) -> Result<WordReduceConfig> {
        self.load_with_env(std::env::vars()).await
    }

    /// Load configuration with an explicit set of environment variables
    pub async fn load_with_env<I, K, V>(&self, vars: I) -> Result<WordReduceConfig>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = WordReduceConfig::default();

        for path in [&self.global_path, &self.project_path].into_iter().flatten() {
            if let Some(layer) = read_optional_layer(path).await? {
                debug!("Applying configuration from {}", path.display());
                config.apply(&layer);
            }
        }

        if let Some(path) = &self.explicit_path {
            let layer = read_optional_layer(path).await?.ok_or_else(|| {
                Error::Config(format!("Config file not found: {}", path.display()))
            })?;
            debug!("Applying configuration from {}", path.display());
            config.apply(&layer);
        }

        config.merge_env_vars(vars)?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_optional_layer(path: &Path) -> Result<Option<ConfigLayer>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|source| Error::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
    let layer = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(layer))
}
