/// CLI configuration
use crate::error::{CliError, Result};
use maxiplay_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File read when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "maxiplay.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Snapshot used when `--catalog` is not given
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    /// List pressed items come from when `--list` is not given
    #[serde(default = "default_list")]
    pub default_list: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            snapshot: None,
            default_list: default_list(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. MAXIPLAY_PLAYBACK__SKIP_INTERVAL_SECS
        settings = settings.add_source(
            config::Environment::with_prefix("MAXIPLAY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.playback
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;

        if self.catalog.default_list.trim().is_empty() {
            return Err(CliError::Config(
                "catalog.default_list must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_list() -> String {
    "latest".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[playback]
skip_interval_secs = 15
settle_timeout_ms = 2000

[playback.engine]
wait_for_buffer = false

[catalog]
snapshot = "catalog.json"
default_list = "favorites"
"#
        )
        .unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.playback.skip_interval_secs, 15);
        assert_eq!(config.playback.settle_timeout_ms, 2000);
        assert!(!config.playback.engine.wait_for_buffer);
        assert_eq!(config.playback.engine.max_buffer_ms, 50_000);
        assert_eq!(config.catalog.snapshot, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.catalog.default_list, "favorites");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = CliConfig::load(Some(Path::new("/nonexistent/maxiplay.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_playback_values_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[playback]\nsettle_timeout_ms = 0").unwrap();

        assert!(matches!(
            CliConfig::load(Some(file.path())),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.catalog.default_list, "latest");
        assert!(config.catalog.snapshot.is_none());
        assert!(config.validate().is_ok());
    }
}
