//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    error::{ConfigError, ConfigResult},
    types::TaskboardConfig,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const ENV_PREFIX: &str = "TASKBOARD_";

/// Loads [`TaskboardConfig`] from defaults, discovered files, an optional
/// explicit file and the environment. Nothing is cached.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
    explicit_file: Option<PathBuf>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific discovery (tests point it at temp directories)
    pub fn with_discovery(mut self, discovery: FileDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Merge one more file after the discovered ones
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    pub fn load(&self) -> ConfigResult<TaskboardConfig> {
        let config: TaskboardConfig = self.build_figment()?.extract()?;
        if config.log.level.trim().is_empty() {
            return Err(ConfigError::invalid_value("log.level", "must not be empty"));
        }
        debug!(
            default_ms = config.latency.default_ms,
            log_level = %config.log.level,
            "Loaded taskboard configuration"
        );
        Ok(config)
    }

    /// defaults → discovered files → explicit file → environment
    fn build_figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(TaskboardConfig::default()));

        for file in self.discovery.discover_all() {
            trace!("Merging config file: {}", file.path.display());
            figment = figment.merge(Self::file_provider(&file));
        }

        if let Some(path) = &self.explicit_file {
            figment = figment.merge(Self::explicit_provider(path)?);
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn file_provider(file: &ConfigFile) -> Figment {
        let path = &file.path;
        match file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }

    fn explicit_provider(path: &Path) -> ConfigResult<Figment> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let format =
            ConfigFormat::from_extension(ext).ok_or_else(|| ConfigError::UnsupportedFormat {
                format: ext.to_string(),
            })?;

        Ok(Self::file_provider(&ConfigFile::new(
            path.to_path_buf(),
            format,
            crate::ConfigScope::Project,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn isolated(project: &TempDir) -> ConfigProvider {
        let empty_global = project.path().join("no-global");
        ConfigProvider::new().with_discovery(FileDiscovery::with_directories(
            Some(project.path().to_path_buf()),
            Some(empty_global),
        ))
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let temp = TempDir::new().unwrap();
        let config = isolated(&temp).load().unwrap();
        assert_eq!(config, TaskboardConfig::default());
    }

    #[test]
    #[serial]
    fn test_project_toml_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("taskboard.toml"),
            "[latency]\ndefault_ms = 0\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = isolated(&temp).load().unwrap();
        assert_eq!(config.latency.default_ms, 0);
        assert_eq!(config.latency.login_ms, 800);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("taskboard.yaml"),
            "latency:\n  default_ms: 10\n",
        )
        .unwrap();

        std::env::set_var("TASKBOARD_LATENCY__DEFAULT_MS", "42");
        let config = isolated(&temp).load();
        std::env::remove_var("TASKBOARD_LATENCY__DEFAULT_MS");

        assert_eq!(config.unwrap().latency.default_ms, 42);
    }

    #[test]
    #[serial]
    fn test_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.json");
        fs::write(&path, r#"{"latency": {"assist_ms": 1}}"#).unwrap();

        let config = isolated(&temp).with_file(&path).load().unwrap();
        assert_eq!(config.latency.assist_ms, 1);
    }

    #[test]
    #[serial]
    fn test_empty_log_level_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("taskboard.toml"), "[log]\nlevel = \"  \"\n").unwrap();
        let result = isolated(&temp).load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    #[serial]
    fn test_explicit_file_missing() {
        let temp = TempDir::new().unwrap();
        let result = isolated(&temp).with_file(temp.path().join("absent.toml")).load();
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    #[serial]
    fn test_explicit_file_unsupported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        fs::write(&path, "x=1").unwrap();
        let result = isolated(&temp).with_file(&path).load();
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }
}
