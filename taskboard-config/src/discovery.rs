//! Configuration file discovery
//!
//! Looks for `taskboard.{toml,yaml,yml,json}` in the global (`~/.taskboard/`)
//! and project (`./.taskboard/`) directories.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

const DIR_NAME: &str = ".taskboard";
const FILE_NAMES: [&str; 4] = [
    "taskboard.toml",
    "taskboard.yaml",
    "taskboard.yml",
    "taskboard.json",
];

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
    /// Higher values take precedence when merged
    pub priority: u8,
}

impl ConfigFile {
    pub fn new(path: PathBuf, format: ConfigFormat, scope: ConfigScope) -> Self {
        Self {
            path,
            format,
            scope,
            priority: scope.priority(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Global,
    Project,
}

impl ConfigScope {
    pub fn priority(self) -> u8 {
        match self {
            Self::Global => 10,
            Self::Project => 20,
        }
    }
}

/// Finds configuration files; directories are resolved at discovery time
#[derive(Debug, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit directories instead of `./.taskboard` and `~/.taskboard`
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    /// All files found, lowest priority first so later merges override
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let project_dir = self
            .project_dir
            .clone()
            .or_else(|| Self::resolve_dir(std::env::current_dir().ok()));
        let global_dir = self
            .global_dir
            .clone()
            .or_else(|| Self::resolve_dir(dirs::home_dir()));

        let mut files = Vec::new();
        if let Some(dir) = &global_dir {
            files.extend(self.search_directory(dir, ConfigScope::Global));
        }
        if let Some(dir) = &project_dir {
            files.extend(self.search_directory(dir, ConfigScope::Project));
        }
        files.sort_by_key(|f| f.priority);

        debug!("Discovered {} configuration files", files.len());
        files
    }

    fn search_directory(&self, dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            trace!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .filter(|candidate| candidate.is_file())
            .filter_map(|candidate| {
                let ext = candidate.extension()?.to_str()?;
                let format = ConfigFormat::from_extension(ext)?;
                trace!("Found config: {} ({:?})", candidate.display(), format);
                Some(ConfigFile::new(candidate, format, scope))
            })
            .collect()
    }

    fn resolve_dir(base: Option<PathBuf>) -> Option<PathBuf> {
        let dir = base?.join(DIR_NAME);
        dir.is_dir().then_some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("toml"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("YML"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("Json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_scope_priority() {
        assert!(ConfigScope::Project.priority() > ConfigScope::Global.priority());
    }

    #[test]
    fn test_discover_orders_global_before_project() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(project.path().join("taskboard.yaml"), "log:\n  level: debug\n").unwrap();
        fs::write(global.path().join("taskboard.toml"), "[log]\nlevel = \"warn\"\n").unwrap();
        fs::write(global.path().join("other.toml"), "").unwrap();

        let discovery = FileDiscovery::with_directories(
            Some(project.path().to_path_buf()),
            Some(global.path().to_path_buf()),
        );
        let files = discovery.discover_all();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].scope, ConfigScope::Global);
        assert_eq!(files[0].format, ConfigFormat::Toml);
        assert_eq!(files[1].scope, ConfigScope::Project);
        assert_eq!(files[1].format, ConfigFormat::Yaml);
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let discovery = FileDiscovery::with_directories(Some(missing.clone()), Some(missing));
        assert!(discovery.discover_all().is_empty());
    }
}
