//! Configuration loading using figment
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `taskboard.toml`, `taskboard.yaml`, `taskboard.yml`, `taskboard.json` in the
//!    working directory, or the single file passed with `--config`
//! 3. `TASKBOARD_` environment variables, nested keys separated by `__`
//!    (`TASKBOARD_VIEW__LIST_MARKER_PREFIX=lane-`)

use crate::cli::ViewFormat;
use crate::error::{CliError, CliResult};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taskboard_kanban::{GroupAxis, KanbanSettings};
use tracing::{debug, trace, warn};

/// File stem searched for in the working directory
pub const CONFIG_FILE_STEM: &str = "taskboard";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "TASKBOARD_";

const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Effective CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Grouping used by `view` when `--group-by` is not given
    pub group_by: GroupAxis,

    /// Output format used by `view` when `--format` is not given
    pub format: ViewFormat,

    /// Settings handed to the engine
    pub view: KanbanSettings,
}

/// Builds a [`CliConfig`] from defaults, files and the environment.
///
/// Nothing is cached; every call to [`ConfigProvider::load`] reads the sources
/// again.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    dir: PathBuf,
    explicit: Option<PathBuf>,
}

impl ConfigProvider {
    /// Discover config files in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            explicit: None,
        }
    }

    /// Use exactly this file instead of discovering one
    pub fn with_file(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn load(&self) -> CliResult<CliConfig> {
        let config: CliConfig = self.build_figment()?.extract()?;
        debug!(
            group_by = %config.group_by,
            format = ?config.format,
            categories = config.view.categories.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    fn build_figment(&self) -> CliResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(CliConfig::default()));
        for path in self.config_files()? {
            trace!(path = %path.display(), "merging config file");
            figment = figment.merge(file_provider(&path)?);
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn config_files(&self) -> CliResult<Vec<PathBuf>> {
        if let Some(path) = &self.explicit {
            if !path.is_file() {
                return Err(CliError::Read {
                    path: path.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "configuration file does not exist",
                    ),
                });
            }
            return Ok(vec![path.clone()]);
        }

        let found: Vec<PathBuf> = CONFIG_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", CONFIG_FILE_STEM, ext)))
            .filter(|path| path.is_file())
            .collect();
        if found.len() > 1 {
            let names: Vec<String> = found.iter().map(|p| p.display().to_string()).collect();
            warn!(
                files = %names.join(", "),
                "several config files found; merging them, later ones win"
            );
        }
        Ok(found)
    }
}

fn file_provider(path: &Path) -> CliResult<Figment> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("toml") => Ok(Figment::from(Toml::file(path))),
        Some("yaml") | Some("yml") => Ok(Figment::from(Yaml::file(path))),
        Some("json") => Ok(Figment::from(Json::file(path))),
        _ => Err(CliError::UnsupportedFormat {
            path: path.to_path_buf(),
            expected: ".toml, .yaml, .yml, .json",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let config = ConfigProvider::new(dir.path()).load().unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.view.list_marker_prefix, "column-");
    }

    #[test]
    #[serial]
    fn test_yaml_file_in_working_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("taskboard.yaml"),
            "group_by: label\nview:\n  titles:\n    no_label: Untagged\n",
        )
        .unwrap();

        let config = ConfigProvider::new(dir.path()).load().unwrap();
        assert_eq!(config.group_by, GroupAxis::Label);
        assert_eq!(config.view.titles.no_label, "Untagged");
        assert_eq!(config.view.titles.high, "High Priority");
        assert!(config.view.categories.contains_key("ux"));
    }

    #[test]
    #[serial]
    fn test_toml_categories_extend_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("taskboard.toml"),
            "format = \"json\"\n\n[view.categories]\nops = [\"deploy\", \"infra\"]\n",
        )
        .unwrap();

        let config = ConfigProvider::new(dir.path()).load().unwrap();
        assert_eq!(config.format, ViewFormat::Json);
        assert_eq!(config.view.categories["ops"], vec!["deploy", "infra"]);
        assert!(config.view.categories.contains_key("research"));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.json"), r#"{"group_by": "label"}"#).unwrap();

        std::env::set_var("TASKBOARD_GROUP_BY", "assignee");
        std::env::set_var("TASKBOARD_VIEW__LIST_MARKER_PREFIX", "lane-");
        let config = ConfigProvider::new(dir.path()).load();
        std::env::remove_var("TASKBOARD_GROUP_BY");
        std::env::remove_var("TASKBOARD_VIEW__LIST_MARKER_PREFIX");

        let config = config.unwrap();
        assert_eq!(config.group_by, GroupAxis::Assignee);
        assert_eq!(config.view.list_marker_prefix, "lane-");
    }

    #[test]
    #[serial]
    fn test_explicit_file_replaces_discovery() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.yaml"), "group_by: label\n").unwrap();
        let explicit = dir.path().join("other.yml");
        fs::write(&explicit, "group_by: priority\n").unwrap();

        let config = ConfigProvider::new(dir.path())
            .with_file(Some(explicit))
            .load()
            .unwrap();
        assert_eq!(config.group_by, GroupAxis::Priority);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = ConfigProvider::new(dir.path())
            .with_file(Some(dir.path().join("absent.toml")))
            .load();
        assert!(matches!(result, Err(CliError::Read { .. })));
    }

    #[test]
    #[serial]
    fn test_invalid_value_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.yaml"), "group_by: colour\n").unwrap();
        let result = ConfigProvider::new(dir.path()).load();
        assert!(matches!(result, Err(CliError::Config { .. })));
    }

    #[test]
    #[serial]
    #[traced_test]
    fn test_several_config_files_are_merged_with_warning() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.toml"), "group_by = \"label\"\n").unwrap();
        fs::write(dir.path().join("taskboard.json"), r#"{"format": "yaml"}"#).unwrap();

        let config = ConfigProvider::new(dir.path()).load().unwrap();
        assert_eq!(config.group_by, GroupAxis::Label);
        assert_eq!(config.format, ViewFormat::Yaml);
        assert!(logs_contain("several config files found"));
    }

    #[test]
    #[serial]
    #[traced_test]
    fn test_single_config_file_does_not_warn() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.yaml"), "group_by: label\n").unwrap();
        ConfigProvider::new(dir.path()).load().unwrap();
        assert!(!logs_contain("several config files found"));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = file_provider(Path::new("taskboard.ini"));
        assert!(matches!(result, Err(CliError::UnsupportedFormat { .. })));
    }
}
