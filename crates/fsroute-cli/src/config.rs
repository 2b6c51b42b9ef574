// File: src/config.rs
// Purpose: Configuration parsing from fsroute.toml

use anyhow::{Context, Result};
use fsroute::{Environment, RouteTable, TableBuilder, DEFAULT_EXTENSION, DEFAULT_ROOT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the project directory
pub const CONFIG_FILE: &str = "fsroute.toml";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: Option<String>,

    /// Prefix the application is mounted under (e.g. "my-site")
    #[serde(default)]
    pub base_path: Option<String>,

    #[serde(default)]
    pub environment: Environment,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Routes root, relative to the project directory (default: "src/app")
    #[serde(default = "default_root")]
    pub root: String,

    /// Content-file extension (default: "php")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// files-list JSON document; the routes root is scanned when absent
    #[serde(default)]
    pub files_list: Option<PathBuf>,
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            files_list: None,
        }
    }
}

impl Config {
    /// Load configuration from fsroute.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// `APP_ENV` wins over the configured environment
    pub fn with_env_override(mut self, app_env: Option<&str>) -> Self {
        if let Some(name) = app_env.filter(|name| !name.trim().is_empty()) {
            self.project.environment = Environment::from_name(name);
        }
        self
    }

    pub fn table_builder(&self) -> TableBuilder {
        RouteTable::builder()
            .root(&self.routing.root)
            .extension(&self.routing.extension)
    }

    /// Builds the route table from the files list, or by scanning the routes root
    pub fn load_table(&self, project_dir: &Path) -> Result<RouteTable> {
        let builder = self.table_builder();

        match &self.routing.files_list {
            Some(list) => {
                let path = project_dir.join(list);
                builder
                    .from_files_list(&path)
                    .with_context(|| format!("Failed to load files list: {:?}", path))
            }
            None => builder
                .scan(project_dir)
                .with_context(|| format!("Failed to scan routes in {:?}", project_dir)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.routing.root, "src/app");
        assert_eq!(config.routing.extension, "php");
        assert_eq!(config.routing.files_list, None);
        assert_eq!(config.project.environment, Environment::Development);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.routing.root, "src/app");
        assert!(config.project.base_path.is_none());
    }

    #[test]
    fn test_custom_routing() {
        let toml = r#"
            [project]
            name = "my-site"
            base_path = "my-site"
            environment = "production"

            [routing]
            root = "app"
            extension = "rhtml"
            files_list = "settings/files-list.json"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.project.name.as_deref(), Some("my-site"));
        assert_eq!(config.project.environment, Environment::Production);
        assert_eq!(config.routing.root, "app");
        assert_eq!(config.routing.extension, "rhtml");
        assert_eq!(
            config.routing.files_list,
            Some(PathBuf::from("settings/files-list.json"))
        );
    }

    #[test]
    fn test_env_override() {
        let config = Config::default().with_env_override(Some("production"));
        assert_eq!(config.project.environment, Environment::Production);

        let config = config.with_env_override(Some(""));
        assert_eq!(config.project.environment, Environment::Production);

        let config = config.with_env_override(None);
        assert_eq!(config.project.environment, Environment::Production);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.routing.root, "src/app");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[routing\nroot = ").unwrap();

        let error = Config::load(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_table_from_files_list() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("settings")).unwrap();
        fs::write(
            dir.path().join("settings/files-list.json"),
            r#"["./src/app/index.php", "./src/app/about/route.php"]"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.routing.files_list = Some(PathBuf::from("settings/files-list.json"));

        let table = config.load_table(dir.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_table_missing_root() {
        let dir = TempDir::new().unwrap();
        let error = Config::default().load_table(dir.path()).unwrap_err();
        assert!(error.to_string().contains("Failed to scan routes"));
    }
}
