use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `lfx_pager=debug`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller does not pass one.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// Choices for the page-size selector. Fewer than two hides the selector.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_page_param")]
    pub page_param: String,
    #[serde(default = "default_page_size_param")]
    pub page_size_param: String,
    #[serde(default)]
    pub labels: Labels,
}

/// Visible text of the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Labels {
    #[serde(default = "default_previous_label")]
    pub previous: String,
    #[serde(default = "default_next_label")]
    pub next: String,
    #[serde(default = "default_of_label")]
    pub of: String,
    #[serde(default = "default_per_page_label")]
    pub per_page: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_param: default_page_param(),
            page_size_param: default_page_size_param(),
            labels: Labels::default(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            previous: default_previous_label(),
            next: default_next_label(),
            of: default_of_label(),
            per_page: default_per_page_label(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let pagination = &self.pagination;
        if pagination.page_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "pagination.page_size must be positive, got {}",
                pagination.page_size
            )));
        }
        let mut seen = HashSet::new();
        for &size in &pagination.page_size_options {
            if size <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "pagination.page_size_options must be positive, got {size}"
                )));
            }
            if !seen.insert(size) {
                return Err(ConfigError::Invalid(format!(
                    "pagination.page_size_options contains {size} twice"
                )));
            }
        }
        if self.render.page_param.is_empty() || self.render.page_size_param.is_empty() {
            return Err(ConfigError::Invalid(
                "render.page_param and render.page_size_param must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> i64 {
    10
}

fn default_page_size_options() -> Vec<i64> {
    vec![10, 20, 50]
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_page_size_param() -> String {
    "page_size".to_string()
}

fn default_previous_label() -> String {
    "Previous".to_string()
}

fn default_next_label() -> String {
    "Next".to_string()
}

fn default_of_label() -> String {
    "of".to_string()
}

fn default_per_page_label() -> String {
    "Rows per page".to_string()
}
