//! Configuration loaded from `promptide.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, InterfaceType};

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "promptide.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptideConfig {
    /// Capability catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Editing defaults.
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// External catalog YAML file. The embedded catalog is used when absent.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// Interface used by `new` when none is given.
    #[serde(default = "default_interface")]
    pub default_interface: InterfaceType,
    /// String parameters whose max length exceeds this are edited as multi-line.
    #[serde(default = "default_multi_line_threshold")]
    pub multi_line_threshold: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_interface: default_interface(),
            multi_line_threshold: default_multi_line_threshold(),
        }
    }
}

fn default_interface() -> InterfaceType {
    InterfaceType::Completion
}

fn default_multi_line_threshold() -> usize {
    100
}

impl PromptideConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `promptide.toml` in `base_dir`
    /// is used if present and defaults apply otherwise.
    pub fn load(explicit: Option<&Path>, base_dir: &Path) -> Result<Self, AppError> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(AppError::config_error(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let path = base_dir.join(CONFIG_FILE);
                if !path.is_file() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::parse(&content)?;
        if let (Some(catalog), Some(dir)) = (&config.catalog.path, path.parent()) {
            if catalog.is_relative() {
                config.catalog.path = Some(dir.join(catalog));
            }
        }
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.editor.multi_line_threshold == 0 {
            return Err(AppError::config_error(
                "editor.multi_line_threshold must be greater than 0",
            ));
        }
        if self.catalog.path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(AppError::config_error("catalog.path must not be empty"));
        }
        Ok(())
    }
}
