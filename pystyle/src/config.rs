use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, DEFAULT_EXTENSIONS, PYPROJECT_FILENAME};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for pystyle.
    pub pystyle: PyStyleConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for pystyle.
pub struct PyStyleConfig {
    /// List of folders to exclude.
    pub exclude_folders: Option<Vec<String>>,
    /// List of folders to include even when excluded by default.
    pub include_folders: Option<Vec<String>>,
    /// File extensions (without the dot) selected for styling.
    pub extensions: Option<Vec<String>>,
}

impl PyStyleConfig {
    /// Extensions to style, falling back to the built-in defaults.
    #[must_use]
    pub fn extensions_or_default(&self) -> Vec<String> {
        self.extensions.clone().unwrap_or_else(|| {
            DEFAULT_EXTENSIONS
                .iter()
                .map(|&ext| ext.to_owned())
                .collect()
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
struct PyProject {
    tool: ToolConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct ToolConfig {
    pystyle: PyStyleConfig,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// Unreadable or unparsable files are skipped, so a broken config never
    /// blocks styling; the defaults apply instead.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let pystyle_toml = current.join(CONFIG_FILENAME);
            if let Ok(content) = fs::read_to_string(&pystyle_toml) {
                if let Ok(mut config) = toml::from_str::<Config>(&content) {
                    config.config_file_path = Some(pystyle_toml);
                    return config;
                }
            }

            let pyproject_toml = current.join(PYPROJECT_FILENAME);
            if let Ok(content) = fs::read_to_string(&pyproject_toml) {
                if let Ok(pyproject) = toml::from_str::<PyProject>(&content) {
                    return Config {
                        pystyle: pyproject.tool.pystyle,
                        config_file_path: Some(pyproject_toml),
                    };
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}
