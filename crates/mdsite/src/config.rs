//! Site configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Result, SiteError};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mdsite.toml";

/// Where to read sources from and where to write the site
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory of Markdown pages
    pub content_dir: PathBuf,

    /// Directory of assets copied verbatim
    pub static_dir: PathBuf,

    /// Output directory, wiped on every build
    pub output_dir: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| SiteError::Io {
            path: config_path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content, config_path).map(Some)
    }

    fn from_toml(content: &str, config_path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| SiteError::Config {
            path: config_path.to_path_buf(),
            source,
        })
    }
}
