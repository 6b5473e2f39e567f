//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;
use webresource_meta::TypeDescriptor;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid base URI '{uri}': {source}")]
    InvalidBaseUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
}

/// Render configuration matching the webresource.yml schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// URI of the rendered resources; links and stylesheets resolve against it.
    #[serde(default = "default_base_uri")]
    pub base_uri: String,

    /// Directory serving the application's static files, used to inline
    /// stylesheets.
    #[serde(default)]
    pub static_root: Option<PathBuf>,

    #[serde(default)]
    pub types: Vec<TypeDescriptor>,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

pub(crate) fn default_base_uri() -> String {
    String::from("http://localhost:8080/")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_uri: default_base_uri(),
            static_root: None,
            types: Vec::new(),
            config_path: None,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_yaml::from_str(yaml)?;
        config.base_url()?;
        Ok(config)
    }

    /// The base URI, parsed
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_uri).map_err(|source| ConfigError::InvalidBaseUri {
            uri: self.base_uri.clone(),
            source,
        })
    }

    /// Get the static root directory, resolved relative to config file
    pub fn static_root_dir(&self) -> Option<PathBuf> {
        self.static_root.as_ref().map(|p| self.resolve_path(p))
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(parent) = self.config_path.as_deref().and_then(Path::parent) {
            parent.join(path)
        } else {
            path.to_path_buf()
        }
    }
}
