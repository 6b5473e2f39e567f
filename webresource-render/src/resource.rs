//! Loading of resources that are inlined into documents, i.e. stylesheets.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::error::{RenderError, Result};

/// Reads the contents of a resolved resource URI.
pub trait ResourceLoader: Send + Sync {
    fn load(&self, uri: &Url) -> Result<String>;
}

/// Loads `file:` URIs from the file system, and http(s) URIs below the
/// application base from a static root directory.
#[derive(Debug, Clone, Default)]
pub struct FsResourceLoader {
    served: Option<Served>,
}

#[derive(Debug, Clone)]
struct Served {
    application: Url,
    root: PathBuf,
}

impl FsResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve URIs below `application` from files below `root`.
    pub fn with_static_root(mut self, application: Url, root: impl Into<PathBuf>) -> Self {
        self.served = Some(Served {
            application,
            root: root.into(),
        });
        self
    }

    fn path_of(&self, uri: &Url) -> Result<PathBuf> {
        if uri.scheme() == "file" {
            return uri
                .to_file_path()
                .map_err(|()| RenderError::invalid_uri(uri.as_str(), "not a local file"));
        }
        self.served
            .as_ref()
            .and_then(|served| served.path_of(uri))
            .ok_or_else(|| RenderError::UnservedResource(uri.to_string()))
    }
}

impl Served {
    fn path_of(&self, uri: &Url) -> Option<PathBuf> {
        if uri.origin() != self.application.origin() {
            return None;
        }
        let relative = uri.path().strip_prefix(self.application.path())?;
        let mut path = self.root.clone();
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            if segment == ".." {
                return None;
            }
            path.push(segment);
        }
        Some(path)
    }
}

impl ResourceLoader for FsResourceLoader {
    fn load(&self, uri: &Url) -> Result<String> {
        let path = self.path_of(uri)?;
        debug!(%uri, path = %path.display(), "Loading resource");
        read(uri, &path)
    }
}

fn read(uri: &Url, path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RenderError::Resource {
        uri: uri.to_string(),
        source,
    })
}
