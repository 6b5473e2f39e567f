//! Resolution of links and stylesheet paths against the base URI.

use tracing::trace;
use url::{ParseError, Url};

use crate::error::{RenderError, Result};

/// Resolves URIs relative to the base URI of the rendered resource.
///
/// Two modes:
/// * `resolve_app`: relative to the application, i.e. the base truncated to
///   its first path segment. Stylesheets use this mode.
/// * `resolve_base`: the plain concatenation of the full base and a path.
///   Links to other resources use this mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriResolver {
    base: Url,
    application: Url,
}

impl UriResolver {
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| RenderError::invalid_uri(base, e))?;
        if base.cannot_be_a_base() {
            return Err(RenderError::invalid_uri(
                base.as_str(),
                "not a hierarchical URI",
            ));
        }
        let application = application_base(&base);
        Ok(Self { base, application })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// The base URI truncated to its first path segment, ending with `/`.
    pub fn application(&self) -> &Url {
        &self.application
    }

    pub fn resolve_app(&self, uri: &str) -> Result<Url> {
        let resolved = match Url::parse(uri) {
            Ok(absolute) => absolute,
            Err(ParseError::RelativeUrlWithoutBase) => {
                let path = uri.split(['?', '#']).next().unwrap_or_default();
                if path.is_empty() {
                    return Err(RenderError::invalid_uri(uri, "relative URI without a path"));
                }
                if path.starts_with('/') {
                    self.base.join(uri)?
                } else {
                    self.application.join(uri)?
                }
            }
            Err(e) => return Err(RenderError::invalid_uri(uri, e)),
        };
        trace!(uri, %resolved, "Resolved against application");
        Ok(resolved)
    }

    pub fn resolve_base(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn application_base(base: &Url) -> Url {
    let first = base
        .path_segments()
        .and_then(|mut segments| segments.next())
        .filter(|segment| !segment.is_empty());
    let mut application = base.clone();
    match first {
        Some(segment) => application.set_path(&format!("/{segment}/")),
        None => application.set_path("/"),
    }
    application.set_query(None);
    application.set_fragment(None);
    application
}
