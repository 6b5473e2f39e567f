use thiserror::Error;
use webresource_meta::MetaError;

/// Errors raised while rendering a document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write output")]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Meta(#[from] MetaError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("Failed to read resource {uri}: {source}")]
    Resource {
        uri: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No loader serves resource {0}")]
    UnservedResource(String),

    #[error("Decorator failed: {0}")]
    Decorator(String),
}

impl RenderError {
    pub(crate) fn invalid_uri(uri: impl Into<String>, reason: impl ToString) -> Self {
        RenderError::InvalidUri {
            uri: uri.into(),
            reason: reason.to_string(),
        }
    }

    /// The type name of this error, as shown in the diagnostic comment of a
    /// document whose head or body failed.
    pub fn type_name(&self) -> &'static str {
        match self {
            RenderError::Fmt(_) => "RenderError::Fmt",
            RenderError::Io(_) => "RenderError::Io",
            RenderError::Meta(_) => "RenderError::Meta",
            RenderError::Url(_) => "RenderError::Url",
            RenderError::InvalidUri { .. } => "RenderError::InvalidUri",
            RenderError::Resource { .. } => "RenderError::Resource",
            RenderError::UnservedResource(_) => "RenderError::UnservedResource",
            RenderError::Decorator(_) => "RenderError::Decorator",
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
