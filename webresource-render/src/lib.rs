//! # webresource-render
//!
//! HTML rendering of arbitrary values.
//!
//! A [`Renderer`] turns a [`Value`](webresource_meta::Value) into one html
//! document: records become forms, lists of records become tables, nested
//! records become links to their own resources. Links and stylesheets
//! resolve against the base URI of the rendered resource.
//!
//! ```
//! use webresource_meta::{Map, Value};
//! use webresource_render::Renderer;
//!
//! let renderer = Renderer::new("http://localhost:8080/app/").unwrap();
//! let map: Map = [("one", 111)].into_iter().collect();
//!
//! let html = renderer.render(&Value::from(map)).unwrap();
//!
//! assert!(html.starts_with("<html><head></head><body><form><div>"));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod escape;
pub mod ids;
pub mod out;
pub mod renderer;
pub mod resource;
pub mod uri;
pub mod writer;

pub use config::{ConfigError, RenderConfig};
pub use context::RenderContext;
pub use error::{RenderError, Result};
pub use out::{Attribute, HtmlOut};
pub use renderer::Renderer;
pub use resource::{FsResourceLoader, ResourceLoader};
pub use uri::UriResolver;
pub use writer::{decorator, Decorator, DocumentWriter, SectionWriter};
