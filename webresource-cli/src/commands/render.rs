//! Render command implementation.

use crate::input::{load_config, load_value, InputFormat};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use webresource_render::Renderer;

pub struct RenderOptions {
    pub output: Option<PathBuf>,
    pub format: Option<InputFormat>,
    pub base_uri: Option<String>,
}

/// Render a data file as one html document.
///
/// A failing render still writes the partial document before the error is
/// reported.
pub fn render_file(config_path: &Path, input: &Path, opts: RenderOptions) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(base_uri) = opts.base_uri {
        config.base_uri = base_uri;
    }
    let renderer = Renderer::from_config(&config).context("Failed to set up the renderer")?;
    tracing::debug!("Registered {} types", renderer.registry().len());

    let value = load_value(input, opts.format)?;

    match &opts.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
            renderer
                .write_document(&value, &mut BufWriter::new(file))
                .with_context(|| format!("Failed to render {:?}", input))?;
            println!("✓ Rendered {:?} to {:?}", input, path);
        }
        None => {
            renderer
                .write_document(&value, &mut io::stdout().lock())
                .with_context(|| format!("Failed to render {:?}", input))?;
        }
    }

    Ok(())
}
