//! Loading of data files and configuration.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::path::Path;
use webresource_meta::Value;
use webresource_render::RenderConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Guess the format from a file extension; anything unknown is JSON.
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml" | "yaml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

/// Parse a data file into a value.
///
/// Objects become maps, unless they have a `$type` member, which makes them
/// records of that type. Strings `$type:Name` become types.
pub fn load_value(path: &Path, format: Option<InputFormat>) -> Result<Value> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let format = format.unwrap_or_else(|| InputFormat::of(path));
    tracing::debug!(?format, "Parsing {:?}", path);
    let value = match format {
        InputFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON in {:?}", path))?,
        InputFormat::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML in {:?}", path))?,
    };
    Ok(value)
}

/// Load the configuration; a missing file means defaults.
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    if !path.exists() {
        tracing::debug!("No config at {:?}, using defaults", path);
        return Ok(RenderConfig::default());
    }
    tracing::info!("Loading config from {:?}", path);
    RenderConfig::from_file(path).context("Failed to load configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use webresource_meta::Record;

    #[test]
    fn test_format_of_extension() {
        assert_eq!(InputFormat::of(Path::new("data.yml")), InputFormat::Yaml);
        assert_eq!(InputFormat::of(Path::new("data.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::of(Path::new("data.json")), InputFormat::Json);
        assert_eq!(InputFormat::of(Path::new("data")), InputFormat::Json);
    }

    #[test]
    fn test_load_yaml_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pojo.yml");
        fs::write(&path, "$type: Pojo\nstr: dummy\n").unwrap();

        let value = load_value(&path, None).unwrap();

        assert_eq!(value, Value::from(Record::new("Pojo").with("str", "dummy")));
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();

        let config = load_config(&dir.path().join("webresource.yml")).unwrap();

        assert_eq!(config, RenderConfig::default());
    }
}
