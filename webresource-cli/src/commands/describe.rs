//! Describe command: print how a value is classified for rendering.

use crate::input::{load_config, load_value, InputFormat};
use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;
use webresource_meta::{Item, ItemKind, Registry, Trait, Value};

/// Print the classification tree of a data file.
pub fn describe_file(config_path: &Path, input: &Path, format: Option<InputFormat>) -> Result<()> {
    let config = load_config(config_path)?;
    let registry = Registry::from_descriptors(config.types.iter().cloned())
        .context("Invalid type descriptors")?;
    let value = load_value(input, format)?;

    print!("{}", describe_value(&value, &registry)?);
    Ok(())
}

/// One line per item: its kind, and for traits their name and annotations.
pub fn describe_value(value: &Value, registry: &Registry) -> Result<String> {
    let mut out = String::new();
    let item = Item::new(value, registry);
    writeln!(out, "{item:?}")?;
    describe_children(item, 1, &mut out)?;
    Ok(out)
}

fn describe_children(item: Item<'_>, depth: usize, out: &mut String) -> Result<()> {
    let indent = "  ".repeat(depth);
    match item.kind() {
        ItemKind::Simple => {}
        ItemKind::List => {
            for (i, element) in item.list().into_iter().enumerate() {
                writeln!(out, "{indent}[{i}]: {element:?}")?;
                describe_children(element, depth + 1, out)?;
            }
        }
        ItemKind::Map | ItemKind::Pojo | ItemKind::Type => {
            for t in item.traits()? {
                let child = item.read(&t);
                writeln!(out, "{indent}{}: {child:?}{}", t.name(), markers(&t))?;
                describe_children(child, depth + 1, out)?;
            }
        }
    }
    Ok(())
}

fn markers(t: &Trait<'_>) -> String {
    let mut markers = Vec::new();
    if t.is_title() {
        markers.push("title".to_string());
    }
    if t.is_link_text() {
        markers.push("link-text".to_string());
    }
    if t.is_business_key() {
        markers.push("business-key".to_string());
    }
    if t.is_id() {
        markers.push("id".to_string());
    }
    if let Some(input_type) = t.input_type() {
        markers.push(format!("input={input_type}"));
    }
    if markers.is_empty() {
        String::new()
    } else {
        format!(" ({})", markers.join(", "))
    }
}
