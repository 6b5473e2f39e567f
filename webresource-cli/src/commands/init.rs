//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# webresource configuration

# URI of the rendered resources. Links to nested records resolve against it,
# stylesheets against its first path segment.
base_uri: http://localhost:8080/app/rest/

# Directory with the application's static files, used for inline stylesheets.
# static_root: public

types:
  - name: Person
    title: "${first} ${last}"
    stylesheets:
      - path: css/person.css
    fields:
      - field: id
        id: true
      - field: first
        link_text: true
      - field: last
        link_text: true
      - field: born
        kind: date
"#;

/// Initialize a new webresource project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;

    println!("✓ webresource initialized in {:?}", root);
    println!("  - Edit webresource.yml to set the base URI and describe your types");
    println!("  - Render data files with `webresource render <file>`");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join("webresource.yml");
    if config_path.exists() {
        println!("webresource.yml already exists at {:?}", config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}
