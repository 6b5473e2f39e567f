use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const CONFIG: &str = r#"
base_uri: http://example.com/shop/rest/
types:
  - name: Customer
    fields:
      - field: first
        title: true
      - field: last
        title: true
  - name: Address
    fields:
      - field: code
        business_key: true
"#;

const CUSTOMER: &str = r#"{
  "$type": "Customer",
  "first": "Jane",
  "last": "Doe",
  "address": { "$type": "Address", "code": "A-7", "city": "Springfield" }
}"#;

#[test]
fn render_json_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("webresource.yml"), CONFIG)?;
    fs::write(dir.path().join("customer.json"), CUSTOMER)?;

    #[allow(deprecated)]
    Command::cargo_bin("webresource")?
        .current_dir(dir.path())
        .args(["render", "customer.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<html><head><title>Jane Doe</title></head><body><form>",
        ))
        .stdout(predicate::str::contains(
            "<a href='http://example.com/shop/rest/addresss/A-7.html' id='address-0-href' class='addresss'>A-7-Springfield</a>",
        ))
        .stdout(predicate::str::ends_with("</form></body></html>"));

    Ok(())
}

#[test]
fn render_yaml_to_file_with_base_uri_override() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("list.yaml"),
        "- $type: Address\n  code: A-7\n- $type: Address\n  code: B-2\n",
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("webresource")?
        .current_dir(dir.path())
        .args([
            "render",
            "list.yaml",
            "--output",
            "list.html",
            "--base-uri",
            "http://localhost:9090/",
        ])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("list.html"))?;
    assert!(html.starts_with("<html><head><title>List of addresss</title></head><body><table>"));
    assert!(html.contains("<th>code</th>"));
    assert!(html.contains("value='B-2'"));
    Ok(())
}

#[test]
fn render_text_date_with_declared_kind() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("webresource.yml"),
        "types:\n  - name: Person\n    fields:\n      - field: born\n        kind: date\n",
    )?;
    fs::write(dir.path().join("person.yaml"), "$type: Person\nborn: 2024-01-31\n")?;

    #[allow(deprecated)]
    Command::cargo_bin("webresource")?
        .current_dir(dir.path())
        .args(["render", "person.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<input id='born-0' class='date' type='date' value='2024-01-31' readonly/>",
        ));

    Ok(())
}

#[test]
fn render_failure_writes_partial_document() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("webresource.yml"),
        r#"
types:
  - name: Customer
    stylesheets:
      - path: css/missing.css
        inline: true
"#,
    )?;
    fs::write(dir.path().join("customer.json"), CUSTOMER)?;

    #[allow(deprecated)]
    Command::cargo_bin("webresource")?
        .current_dir(dir.path())
        .args(["render", "customer.json"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with(
            "<html><head></head>error writing head</html><!-- ",
        ))
        .stderr(predicate::str::contains("Failed to render"));

    Ok(())
}

#[test]
fn describe_prints_classification() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("webresource.yml"), CONFIG)?;
    fs::write(dir.path().join("customer.json"), CUSTOMER)?;

    #[allow(deprecated)]
    Command::cargo_bin("webresource")?
        .current_dir(dir.path())
        .args(["describe", "customer.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Pojo[Customer]\n"))
        .stdout(predicate::str::contains("  first: Simple[Jane] (title)\n"))
        .stdout(predicate::str::contains("    code: Simple[A-7] (business-key)\n"));

    Ok(())
}

#[test]
fn init_writes_config_once() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("webresource")?
        .current_dir(dir.path())
        .args(["init", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join("site/webresource.yml").exists());

    #[allow(deprecated)]
    Command::cargo_bin("webresource")?
        .current_dir(dir.path())
        .args(["init", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    Ok(())
}
