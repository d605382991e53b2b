//! Integration tests
//!
//! Tests the full flow: settings file → resource resolution → derived paths,
//! plus the command-line binary.

use search_resource::{
    load_settings, load_settings_from_str, Error, Mode, Resource, ResourceSettings,
};
use serde_json::Value;
use std::path::Path;
use std::process::Command;

// ============================================================================
// Library Flow Tests
// ============================================================================

#[test]
fn test_read_and_write_resources_from_yaml() {
    let yaml = r#"
es.resource.read: "logs-2024.01/event"
es.resource.write: "logs-{@timestamp:yyyy.MM}/event"
"#;

    let mut settings = load_settings_from_str(yaml).unwrap();

    let read = Resource::from_settings(&mut settings, Mode::Read).unwrap();
    assert_eq!(read.collection(), "logs-2024.01");
    assert_eq!(read.bulk(), "logs-2024.01/event/_bulk");
    assert_eq!(read.refresh(), "logs-2024.01/_refresh");
    assert_eq!(read.mapping(), "logs-2024.01/event/_mapping");
    assert_eq!(read.aliases(), "logs-2024.01/_aliases");

    let write = Resource::from_settings(&mut settings, Mode::Write).unwrap();
    assert_eq!(write.collection(), "logs-{@timestamp:yyyy.MM}");
    assert_eq!(write.bulk(), "/_bulk");
    assert_eq!(write.refresh(), "/_refresh");
}

#[test]
fn test_descriptors_are_independent_per_mode() {
    let mut settings = ResourceSettings::new("logs/event");

    let read = Resource::from_settings(&mut settings, Mode::Read).unwrap();
    let write = Resource::from_settings(&mut settings, Mode::Write).unwrap();
    assert_eq!(read, write);
    assert_eq!(settings, ResourceSettings::new("logs/event"));
}

#[test]
fn test_inline_query_rewrites_settings_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.yaml");
    std::fs::write(&path, "resource: \"twitter/tweet/_search?q=user:kimchy\"\n").unwrap();

    let mut settings = load_settings(&path).unwrap();
    let resource = Resource::from_settings(&mut settings, Mode::Read).unwrap();

    assert_eq!(resource.combined(), "twitter/tweet");
    assert_eq!(settings.resource.as_deref(), Some("twitter/tweet"));
    assert_eq!(settings.query.as_deref(), Some("?q=user:kimchy"));
}

#[test]
fn test_invalid_settings_surface_typed_errors() {
    let mut upper = ResourceSettings::new("Twitter/tweet");
    assert!(matches!(
        Resource::from_settings(&mut upper, Mode::Read),
        Err(Error::InvalidCollectionCase { .. })
    ));

    let mut conflict = ResourceSettings::new("twitter/tweet/_search?q=a").with_query("?q=b");
    assert!(matches!(
        Resource::from_settings(&mut conflict, Mode::Write),
        Err(Error::ConflictingQuerySpecification { .. })
    ));

    let mut malformed = ResourceSettings::new("twitter");
    let err = Resource::from_settings(&mut malformed, Mode::Read).unwrap_err();
    assert!(err.is_resource_error());
    assert!(err.to_string().contains("expecting [collection]/[kind]"));
}

// ============================================================================
// CLI Tests
// ============================================================================

fn run_cli(args: &[&str]) -> (bool, Vec<Value>, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_search-resource"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let messages = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), messages, stderr)
}

#[test]
fn test_cli_parse() {
    let (ok, messages, _) = run_cli(&["parse", "abc/def"]);
    assert!(ok);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["type"], "RESOURCE");
    assert_eq!(messages[0]["resource"]["bulk"], "abc/def/_bulk");
    assert_eq!(messages[0]["resource"]["refresh"], "abc/_refresh");
}

#[test]
fn test_cli_parse_failure_exits_non_zero() {
    let (ok, messages, stderr) = run_cli(&["parse", "ABC/def"]);
    assert!(!ok);
    assert!(messages.is_empty());
    assert!(stderr.contains("Error: Invalid collection [ABC] - needs to be lowercase"));
}

#[test]
fn test_cli_resolve_reports_rewritten_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.json");
    std::fs::write(
        &path,
        r#"{"es.resource": "twitter/tweet/_search?q=user:kimchy"}"#,
    )
    .unwrap();

    let (ok, messages, _) = run_cli(&["resolve", "--settings", path_str(&path), "--mode", "read"]);
    assert!(ok);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["mode"], "read");
    assert_eq!(messages[0]["key"], "resource");
    assert_eq!(messages[0]["resource"]["combined"], "twitter/tweet");
    assert_eq!(messages[1]["type"], "SETTINGS");
    assert_eq!(messages[1]["settings"]["query"], "?q=user:kimchy");
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
