//! Settings loader
//!
//! Reads resource settings from YAML or JSON and validates them.

use crate::error::{Error, Result};
use crate::settings::types::ResourceSettings;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load settings from a file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
///
/// # Examples
///
/// ```ignore
/// let settings = load_settings("./job-settings.yaml")?;
/// ```
pub fn load_settings(path: impl AsRef<Path>) -> Result<ResourceSettings> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::config(format!(
                "Failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    debug!(path = %path.display(), json = is_json, "Loading settings");

    if is_json {
        load_settings_from_json(&content)
    } else {
        load_settings_from_str(&content)
    }
}

/// Load settings from a YAML string
pub fn load_settings_from_str(yaml: &str) -> Result<ResourceSettings> {
    let settings: ResourceSettings = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse settings YAML: {e}")))?;

    validate_settings(&settings)?;
    Ok(settings)
}

/// Load settings from a JSON string
pub fn load_settings_from_json(json: &str) -> Result<ResourceSettings> {
    let settings: ResourceSettings = serde_json::from_str(json)
        .map_err(|e| Error::config(format!("Failed to parse settings JSON: {e}")))?;

    validate_settings(&settings)?;
    Ok(settings)
}

/// Validate loaded settings
fn validate_settings(settings: &ResourceSettings) -> Result<()> {
    if !settings.has_resource() {
        return Err(Error::config(
            "Settings must define at least one of resource, resource_read or resource_write",
        ));
    }

    Ok(())
}
