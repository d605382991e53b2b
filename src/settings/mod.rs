//! Settings module
//!
//! Resource-related settings as supplied by the surrounding job, loaded from
//! YAML or JSON.
//!
//! # Overview
//!
//! The settings module provides:
//! - `ResourceSettings` - Raw resource strings per mode and the external query
//! - YAML/JSON loading with validation

mod parser;
mod types;

pub use parser::{load_settings, load_settings_from_json, load_settings_from_str};
pub use types::{ResourceSettings, QUERY_KEY, RESOURCE_KEY, RESOURCE_READ_KEY, RESOURCE_WRITE_KEY};
