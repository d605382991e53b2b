//! Settings types

use crate::resource::InlineQuery;
use crate::types::Mode;
use serde::{Deserialize, Serialize};

/// Settings key for the resource shared by both modes
pub const RESOURCE_KEY: &str = "resource";

/// Settings key for the read-side resource
pub const RESOURCE_READ_KEY: &str = "resource_read";

/// Settings key for the write-side resource
pub const RESOURCE_WRITE_KEY: &str = "resource_write";

/// Settings key for the externally configured query
pub const QUERY_KEY: &str = "query";

/// Resource settings
///
/// Every key also accepts its dotted form (`es.resource`, `es.query`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSettings {
    /// Resource used by both modes unless overridden
    #[serde(default, alias = "es.resource", skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// Read-side override
    #[serde(default, alias = "es.resource.read", skip_serializing_if = "Option::is_none")]
    pub resource_read: Option<String>,

    /// Write-side override
    #[serde(default, alias = "es.resource.write", skip_serializing_if = "Option::is_none")]
    pub resource_write: Option<String>,

    /// Query configured outside the resource string
    #[serde(default, alias = "es.query", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl ResourceSettings {
    /// Create settings with a single shared resource
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
            ..Default::default()
        }
    }

    /// Set the externally configured query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the mode-specific resource
    pub fn with_resource_for(mut self, mode: Mode, resource: impl Into<String>) -> Self {
        *self.mode_slot(mode) = Some(resource.into());
        self
    }

    /// Raw resource string for `mode`
    ///
    /// The mode-specific key wins when it holds text; otherwise the shared key
    /// is used.
    pub fn resource_for(&self, mode: Mode) -> Option<&str> {
        self.mode_override(mode)
            .or_else(|| non_blank(self.resource.as_deref()))
    }

    /// Name of the key `resource_for(mode)` reads from
    pub fn key_for(&self, mode: Mode) -> &'static str {
        match (mode, self.mode_override(mode)) {
            (Mode::Read, Some(_)) => RESOURCE_READ_KEY,
            (Mode::Write, Some(_)) => RESOURCE_WRITE_KEY,
            (_, None) => RESOURCE_KEY,
        }
    }

    /// Persist an extracted inline query
    ///
    /// The shortened resource replaces the key it was read from.
    pub fn apply_rewrite(&mut self, mode: Mode, inline: &InlineQuery) {
        let slot = if self.mode_override(mode).is_some() {
            self.mode_slot(mode)
        } else {
            &mut self.resource
        };
        *slot = Some(inline.resource.clone());
        self.query = Some(inline.query.clone());
    }

    /// Whether any resource key holds text
    pub fn has_resource(&self) -> bool {
        Mode::ALL.iter().any(|&mode| self.resource_for(mode).is_some())
    }

    fn mode_override(&self, mode: Mode) -> Option<&str> {
        let value = match mode {
            Mode::Read => self.resource_read.as_deref(),
            Mode::Write => self.resource_write.as_deref(),
        };
        non_blank(value)
    }

    fn mode_slot(&mut self, mode: Mode) -> &mut Option<String> {
        match mode {
            Mode::Read => &mut self.resource_read,
            Mode::Write => &mut self.resource_write,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
