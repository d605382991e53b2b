//! Resource descriptor types

use serde::Serialize;
use std::fmt;

/// Generic bulk endpoint used when the target cannot be resolved up front
pub const BULK_ENDPOINT: &str = "/_bulk";

/// Generic refresh endpoint used when the collection is templated
pub const REFRESH_ENDPOINT: &str = "/_refresh";

// ============================================================================
// Resource
// ============================================================================

/// A validated `collection/kind` pair and the endpoint paths derived from it
///
/// Only constructed through [`Resource::parse`] and friends, so every
/// instance upholds:
/// - `collection` and `kind` are non-empty
/// - the literal part of `collection` is lowercase
/// - `combined == collection + "/" + kind`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Resource {
    pub(super) collection: String,
    pub(super) kind: String,
    pub(super) combined: String,
    pub(super) bulk: String,
    pub(super) refresh: String,
}

impl Resource {
    /// Build the descriptor from already validated parts
    pub(super) fn from_parts(collection: String, kind: String) -> Self {
        let combined = format!("{collection}/{kind}");

        let bulk = if combined.contains('{') {
            BULK_ENDPOINT.to_string()
        } else {
            format!("{combined}{BULK_ENDPOINT}")
        };

        let refresh = if collection.contains('{') {
            REFRESH_ENDPOINT.to_string()
        } else {
            format!("{collection}{REFRESH_ENDPOINT}")
        };

        Self {
            collection,
            kind,
            combined,
            bulk,
            refresh,
        }
    }

    /// Collection name (may contain a placeholder span)
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Document kind
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Canonical `collection/kind` address
    pub fn combined(&self) -> &str {
        &self.combined
    }

    /// Bulk write path
    pub fn bulk(&self) -> &str {
        &self.bulk
    }

    /// Refresh path
    pub fn refresh(&self) -> &str {
        &self.refresh
    }

    /// Mapping lookup path
    pub fn mapping(&self) -> String {
        format!("{}/_mapping", self.combined)
    }

    /// Alias lookup path
    pub fn aliases(&self) -> String {
        format!("{}/_aliases", self.collection)
    }

    /// Whether the address is resolved per document rather than up front
    pub fn is_templated(&self) -> bool {
        self.combined.contains('{')
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.combined)
    }
}

// ============================================================================
// Parse Output
// ============================================================================

/// Query split off a legacy `collection/kind?query` resource string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineQuery {
    /// Resource string with the query and trailing segment removed
    pub resource: String,
    /// Extracted query, including the leading `?`
    pub query: String,
}

/// Result of parsing a raw resource string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedResource {
    /// The validated descriptor
    pub resource: Resource,
    /// Present when the raw string carried an inline query that the caller
    /// must persist into its settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,
}
