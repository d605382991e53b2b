//! # search-resource
//!
//! Parses and validates the `[collection]/[kind]` resource string that points a
//! search-backend connector at its target, and derives the endpoint paths the
//! connector's requests are built from.
//!
//! ## Features
//!
//! - **Validation**: Rejects malformed resources and uppercase collection names
//! - **Placeholders**: `{...}` spans pass through untouched and switch the
//!   bulk/refresh paths to their generic form
//! - **Legacy Inline Queries**: `collection/kind/x?q=...` is split into a
//!   resource and a query for the caller to persist
//! - **Settings**: Per-mode resource keys loaded from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use search_resource::{Mode, Resource, ResourceSettings};
//!
//! let mut settings = ResourceSettings::new("logs/event")
//!     .with_resource_for(Mode::Write, "archive-{@timestamp}/event");
//!
//! let read = Resource::from_settings(&mut settings, Mode::Read).unwrap();
//! assert_eq!(read.bulk(), "logs/event/_bulk");
//! assert_eq!(read.mapping(), "logs/event/_mapping");
//!
//! let write = Resource::from_settings(&mut settings, Mode::Write).unwrap();
//! assert_eq!(write.bulk(), "/_bulk");
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Resource string sanitization and placeholder helpers
pub mod sanitize;

/// Resource parsing and validation
pub mod resource;

/// Resource settings loading
pub mod settings;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use resource::{extract_inline_query, InlineQuery, ParsedResource, Resource};
pub use settings::{load_settings, load_settings_from_json, load_settings_from_str, ResourceSettings};
pub use types::{LogLevel, Mode};
