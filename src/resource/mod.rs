//! Resource module
//!
//! Turns a user-supplied `[collection]/[kind]` string into a validated
//! [`Resource`] whose path fragments are safe to interpolate into requests.
//!
//! # Overview
//!
//! The resource module provides:
//! - `Resource` - Immutable, validated collection/kind descriptor
//! - `ParsedResource` - A resource plus any inline query that was extracted
//! - `InlineQuery` - The rewritten resource string and the query split off it
//!
//! # Example
//!
//! ```rust
//! use search_resource::Resource;
//!
//! let parsed = Resource::parse("logs/event", None).unwrap();
//! assert_eq!(parsed.resource.bulk(), "logs/event/_bulk");
//! assert_eq!(parsed.resource.refresh(), "logs/_refresh");
//! ```

mod parser;
mod types;

pub use parser::extract_inline_query;
pub use types::{InlineQuery, ParsedResource, Resource};
