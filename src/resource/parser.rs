//! Resource string parser
//!
//! Parses and validates raw `[collection]/[kind]` strings.

use crate::error::{Error, Result, EXPECTED_SHAPE};
use crate::resource::types::{InlineQuery, ParsedResource, Resource};
use crate::sanitize::{is_lower_case, sanitize_resource, strip_placeholder};
use crate::settings::{ResourceSettings, QUERY_KEY};
use crate::types::Mode;
use std::str::FromStr;
use tracing::{debug, warn};

impl Resource {
    /// Parse a raw resource string
    ///
    /// `external_query` is the query configured independently of the resource;
    /// a raw string that also carries an inline query (`?` or `&`) is rejected
    /// when it is set. An inline query is otherwise split off and returned in
    /// [`ParsedResource::inline_query`] for the caller to persist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use search_resource::Resource;
    ///
    /// let parsed = Resource::parse("my-{type}-idx/doc", None).unwrap();
    /// assert_eq!(parsed.resource.bulk(), "/_bulk");
    /// assert_eq!(parsed.resource.refresh(), "/_refresh");
    /// ```
    pub fn parse(raw: &str, external_query: Option<&str>) -> Result<ParsedResource> {
        if raw.trim().is_empty() {
            return Err(Error::malformed_resource());
        }

        let inline_query = extract_inline_query(raw, external_query)?;
        let source = inline_query.as_ref().map_or(raw, |q| q.resource.as_str());

        let resource = parse_resource(source)?;
        debug!(
            resource = %resource,
            bulk = resource.bulk(),
            refresh = resource.refresh(),
            "Parsed resource"
        );

        Ok(ParsedResource {
            resource,
            inline_query,
        })
    }

    /// Resolve the resource for `mode` from settings
    ///
    /// Any inline query found in the configured string is written back into
    /// `settings` before the resource is returned.
    pub fn from_settings(settings: &mut ResourceSettings, mode: Mode) -> Result<Resource> {
        let raw = settings
            .resource_for(mode)
            .ok_or_else(Error::malformed_resource)?
            .to_string();

        let parsed = Resource::parse(&raw, settings.query.as_deref())?;
        if let Some(inline) = &parsed.inline_query {
            settings.apply_rewrite(mode, inline);
        }
        Ok(parsed.resource)
    }
}

impl FromStr for Resource {
    type Err = Error;

    /// Parse a resource that carries no inline query
    fn from_str(s: &str) -> Result<Self> {
        let parsed = Resource::parse(s, None)?;
        match parsed.inline_query {
            None => Ok(parsed.resource),
            Some(inline) => Err(Error::config(format!(
                "Resource '{s}' carries an inline query '{}' that has to be stored in settings",
                inline.query
            ))),
        }
    }
}

/// Split a legacy inline query off a raw resource string
///
/// Returns `Ok(None)` when the string carries no query, or when the query
/// marker gives nothing to split (`?` at position 0, or only `&`).
pub fn extract_inline_query(raw: &str, external_query: Option<&str>) -> Result<Option<InlineQuery>> {
    if !raw.contains('?') && !raw.contains('&') {
        return Ok(None);
    }

    if external_query.is_some_and(|q| !q.trim().is_empty()) {
        return Err(Error::conflicting_query(QUERY_KEY));
    }

    let Some(question) = raw.find('?').filter(|&i| i > 0) else {
        return Ok(None);
    };

    let (prefix, query) = raw.split_at(question);

    // The segment between the last slash and the query is dropped
    let slash = prefix
        .rfind('/')
        .filter(|&i| i < prefix.len() - 1)
        .ok_or_else(Error::malformed_resource)?;
    let resource = &prefix[..slash];

    warn!(
        resource = resource,
        query = query,
        "Query embedded in resource string; moving it to '{}'",
        QUERY_KEY
    );

    Ok(Some(InlineQuery {
        resource: resource.to_string(),
        query: query.to_string(),
    }))
}

/// Sanitize, split and validate a resource string with no inline query left
fn parse_resource(raw: &str) -> Result<Resource> {
    let res = sanitize_resource(raw);

    let slash = res
        .find('/')
        .filter(|&i| i < res.len() - 1)
        .ok_or_else(Error::malformed_resource)?;
    let collection = &res[..slash];
    let kind = &res[slash + 1..];

    if collection.trim().is_empty() {
        return Err(Error::malformed(format!(
            "No collection found; expecting {EXPECTED_SHAPE}"
        )));
    }
    if kind.trim().is_empty() {
        return Err(Error::malformed(format!(
            "No kind found; expecting {EXPECTED_SHAPE}"
        )));
    }

    if !is_lower_case(&strip_placeholder(collection)) {
        return Err(Error::invalid_case(collection));
    }

    let resource = Resource::from_parts(collection.to_string(), kind.to_string());
    if resource.is_templated() {
        debug!(resource = %resource, "Templated resource; using generic endpoints where needed");
    }
    Ok(resource)
}
