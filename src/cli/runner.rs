//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ModeSelection, OutputFormat};
use crate::error::{Result, ResultExt};
use crate::resource::{ParsedResource, Resource};
use crate::settings::load_settings;
use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Parse { resource, query } => self.parse(resource, query.as_deref()),
            Commands::Resolve { settings, mode } => self.resolve(settings, *mode),
        }
    }

    /// Parse a single resource string
    fn parse(&self, raw: &str, query: Option<&str>) -> Result<()> {
        let parsed = Resource::parse(raw, query)?;
        self.output_message(&parsed_message(&parsed));
        Ok(())
    }

    /// Resolve resources from a settings file
    fn resolve(&self, path: &Path, selection: ModeSelection) -> Result<()> {
        let mut settings = load_settings(path)
            .with_context(|| format!("Cannot resolve resources from '{}'", path.display()))?;
        let original = settings.clone();

        for &mode in selection.modes() {
            let key = settings.key_for(mode);
            let resource = Resource::from_settings(&mut settings, mode)?;
            info!(mode = %mode, key = key, resource = %resource, "Resolved resource");

            let mut msg = resource_message(&resource);
            msg["mode"] = json!(mode);
            msg["key"] = json!(key);
            self.output_message(&msg);
        }

        if settings != original {
            self.output_message(&json!({
                "type": "SETTINGS",
                "settings": settings,
            }));
        }

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Message describing a resource and every path derived from it
pub fn resource_message(resource: &Resource) -> Value {
    json!({
        "type": "RESOURCE",
        "resource": {
            "collection": resource.collection(),
            "kind": resource.kind(),
            "combined": resource.combined(),
            "bulk": resource.bulk(),
            "refresh": resource.refresh(),
            "mapping": resource.mapping(),
            "aliases": resource.aliases(),
        }
    })
}

fn parsed_message(parsed: &ParsedResource) -> Value {
    let mut msg = resource_message(&parsed.resource);
    if let Some(inline) = &parsed.inline_query {
        msg["inline_query"] = json!(inline);
    }
    msg
}
