//! Inspection commands (parse, validate).

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use typeid::TypeId;

use crate::error::CliError;
use crate::output::{print_output, print_success, OutputFormat};

use super::CommandContext;

/// Parse an identifier and show its parts.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Identifier to parse.
    id: String,

    /// Require this prefix.
    #[arg(long)]
    prefix: Option<String>,
}

/// Check whether an identifier is valid.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Identifier to validate.
    id: String,

    /// Require this prefix.
    #[arg(long)]
    prefix: Option<String>,
}

/// Parts of a parsed identifier.
#[derive(Debug, Serialize, Tabled)]
struct IdView {
    id: String,
    prefix: String,
    suffix: String,
    uuid: String,
    timestamp: String,
    zero: bool,
}

impl From<&TypeId> for IdView {
    fn from(id: &TypeId) -> Self {
        Self {
            id: id.to_string(),
            prefix: id.prefix().to_string(),
            suffix: id.suffix(),
            uuid: id.uuid_string(),
            timestamp: format_timestamp(id.timestamp_ms()),
            zero: id.is_zero(),
        }
    }
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = parse(&self.id, self.prefix.as_deref())?;
        print_output(&[IdView::from(&id)], ctx.format);
        Ok(())
    }
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = parse(&self.id, self.prefix.as_deref())?;
        match ctx.format {
            OutputFormat::Table => print_success(&format!("{id} is valid")),
            OutputFormat::Json => print_output(&[IdView::from(&id)], ctx.format),
        }
        Ok(())
    }
}

fn parse(input: &str, prefix: Option<&str>) -> Result<TypeId, CliError> {
    let result = match prefix {
        Some(expected) => TypeId::parse_with_prefix(input, expected),
        None => TypeId::parse(input),
    };
    result.map_err(|e| CliError::invalid(input, e))
}

fn format_timestamp(ms: u64) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| ms.to_string())
}
