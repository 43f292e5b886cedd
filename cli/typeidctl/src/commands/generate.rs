//! Generation commands (new, zero).

use anyhow::{ensure, Result};
use clap::Args;
use tracing::debug;
use typeid::TypeId;

use crate::output::print_lines;

use super::CommandContext;

/// Upper bound on `--count`, to keep accidental huge runs cheap to cancel.
const MAX_COUNT: usize = 100_000;

/// Generate new identifiers.
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Prefix naming the entity kind (defaults to TYPEID_PREFIX, else none).
    prefix: Option<String>,

    /// Number of identifiers to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,

    /// Embed this Unix timestamp (milliseconds) instead of the current time.
    #[arg(long)]
    timestamp: Option<u64>,
}

impl NewCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        ensure!(
            (1..=MAX_COUNT).contains(&self.count),
            "--count must be between 1 and {MAX_COUNT}"
        );

        let prefix = ctx.resolve_prefix(self.prefix.as_deref());
        debug!(prefix, count = self.count, timestamp = ?self.timestamp, "generating identifiers");

        let ids = generate(prefix, self.count, self.timestamp)?;
        print_lines(&ids, ctx.format);
        Ok(())
    }
}

fn generate(prefix: &str, count: usize, timestamp: Option<u64>) -> Result<Vec<String>> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        ids.push(TypeId::generate(prefix, timestamp)?.to_string());
    }
    Ok(ids)
}

/// Print the zero identifier for a prefix.
#[derive(Debug, Args)]
pub struct ZeroCommand {
    /// Prefix naming the entity kind (defaults to TYPEID_PREFIX, else none).
    prefix: Option<String>,
}

impl ZeroCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let prefix = ctx.resolve_prefix(self.prefix.as_deref());
        let id = TypeId::zero(prefix)?;
        print_lines(&[id.to_string()], ctx.format);
        Ok(())
    }
}
