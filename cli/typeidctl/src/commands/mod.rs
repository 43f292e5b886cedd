//! CLI commands.

mod convert;
mod generate;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// typeid CLI - Generate and inspect type-safe, sortable identifiers.
#[derive(Debug, Parser)]
#[command(name = "typeid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new identifiers.
    New(generate::NewCommand),

    /// Print the zero identifier for a prefix.
    Zero(generate::ZeroCommand),

    /// Parse an identifier and show its parts.
    Parse(inspect::ParseCommand),

    /// Check whether an identifier is valid (exit status 1 if not).
    Validate(inspect::ValidateCommand),

    /// Convert a hyphenated UUID into an identifier.
    Encode(convert::EncodeCommand),

    /// Convert an identifier into a hyphenated UUID.
    Decode(convert::DecodeCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let format = match self.format.as_deref() {
            Some(format) => format.parse()?,
            None => config.format,
        };

        let ctx = CommandContext { config, format };

        match self.command {
            Commands::New(cmd) => cmd.run(&ctx),
            Commands::Zero(cmd) => cmd.run(&ctx),
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Decode(cmd) => cmd.run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Resolve the prefix, preferring the argument over the configured default.
    pub fn resolve_prefix<'a>(&'a self, prefix: Option<&'a str>) -> &'a str {
        prefix.unwrap_or(self.config.default_prefix.as_str())
    }
}
