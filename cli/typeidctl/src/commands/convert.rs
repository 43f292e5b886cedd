//! Conversion commands (encode, decode).

use anyhow::Result;
use clap::Args;
use typeid::TypeId;

use crate::error::CliError;
use crate::output::print_lines;

use super::CommandContext;

/// Convert a hyphenated UUID into an identifier.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// UUID in 8-4-4-4-12 hex form.
    uuid: String,

    /// Prefix naming the entity kind (defaults to TYPEID_PREFIX, else none).
    #[arg(long)]
    prefix: Option<String>,
}

/// Convert an identifier into a hyphenated UUID.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Identifier to convert.
    id: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let prefix = ctx.resolve_prefix(self.prefix.as_deref());
        let id = TypeId::from_uuid_str(prefix, &self.uuid)
            .map_err(|e| CliError::invalid(&self.uuid, e))?;
        print_lines(&[id.to_string()], ctx.format);
        Ok(())
    }
}

impl DecodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = TypeId::parse(&self.id).map_err(|e| CliError::invalid(&self.id, e))?;
        print_lines(&[id.uuid_string()], ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::output::OutputFormat;

    fn ctx() -> CommandContext {
        CommandContext {
            config: Config::default(),
            format: OutputFormat::Table,
        }
    }

    #[test]
    fn encode_rejects_malformed_uuid() {
        let cmd = EncodeCommand {
            uuid: "01890a5d-ac96-774b-bcce".to_string(),
            prefix: Some("user".to_string()),
        };
        let err = cmd.run(&ctx()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Invalid { source, .. }) if source.is_parse_error()
        ));
    }

    #[test]
    fn decode_rejects_invalid_identifier() {
        let cmd = DecodeCommand {
            id: "user_invalid".to_string(),
        };
        assert!(cmd.run(&ctx()).is_err());
    }
}
