//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use typeid::TypeIdError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown output format '{0}', expected 'table' or 'json'")]
    InvalidFormat(String),

    #[error("'{input}' is not a valid identifier")]
    Invalid {
        input: String,
        #[source]
        source: TypeIdError,
    },
}

impl CliError {
    pub fn invalid(input: impl Into<String>, source: TypeIdError) -> Self {
        Self::Invalid {
            input: input.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    let id_err = match err.downcast_ref::<CliError>() {
        Some(CliError::Invalid { source, .. }) => Some(source),
        Some(CliError::InvalidFormat(_)) => None,
        None => err.downcast_ref::<TypeIdError>(),
    };

    if let Some(hint) = id_err.map(hint) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

/// Suggest a fix for an identifier error.
fn hint(err: &TypeIdError) -> &'static str {
    match err {
        TypeIdError::InvalidPrefix { .. } => {
            "Prefixes are up to 63 lowercase letters or underscores, not starting or ending with '_'."
        }
        TypeIdError::InvalidSuffix { .. } => {
            "Suffixes are 26 characters of 0-9 and a-z (excluding i, l, o, u), starting with 0-7."
        }
        TypeIdError::PrefixMismatch { .. } => {
            "The identifier belongs to a different kind. Drop --prefix to accept any prefix."
        }
        TypeIdError::ParseError { .. } => {
            "Expected `prefix_suffix`, a bare suffix, or a hyphenated UUID (8-4-4-4-12)."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_per_kind() {
        let err = typeid::TypeId::parse("User_01h45y0sxkfmntta78gqs1vsw6").unwrap_err();
        assert!(hint(&err).contains("lowercase"));

        let err = typeid::TypeId::parse("invalid").unwrap_err();
        assert!(hint(&err).contains("26 characters"));
    }

    #[test]
    fn test_invalid_keeps_source() {
        let source = typeid::TypeId::parse("_01h45y0sxkfmntta78gqs1vsw6").unwrap_err();
        let err = CliError::invalid("_01h45y0sxkfmntta78gqs1vsw6", source.clone());
        let chained = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<TypeIdError>())
            .cloned();
        assert_eq!(chained, Some(source));
    }
}
