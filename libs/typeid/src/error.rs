//! Error types for identifier construction, parsing, and validation.

use thiserror::Error;

/// Errors that can occur when building or parsing identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeIdError {
    /// The prefix does not satisfy the prefix rules.
    #[error("invalid prefix '{value}': {reason}")]
    InvalidPrefix { value: String, reason: PrefixError },

    /// The suffix is not a canonical 26-character base32 value.
    #[error("invalid suffix '{value}': {reason}")]
    InvalidSuffix { value: String, reason: SuffixError },

    /// The identifier carries a different prefix than the caller expected.
    #[error("prefix mismatch: expected '{expected}', got '{actual}'")]
    PrefixMismatch { expected: String, actual: String },

    /// The input is structurally malformed.
    #[error("cannot parse '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

impl TypeIdError {
    pub(crate) fn invalid_prefix(value: impl Into<String>, reason: PrefixError) -> Self {
        Self::InvalidPrefix {
            value: value.into(),
            reason,
        }
    }

    pub(crate) fn invalid_suffix(value: impl Into<String>, reason: SuffixError) -> Self {
        Self::InvalidSuffix {
            value: value.into(),
            reason,
        }
    }

    pub(crate) fn parse(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseError {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error was caused by a malformed prefix.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, TypeIdError::InvalidPrefix { .. })
    }

    /// Returns true if this error was caused by a malformed suffix.
    pub fn is_suffix_error(&self) -> bool {
        matches!(self, TypeIdError::InvalidSuffix { .. })
    }

    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_mismatch(&self) -> bool {
        matches!(self, TypeIdError::PrefixMismatch { .. })
    }

    /// Returns true if the input was structurally malformed.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, TypeIdError::ParseError { .. })
    }

    /// Aborts the current call, carrying this error as the panic payload.
    ///
    /// Used by the `must_*` constructors. Callers that catch the unwind can
    /// recover the error with `payload.downcast::<TypeIdError>()`.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

/// Why a prefix was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrefixError {
    #[error("prefix cannot start with an underscore")]
    LeadingUnderscore,

    #[error("prefix cannot end with an underscore")]
    TrailingUnderscore,

    #[error("prefix is {0} bytes, exceeding the maximum of 63")]
    TooLong(usize),

    #[error("invalid character {0:?}, only lowercase letters and underscores are allowed")]
    InvalidCharacter(char),
}

/// Why a suffix was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SuffixError {
    #[error("suffix must be 26 characters, got {0}")]
    WrongLength(usize),

    #[error("invalid base32 character {0:?}")]
    InvalidCharacter(char),

    #[error("suffix exceeds 128 bits (first character must be 0-7)")]
    Overflow,
}

/// Unwraps a result, raising the structured error on failure.
pub(crate) fn must<T>(result: Result<T, TypeIdError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => err.raise(),
    }
}
