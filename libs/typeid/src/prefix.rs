//! Validated identifier prefixes.
//!
//! A prefix is empty, or 1-63 bytes of lowercase ASCII letters and
//! underscores that neither starts nor ends with an underscore.

use std::fmt;

use crate::error::{PrefixError, TypeIdError};

/// Maximum prefix length in bytes.
pub const MAX_PREFIX_LEN: usize = 63;

/// Separator between prefix and suffix.
pub const SEPARATOR: char = '_';

/// A validated identifier prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// The empty prefix.
    pub const EMPTY: Prefix = Prefix(String::new());

    /// Validates and wraps a prefix.
    pub fn new(prefix: impl Into<String>) -> Result<Self, TypeIdError> {
        let prefix = prefix.into();
        match check(&prefix) {
            Ok(()) => Ok(Self(prefix)),
            Err(reason) => Err(TypeIdError::invalid_prefix(prefix, reason)),
        }
    }

    /// Wraps a prefix already known to satisfy [`is_valid`].
    pub(crate) fn from_checked(prefix: &str) -> Self {
        debug_assert!(is_valid(prefix));
        Self(prefix.to_string())
    }

    /// Returns the prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty prefix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Prefix {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Prefix {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::str::FromStr for Prefix {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Prefix> for String {
    fn from(prefix: Prefix) -> Self {
        prefix.0
    }
}

/// Validates a prefix, returning the first rule it breaks.
pub fn check(prefix: &str) -> Result<(), PrefixError> {
    if prefix.len() > MAX_PREFIX_LEN {
        return Err(PrefixError::TooLong(prefix.len()));
    }
    if let Some(bad) = prefix.chars().find(|&c| !c.is_ascii_lowercase() && c != SEPARATOR) {
        return Err(PrefixError::InvalidCharacter(bad));
    }
    if prefix.starts_with(SEPARATOR) {
        return Err(PrefixError::LeadingUnderscore);
    }
    if prefix.ends_with(SEPARATOR) {
        return Err(PrefixError::TrailingUnderscore);
    }
    Ok(())
}

/// Compile-time variant of [`check`], used by `define_id!`.
#[must_use]
pub const fn is_valid(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return true;
    }
    if len > MAX_PREFIX_LEN || bytes[0] == b'_' || bytes[len - 1] == b'_' {
        return false;
    }
    let mut i = 0;
    while i < len {
        if !(bytes[i].is_ascii_lowercase() || bytes[i] == b'_') {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_prefixes() {
        let longest = "z".repeat(MAX_PREFIX_LEN);
        for prefix in ["", "a", "user", "api_key", "a_b_c", longest.as_str()] {
            assert!(check(prefix).is_ok(), "{prefix:?} should be valid");
            assert!(is_valid(prefix), "{prefix:?} should be valid");
        }
    }

    #[test]
    fn test_invalid_prefixes() {
        let cases = [
            ("_user", PrefixError::LeadingUnderscore),
            ("user_", PrefixError::TrailingUnderscore),
            ("_", PrefixError::LeadingUnderscore),
            ("User", PrefixError::InvalidCharacter('U')),
            ("user1", PrefixError::InvalidCharacter('1')),
            ("pre.fix", PrefixError::InvalidCharacter('.')),
            ("pre-fix", PrefixError::InvalidCharacter('-')),
            ("pre fix", PrefixError::InvalidCharacter(' ')),
            ("préfix", PrefixError::InvalidCharacter('é')),
        ];
        for (prefix, reason) in cases {
            assert_eq!(check(prefix), Err(reason), "{prefix:?}");
            assert!(!is_valid(prefix), "{prefix:?}");
        }
    }

    #[test]
    fn test_too_long() {
        let long = "a".repeat(64);
        assert_eq!(check(&long), Err(PrefixError::TooLong(64)));
        assert!(!is_valid(&long));
    }

    #[test]
    fn test_new_carries_value() {
        let err = Prefix::new("Bad").unwrap_err();
        assert_eq!(
            err,
            TypeIdError::InvalidPrefix {
                value: "Bad".to_string(),
                reason: PrefixError::InvalidCharacter('B'),
            }
        );
    }

    #[test]
    fn test_comparisons() {
        let prefix = Prefix::new("user").unwrap();
        assert_eq!(prefix, "user");
        assert_eq!(prefix.as_str(), "user");
        assert!(Prefix::EMPTY.is_empty());
        assert!(Prefix::new("post").unwrap() < prefix);
    }
}
