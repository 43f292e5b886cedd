//! The typed identifier value: a validated prefix plus a 128-bit suffix.

use std::fmt;
use std::str::FromStr;

use crate::base32::{self, SUFFIX_LEN};
use crate::error::{must, TypeIdError};
use crate::prefix::{Prefix, SEPARATOR};
use crate::uuid7;

/// A prefixed, time-sortable identifier such as `user_01h455vb4pex5vsknk084sn02q`.
///
/// Equality and ordering follow the `(prefix, suffix)` pair. Because the
/// suffix alphabet preserves numeric order, ordering by the raw bytes is the
/// same as ordering by suffix text, so identifiers sharing a prefix sort by
/// their embedded timestamp.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId {
    prefix: Prefix,
    bytes: [u8; 16],
}

impl TypeId {
    /// Creates an identifier with a freshly generated suffix.
    pub fn new(prefix: &str) -> Result<Self, TypeIdError> {
        Self::generate(prefix, None)
    }

    /// Creates an identifier stamped with `timestamp_ms`, or the current time.
    pub fn generate(prefix: &str, timestamp_ms: Option<u64>) -> Result<Self, TypeIdError> {
        let prefix = Prefix::new(prefix)?;
        Ok(Self {
            prefix,
            bytes: uuid7::generate(timestamp_ms),
        })
    }

    /// Creates the zero identifier for `prefix`.
    pub fn zero(prefix: &str) -> Result<Self, TypeIdError> {
        Self::from_bytes(prefix, [0; 16])
    }

    /// Combines a prefix and a suffix, validating each independently.
    pub fn from_parts(prefix: &str, suffix: &str) -> Result<Self, TypeIdError> {
        let prefix = Prefix::new(prefix)?;
        let bytes = base32::decode(suffix)?;
        Ok(Self { prefix, bytes })
    }

    /// Wraps an arbitrary 128-bit value.
    pub fn from_bytes(prefix: &str, bytes: [u8; 16]) -> Result<Self, TypeIdError> {
        let prefix = Prefix::new(prefix)?;
        Ok(Self { prefix, bytes })
    }

    pub(crate) fn from_checked(prefix: Prefix, bytes: [u8; 16]) -> Self {
        Self { prefix, bytes }
    }

    /// Wraps a [`uuid::Uuid`].
    pub fn from_uuid(prefix: &str, uuid: uuid::Uuid) -> Result<Self, TypeIdError> {
        Self::from_bytes(prefix, uuid.into_bytes())
    }

    /// Builds an identifier from hyphenated hex (`8-4-4-4-12`).
    pub fn from_uuid_str(prefix: &str, uuid: &str) -> Result<Self, TypeIdError> {
        let prefix = Prefix::new(prefix)?;
        let bytes = uuid7::from_text(uuid)?;
        Ok(Self { prefix, bytes })
    }

    /// Parses `[<prefix>_]<suffix>`.
    ///
    /// Inputs of 26 bytes or fewer are treated as a bare suffix. Longer inputs
    /// split off the last 26 bytes as the suffix; what precedes must be a
    /// non-empty prefix followed by exactly one separator.
    ///
    /// Prefix and suffix failures are reported as [`TypeIdError::InvalidPrefix`]
    /// and [`TypeIdError::InvalidSuffix`]; [`TypeIdError::ParseError`] covers
    /// inputs that cannot be split at all.
    pub fn parse(text: &str) -> Result<Self, TypeIdError> {
        if !text.is_ascii() {
            return Err(TypeIdError::parse(text, "identifier must be ASCII"));
        }

        if text.len() <= SUFFIX_LEN {
            let bytes = base32::decode(text)?;
            return Ok(Self {
                prefix: Prefix::EMPTY,
                bytes,
            });
        }

        let (head, suffix) = text.split_at(text.len() - SUFFIX_LEN);
        let Some(prefix) = head.strip_suffix(SEPARATOR) else {
            return Err(TypeIdError::parse(
                text,
                "missing separator between prefix and suffix",
            ));
        };
        if prefix.is_empty() {
            return Err(TypeIdError::parse(
                text,
                "separator present without a prefix",
            ));
        }

        Self::from_parts(prefix, suffix)
    }

    /// Parses an identifier and requires its prefix to equal `expected`.
    pub fn parse_with_prefix(text: &str, expected: &str) -> Result<Self, TypeIdError> {
        let id = Self::parse(text)?;
        if !id.has_prefix(expected) {
            return Err(TypeIdError::PrefixMismatch {
                expected: expected.to_string(),
                actual: id.prefix.into(),
            });
        }
        Ok(id)
    }

    /// Returns true if `text` parses.
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// Returns true if `text` parses and carries the `expected` prefix.
    #[must_use]
    pub fn is_valid_with_prefix(text: &str, expected: &str) -> bool {
        Self::parse_with_prefix(text, expected).is_ok()
    }

    /// Like [`TypeId::new`], but raises the error instead of returning it.
    #[must_use]
    pub fn must_new(prefix: &str) -> Self {
        must(Self::new(prefix))
    }

    /// Like [`TypeId::parse`], but raises the error instead of returning it.
    #[must_use]
    pub fn must_parse(text: &str) -> Self {
        must(Self::parse(text))
    }

    /// Like [`TypeId::parse_with_prefix`], but raises the error instead of returning it.
    #[must_use]
    pub fn must_parse_with_prefix(text: &str, expected: &str) -> Self {
        must(Self::parse_with_prefix(text, expected))
    }

    /// Like [`TypeId::from_parts`], but raises the error instead of returning it.
    #[must_use]
    pub fn must_from_parts(prefix: &str, suffix: &str) -> Self {
        must(Self::from_parts(prefix, suffix))
    }

    /// Returns the prefix, empty if the identifier has none.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// Returns the 26-character suffix.
    #[must_use]
    pub fn suffix(&self) -> String {
        base32::encode(&self.bytes)
    }

    /// Returns the raw 16-byte big-endian value.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns the value as a [`uuid::Uuid`].
    #[must_use]
    pub const fn to_uuid(&self) -> uuid::Uuid {
        uuid::Uuid::from_bytes(self.bytes)
    }

    /// Returns the value as lowercase hyphenated hex.
    #[must_use]
    pub fn uuid_string(&self) -> String {
        uuid7::to_text(&self.bytes)
    }

    /// Returns the millisecond timestamp held in the top 48 bits.
    ///
    /// Only meaningful for generated values.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        uuid7::timestamp_ms(&self.bytes)
    }

    /// Returns true if the prefix equals `expected`.
    #[must_use]
    pub fn has_prefix(&self, expected: &str) -> bool {
        self.prefix == expected
    }

    /// Returns true unless the suffix is all zeros.
    #[must_use]
    pub fn has_suffix(&self) -> bool {
        self.bytes != [0; 16]
    }

    /// Returns true for the prefix-less zero identifier.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.prefix.is_empty() && !self.has_suffix()
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.prefix.is_empty() {
            write!(f, "{}{}", self.prefix, SEPARATOR)?;
        }
        f.write_str(&self.suffix())
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeId").field(&self.to_string()).finish()
    }
}

impl FromStr for TypeId {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TypeId {
    type Error = TypeIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeId {
    type Error = TypeIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TypeId> for String {
    fn from(id: TypeId) -> Self {
        id.to_string()
    }
}

impl From<&TypeId> for uuid::Uuid {
    fn from(id: &TypeId) -> Self {
        id.to_uuid()
    }
}

impl AsRef<[u8]> for TypeId {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
