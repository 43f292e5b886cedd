//! Identifiers whose prefix is fixed by the type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::base32;
use crate::error::TypeIdError;
use crate::prefix::Prefix;
use crate::typeid::TypeId;
use crate::uuid7;

/// An entity kind with a fixed prefix. Usually declared with [`define_id!`](crate::define_id).
///
/// The prefix is checked when a [`TypedId`] of the kind is first built, at
/// compile time:
///
/// ```compile_fail
/// use typeid::{IdKind, TypedId};
///
/// enum Bad {}
///
/// impl IdKind for Bad {
///     const PREFIX: &'static str = "Bad";
/// }
///
/// let _ = TypedId::<Bad>::zero();
/// ```
pub trait IdKind {
    /// The prefix for identifiers of this kind.
    const PREFIX: &'static str;
}

/// An identifier whose prefix is `K::PREFIX`.
///
/// Only the 16-byte value is stored, so the type is `Copy`. Mixing up two
/// kinds is a compile error rather than a runtime prefix check.
pub struct TypedId<K> {
    bytes: [u8; 16],
    kind: PhantomData<fn() -> K>,
}

impl<K: IdKind> TypedId<K> {
    /// The prefix for this ID type.
    pub const PREFIX: &'static str = K::PREFIX;

    const VALID: () = assert!(
        crate::prefix::is_valid(K::PREFIX),
        "invalid IdKind prefix"
    );

    /// Creates a new ID stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self::from_bytes(uuid7::generate(None))
    }

    /// Creates a new ID stamped with `timestamp_ms`.
    #[must_use]
    pub fn at(timestamp_ms: u64) -> Self {
        Self::from_bytes(uuid7::generate(Some(timestamp_ms)))
    }

    /// The zero ID of this kind.
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_bytes([0; 16])
    }

    /// Wraps a raw 128-bit value.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        let () = Self::VALID;
        Self {
            bytes,
            kind: PhantomData,
        }
    }

    /// Parses an ID, requiring the `K::PREFIX` prefix.
    pub fn parse(s: &str) -> Result<Self, TypeIdError> {
        let id = TypeId::parse_with_prefix(s, K::PREFIX)?;
        Ok(Self::from_bytes(*id.as_bytes()))
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    #[must_use]
    pub fn suffix(&self) -> String {
        base32::encode(&self.bytes)
    }

    /// Returns the timestamp portion in milliseconds.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        uuid7::timestamp_ms(&self.bytes)
    }

    #[must_use]
    pub fn has_suffix(&self) -> bool {
        self.bytes != [0; 16]
    }

    /// Erases the kind, keeping the prefix as data.
    #[must_use]
    pub fn to_type_id(&self) -> TypeId {
        TypeId::from(*self)
    }
}

impl<K: IdKind> Default for TypedId<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for TypedId<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for TypedId<K> {}

impl<K> PartialEq for TypedId<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<K> Eq for TypedId<K> {}

impl<K> PartialOrd for TypedId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for TypedId<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl<K> Hash for TypedId<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl<K: IdKind> fmt::Display for TypedId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !K::PREFIX.is_empty() {
            write!(f, "{}_", K::PREFIX)?;
        }
        f.write_str(&self.suffix())
    }
}

impl<K: IdKind> fmt::Debug for TypedId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedId").field(&self.to_string()).finish()
    }
}

impl<K: IdKind> FromStr for TypedId<K> {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<K: IdKind> From<TypedId<K>> for TypeId {
    fn from(id: TypedId<K>) -> Self {
        TypeId::from_checked(Prefix::from_checked(K::PREFIX), id.bytes)
    }
}

impl<K: IdKind> TryFrom<TypeId> for TypedId<K> {
    type Error = TypeIdError;

    fn try_from(id: TypeId) -> Result<Self, Self::Error> {
        if !id.has_prefix(K::PREFIX) {
            return Err(TypeIdError::PrefixMismatch {
                expected: K::PREFIX.to_string(),
                actual: id.prefix().to_string(),
            });
        }
        Ok(Self::from_bytes(*id.as_bytes()))
    }
}

impl<K> AsRef<[u8; 16]> for TypedId<K> {
    fn as_ref(&self) -> &[u8; 16] {
        &self.bytes
    }
}
