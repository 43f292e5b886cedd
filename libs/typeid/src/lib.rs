//! # typeid
//!
//! Type-safe, K-sortable, globally unique identifiers.
//!
//! ## Format
//!
//! An identifier is a lowercase prefix naming the entity kind, an underscore,
//! and a 26-character base32 suffix encoding a 128-bit UUIDv7:
//!
//! ```text
//!   user_01h455vb4pex5vsknk084sn02q
//!   └──┘ └────────────────────────┘
//!  prefix  suffix (uuidv7 in base32)
//! ```
//!
//! The prefix may be empty, in which case the separator is omitted. Prefixes
//! are at most 63 bytes of `[a-z_]` and neither start nor end with `_`.
//!
//! This format provides:
//! - Type safety (the prefix names the entity kind)
//! - Sortability (the suffix sorts like the value, and the value starts with
//!   a millisecond timestamp)
//! - Interoperability (the suffix is a bit-exact encoding of a UUID)
//!
//! ## Usage
//!
//! ```
//! use typeid::TypeId;
//!
//! let id = TypeId::new("user")?;
//! let parsed = TypeId::parse_with_prefix(&id.to_string(), "user")?;
//! assert_eq!(id, parsed);
//! # Ok::<(), typeid::TypeIdError>(())
//! ```
//!
//! Kinds known at compile time can use [`define_id!`] for a `Copy` type that
//! cannot be confused with other kinds.
//!
//! ## Features
//!
//! - `serde` (default): serialize identifiers as strings.
//! - `sqlx`: store identifiers in Postgres `TEXT` columns.

mod adapters;
pub mod base32;
mod error;
mod macros;
pub mod prefix;
mod typed;
mod typeid;
pub mod uuid7;

pub use error::{PrefixError, SuffixError, TypeIdError};
pub use prefix::Prefix;
pub use typed::{IdKind, TypedId};
pub use typeid::TypeId;

/// Re-export uuid for consumers converting to and from [`uuid::Uuid`].
pub use uuid;
