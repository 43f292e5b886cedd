//! Framework adapters.
//!
//! Each adapter sits behind its own cargo feature and only uses the public
//! text, raw-bytes, and parse surface of [`TypeId`](crate::TypeId) and
//! [`TypedId`](crate::TypedId).

#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "sqlx")]
mod sqlx;
