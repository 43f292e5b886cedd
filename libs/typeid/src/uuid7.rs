//! Time-ordered 128-bit values (UUID version 7 layout).
//!
//! ```text
//!  bits 0..48    unix timestamp, milliseconds, big-endian
//!  bits 48..52   version (0111)
//!  bits 52..64   random
//!  bits 64..66   variant (10)
//!  bits 66..128  random
//! ```
//!
//! Values generated within the same millisecond differ only in their random
//! bits and are not ordered relative to each other. Ordering is guaranteed
//! at millisecond granularity only.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::error::TypeIdError;

/// Version nibble stored in the high half of byte 6.
pub const VERSION: u8 = 7;

/// Length of the hyphenated hex form.
pub const TEXT_LEN: usize = 36;

const TIMESTAMP_MASK: u64 = (1 << 48) - 1;

/// Byte offsets of the hyphens in the 8-4-4-4-12 text form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Generates a new value stamped with `timestamp_ms`, or the current time.
#[must_use]
pub fn generate(timestamp_ms: Option<u64>) -> [u8; 16] {
    generate_with_rng(timestamp_ms, &mut rand::rng())
}

/// Generates a new value drawing its random bits from `rng`.
///
/// Timestamps wider than 48 bits keep only their low 48 bits.
pub fn generate_with_rng<R: Rng + ?Sized>(timestamp_ms: Option<u64>, rng: &mut R) -> [u8; 16] {
    let timestamp = timestamp_ms.unwrap_or_else(now_ms) & TIMESTAMP_MASK;
    let random: [u8; 10] = rng.random();

    let mut bytes = [0u8; 16];
    bytes[..6].copy_from_slice(&timestamp.to_be_bytes()[2..]);
    bytes[6..].copy_from_slice(&random);
    bytes[6] = (VERSION << 4) | (bytes[6] & 0x0f);
    bytes[8] = 0x80 | (bytes[8] & 0x3f);

    tracing::trace!(timestamp_ms = timestamp, "generated uuid7");
    bytes
}

/// Reads the embedded millisecond timestamp.
#[must_use]
pub fn timestamp_ms(bytes: &[u8; 16]) -> u64 {
    let mut buf = [0u8; 8];
    buf[2..].copy_from_slice(&bytes[..6]);
    u64::from_be_bytes(buf)
}

/// Returns true if the version and variant bits match the version 7 layout.
#[must_use]
pub fn has_v7_layout(bytes: &[u8; 16]) -> bool {
    bytes[6] >> 4 == VERSION && bytes[8] >> 6 == 0b10
}

/// Formats a value as lowercase hyphenated hex (`8-4-4-4-12`).
#[must_use]
pub fn to_text(bytes: &[u8; 16]) -> String {
    let hex = hex::encode(bytes);
    let mut out = String::with_capacity(TEXT_LEN);
    out.push_str(&hex[0..8]);
    out.push('-');
    out.push_str(&hex[8..12]);
    out.push('-');
    out.push_str(&hex[12..16]);
    out.push('-');
    out.push_str(&hex[16..20]);
    out.push('-');
    out.push_str(&hex[20..32]);
    out
}

/// Parses the hyphenated hex form.
///
/// Hex digits are accepted in either case. Version and variant bits are not
/// checked, so any 128-bit value in this layout is accepted.
pub fn from_text(text: &str) -> Result<[u8; 16], TypeIdError> {
    if text.len() != TEXT_LEN {
        return Err(TypeIdError::parse(
            text,
            format!("expected {TEXT_LEN} characters, got {}", text.len()),
        ));
    }

    let raw = text.as_bytes();
    let mut digits = String::with_capacity(32);
    for (i, &b) in raw.iter().enumerate() {
        if HYPHENS.contains(&i) {
            if b != b'-' {
                return Err(TypeIdError::parse(
                    text,
                    format!("expected '-' at position {i}"),
                ));
            }
        } else if b.is_ascii_hexdigit() {
            digits.push(b as char);
        } else {
            return Err(TypeIdError::parse(
                text,
                format!("invalid hex digit at position {i}"),
            ));
        }
    }

    let mut bytes = [0u8; 16];
    hex::decode_to_slice(&digits, &mut bytes)
        .map_err(|e| TypeIdError::parse(text, e.to_string()))?;
    Ok(bytes)
}

fn now_ms() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        Err(e) => {
            tracing::warn!(error = %e, "system clock is before the unix epoch, using 0");
            0
        }
    }
}
