//! Base32 codec for identifier suffixes.
//!
//! Maps a 16-byte big-endian value onto exactly 26 characters of the
//! Crockford alphabet (lowercase). The first character carries the top
//! 3 bits, every following character 5 bits: 3 + 25 * 5 = 128.
//!
//! The alphabet is in ascending ASCII order, so comparing two suffixes as
//! strings gives the same result as comparing the 128-bit values they encode.

use crate::error::{SuffixError, TypeIdError};

/// Encoding alphabet, in ascending ASCII order.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// Length of an encoded suffix.
pub const SUFFIX_LEN: usize = 26;

/// Suffix of the all-zero value.
pub const ZERO_SUFFIX: &str = "00000000000000000000000000";

/// Highest value the first character may carry.
const FIRST_CHAR_MAX: u8 = 0b111;

/// Marks bytes outside the alphabet in [`DECODE_TABLE`].
const INVALID: u8 = 0xff;

/// Reverse lookup from ASCII byte to 5-bit value.
const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes 16 bytes as a 26-character suffix.
#[must_use]
pub fn encode(bytes: &[u8; 16]) -> String {
    let value = u128::from_be_bytes(*bytes);
    let mut out = [0u8; SUFFIX_LEN];

    for (i, slot) in out.iter_mut().enumerate() {
        let shift = 5 * (SUFFIX_LEN - 1 - i);
        *slot = ALPHABET[((value >> shift) & 0x1f) as usize];
    }

    out.iter().map(|&b| b as char).collect()
}

/// Decodes a 26-character suffix back into 16 bytes.
///
/// Fails with [`TypeIdError::InvalidSuffix`] if the input has the wrong
/// length, contains a character outside the lowercase alphabet, or sets
/// either of the two bits above the 128-bit range.
pub fn decode(text: &str) -> Result<[u8; 16], TypeIdError> {
    let bytes = text.as_bytes();
    if bytes.len() != SUFFIX_LEN {
        return Err(TypeIdError::invalid_suffix(
            text,
            SuffixError::WrongLength(text.chars().count()),
        ));
    }

    let mut value: u128 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let digit = DECODE_TABLE[b as usize];
        if digit == INVALID {
            let bad = text[i..].chars().next().unwrap_or(b as char);
            return Err(TypeIdError::invalid_suffix(
                text,
                SuffixError::InvalidCharacter(bad),
            ));
        }
        if i == 0 && digit > FIRST_CHAR_MAX {
            return Err(TypeIdError::invalid_suffix(text, SuffixError::Overflow));
        }
        value = (value << 5) | u128::from(digit);
    }

    Ok(value.to_be_bytes())
}

/// Returns true if `text` is a canonical suffix.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    decode(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_sorted() {
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(&[0; 16]), ZERO_SUFFIX);
        assert_eq!(encode(&[0xff; 16]), "7zzzzzzzzzzzzzzzzzzzzzzzzz");

        let mut one = [0u8; 16];
        one[15] = 1;
        assert_eq!(encode(&one), "00000000000000000000000001");

        let mut thirty_two = [0u8; 16];
        thirty_two[15] = 0x20;
        assert_eq!(encode(&thirty_two), "00000000000000000000000010");
    }

    #[test]
    fn test_decode_known_values() {
        let bytes = decode("01h455vb4pex5vsknk084sn02q").unwrap();
        assert_eq!(
            bytes,
            [
                0x01, 0x89, 0x0a, 0x5d, 0xac, 0x96, 0x77, 0x4b, 0xbc, 0xce, 0xb3, 0x02, 0x09, 0x9a,
                0x80, 0x57
            ]
        );
        assert_eq!(encode(&bytes), "01h455vb4pex5vsknk084sn02q");
    }

    #[test]
    fn test_decode_wrong_length() {
        let err = decode("0000000000000000000000000").unwrap_err();
        assert_eq!(
            err,
            TypeIdError::InvalidSuffix {
                value: "0000000000000000000000000".to_string(),
                reason: SuffixError::WrongLength(25),
            }
        );
        assert!(decode("").is_err());
        assert!(decode("000000000000000000000000000").is_err());
    }

    #[test]
    fn test_decode_rejects_excluded_letters() {
        for bad in ['i', 'l', 'o', 'u'] {
            let text = format!("0000000000000000000000000{bad}");
            let err = decode(&text).unwrap_err();
            assert!(matches!(
                err,
                TypeIdError::InvalidSuffix {
                    reason: SuffixError::InvalidCharacter(c),
                    ..
                } if c == bad
            ));
        }
    }

    #[test]
    fn test_decode_rejects_uppercase() {
        assert!(decode("01H455VB4PEX5VSKNK084SN02Q").is_err());
    }

    #[test]
    fn test_decode_rejects_non_ascii() {
        // 24 ASCII characters plus one two-byte character is 26 bytes
        let err = decode("000000000000000000000000é").unwrap_err();
        assert!(matches!(
            err,
            TypeIdError::InvalidSuffix {
                reason: SuffixError::InvalidCharacter('é'),
                ..
            }
        ));
    }

    #[test]
    fn test_decode_rejects_overflow() {
        assert!(decode("7zzzzzzzzzzzzzzzzzzzzzzzzz").is_ok());
        for first in ['8', '9', 'a', 'z'] {
            let text = format!("{first}zzzzzzzzzzzzzzzzzzzzzzzzz");
            assert_eq!(
                decode(&text).unwrap_err(),
                TypeIdError::InvalidSuffix {
                    value: text.clone(),
                    reason: SuffixError::Overflow,
                }
            );
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(ZERO_SUFFIX));
        assert!(is_valid("7zzzzzzzzzzzzzzzzzzzzzzzzz"));
        assert!(!is_valid("8zzzzzzzzzzzzzzzzzzzzzzzzz"));
        assert!(!is_valid("01H455VB4PEX5VSKNK084SN02Q"));
        assert!(!is_valid("01h455vb4pex5vsknk084sn02"));
    }

    #[test]
    fn test_encoding_preserves_order() {
        let mut lower = [0u8; 16];
        let mut higher = [0u8; 16];
        lower[0] = 0x01;
        higher[0] = 0x01;
        higher[15] = 0x01;
        assert!(encode(&lower) < encode(&higher));

        let mut top = [0u8; 16];
        top[0] = 0x80;
        assert!(encode(&[0x7f; 16]) < encode(&top));
    }
}
