//! Known-answer vectors shared with other implementations of the format.

use typeid::{PrefixError, SuffixError, TypeId, TypeIdError};

struct Valid {
    name: &'static str,
    text: &'static str,
    prefix: &'static str,
    uuid: &'static str,
}

const VALID: &[Valid] = &[
    Valid {
        name: "nil",
        text: "00000000000000000000000000",
        prefix: "",
        uuid: "00000000-0000-0000-0000-000000000000",
    },
    Valid {
        name: "one",
        text: "00000000000000000000000001",
        prefix: "",
        uuid: "00000000-0000-0000-0000-000000000001",
    },
    Valid {
        name: "ten",
        text: "0000000000000000000000000a",
        prefix: "",
        uuid: "00000000-0000-0000-0000-00000000000a",
    },
    Valid {
        name: "sixteen",
        text: "0000000000000000000000000g",
        prefix: "",
        uuid: "00000000-0000-0000-0000-000000000010",
    },
    Valid {
        name: "thirty-two",
        text: "00000000000000000000000010",
        prefix: "",
        uuid: "00000000-0000-0000-0000-000000000020",
    },
    Valid {
        name: "max-valid",
        text: "7zzzzzzzzzzzzzzzzzzzzzzzzz",
        prefix: "",
        uuid: "ffffffff-ffff-ffff-ffff-ffffffffffff",
    },
    Valid {
        name: "valid-alphabet",
        text: "prefix_0123456789abcdefghjkmnpqrs",
        prefix: "prefix",
        uuid: "0110c853-1d09-52d8-d73e-1194e95b5f19",
    },
    Valid {
        name: "valid-uuidv7",
        text: "prefix_01h455vb4pex5vsknk084sn02q",
        prefix: "prefix",
        uuid: "01890a5d-ac96-774b-bcce-b302099a8057",
    },
    Valid {
        name: "prefix-underscore",
        text: "pre_fix_00000000000000000000000000",
        prefix: "pre_fix",
        uuid: "00000000-0000-0000-0000-000000000000",
    },
];

#[test]
fn valid_vectors_parse() {
    for case in VALID {
        let id = TypeId::parse(case.text).unwrap_or_else(|e| panic!("{}: {e}", case.name));
        assert_eq!(id.prefix(), case.prefix, "{}", case.name);
        assert_eq!(id.uuid_string(), case.uuid, "{}", case.name);
        assert_eq!(id.to_string(), case.text, "{}", case.name);
    }
}

#[test]
fn valid_vectors_encode() {
    for case in VALID {
        let id = TypeId::from_uuid_str(case.prefix, case.uuid)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));
        assert_eq!(id.to_string(), case.text, "{}", case.name);
    }
}

fn suffix_error(text: &str) -> SuffixError {
    match TypeId::parse(text) {
        Err(TypeIdError::InvalidSuffix { reason, .. }) => reason,
        other => panic!("{text}: expected invalid suffix, got {other:?}"),
    }
}

fn prefix_error(text: &str) -> PrefixError {
    match TypeId::parse(text) {
        Err(TypeIdError::InvalidPrefix { reason, .. }) => reason,
        other => panic!("{text}: expected invalid prefix, got {other:?}"),
    }
}

#[test]
fn invalid_prefixes_rejected() {
    assert_eq!(
        prefix_error("PREFIX_00000000000000000000000000"),
        PrefixError::InvalidCharacter('P')
    );
    assert_eq!(
        prefix_error("12345_00000000000000000000000000"),
        PrefixError::InvalidCharacter('1')
    );
    assert_eq!(
        prefix_error("pre.fix_00000000000000000000000000"),
        PrefixError::InvalidCharacter('.')
    );
    assert_eq!(
        prefix_error("pre fix_00000000000000000000000000"),
        PrefixError::InvalidCharacter(' ')
    );
    assert_eq!(
        prefix_error("_prefix_00000000000000000000000000"),
        PrefixError::LeadingUnderscore
    );
    assert_eq!(
        prefix_error("prefix__00000000000000000000000000"),
        PrefixError::TrailingUnderscore
    );

    let long = format!("{}_00000000000000000000000000", "a".repeat(64));
    assert_eq!(prefix_error(&long), PrefixError::TooLong(64));
}

#[test]
fn invalid_suffixes_rejected() {
    assert_eq!(
        suffix_error("0000000000000000000000000"),
        SuffixError::WrongLength(25)
    );
    assert_eq!(suffix_error("prefix_123"), SuffixError::WrongLength(10));
    assert_eq!(suffix_error(""), SuffixError::WrongLength(0));
    assert_eq!(
        suffix_error("prefix_0123456789ABCDEFGHJKMNPQRS"),
        SuffixError::InvalidCharacter('A')
    );
    assert_eq!(
        suffix_error("prefix_ooooooooooooooooooooooooo0"),
        SuffixError::InvalidCharacter('o')
    );
    assert_eq!(
        suffix_error("prefix_8zzzzzzzzzzzzzzzzzzzzzzzzz"),
        SuffixError::Overflow
    );
}

#[test]
fn structural_errors_rejected() {
    for text in [
        "_00000000000000000000000000",
        // a short suffix shifts the split point into the prefix
        "prefix_1234567890123456789012345",
        "prefix00000000000000000000000000",
        "prefix-00000000000000000000000000",
        "préfix_00000000000000000000000000",
    ] {
        let err = TypeId::parse(text).unwrap_err();
        assert!(err.is_parse_error(), "{text}: {err}");
    }
}
