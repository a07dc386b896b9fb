// Edge case tests
use option_bitfield::{Bitfield, BitfieldError, Flags, JsonCodec, Restore};

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("opt{}", i)).collect()
}

#[test]
fn test_empty_options() {
    let mut bf = Bitfield::with_options(Vec::<String>::new()).unwrap();
    bf.on("a");
    assert!(!bf.is_on("a"));
    assert!(!bf.is_off("a"));
    assert!(bf.options_on().is_empty());
    assert_eq!(bf.value(), 0);
    assert_eq!(bf.to_text(), "0");
}

#[test]
fn test_empty_options_keep_initial_value() {
    let bf = Bitfield::new(Vec::<String>::new(), 5u64).unwrap();
    assert_eq!(bf.value(), 5);
    assert!(bf.options_on().is_empty());
}

#[test]
fn test_full_register() {
    let mut bf = Bitfield::with_options(names(64)).unwrap();
    bf.on("opt63");
    bf.on("opt0");
    assert_eq!(bf.value(), (1u64 << 63) | 1);
    assert_eq!(bf.options_on(), vec!["opt0", "opt63"]);
    assert_eq!(bf.to_text().len(), 64);

    bf.off("opt63");
    assert_eq!(bf.value(), 1);
}

#[test]
fn test_too_many_options() {
    let err = Bitfield::with_options(names(65)).unwrap_err();
    assert_eq!(err, BitfieldError::TooManyOptions(65));
    assert!(err.to_string().contains("65"));
}

#[test]
fn test_too_many_duplicates_still_rejected() {
    // 65 positions even though only one name
    let repeated = vec!["same"; 65];
    assert!(matches!(
        Bitfield::with_options(repeated),
        Err(BitfieldError::TooManyOptions(65))
    ));
}

#[test]
fn test_binary_string_too_wide() {
    let wide = format!("1{}", "0".repeat(64));
    assert!(matches!(
        Bitfield::new(["a"], wide.as_str()),
        Err(BitfieldError::ParseError(_))
    ));
}

#[test]
fn test_empty_binary_string() {
    assert!(matches!(
        Bitfield::new(["a"], ""),
        Err(BitfieldError::ParseError(_))
    ));
}

#[test]
fn test_malformed_blobs_are_ignored() {
    let mut bf = Bitfield::new(["a", "b"], "10").unwrap();
    let before = bf.clone();

    for blob in [
        "",
        "null",
        "[]",
        "{}",
        r#"{"options":{"a":0}}"#,
        r#"{"value":1}"#,
        r#"{"options":[],"value":1}"#,
        r#"{"options":{"a":0},"value":-1}"#,
        r#"{"options":{"a":0},"value":"1"}"#,
        r#"{"options":{"a":64},"value":1}"#,
        r#"{"options":{"a":1,"b":1},"value":1}"#,
    ] {
        assert_eq!(bf.deserialize(&JsonCodec, blob), Restore::Ignored, "blob: {}", blob);
        assert_eq!(bf, before, "blob: {}", blob);
    }
}

#[test]
fn test_strict_deserialize_reports_reason() {
    let err = Bitfield::try_deserialize(&JsonCodec, r#"{"options":{"a":64},"value":1}"#).unwrap_err();
    match err {
        BitfieldError::DeserializeError(msg) => assert!(msg.contains("'a'")),
        other => panic!("Expected DeserializeError, got {:?}", other),
    }
}

#[test]
fn test_blob_value_bits_outside_mapping() {
    let bf = Bitfield::try_deserialize(&JsonCodec, r#"{"options":{"a":0},"value":6}"#).unwrap();
    assert_eq!(bf.value(), 6);
    assert!(bf.is_off("a"));
    assert!(bf.options_on().is_empty());
}

#[test]
fn test_unicode_option_names() {
    let mut bf = Bitfield::with_options(["日本", "ß", "emoji🚀"]).unwrap();
    bf.on("emoji🚀");
    let blob = bf.serialize(&JsonCodec).unwrap();
    let restored = Bitfield::try_deserialize(&JsonCodec, &blob).unwrap();
    assert_eq!(restored.options_on(), vec!["emoji🚀"]);
    assert_eq!(restored.value(), 4);
}
