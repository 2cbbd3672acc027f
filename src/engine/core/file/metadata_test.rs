use crate::engine::core::column::format::ColumnType;
use crate::engine::core::file::metadata::FileMetadata;
use crate::test_helpers::factories::SchemaFactory;

#[test]
fn encodes_names_and_sample_value_tags() {
    let meta = FileMetadata::from_schema(&SchemaFactory::mixed());
    let bytes = meta.encode().unwrap();
    assert_eq!(
        std::str::from_utf8(&bytes).unwrap(),
        r#"{"columns":["a","b","c","d"],"types":[0,"",0.0,false]}"#
    );
}

#[test]
fn decode_inverts_encode() {
    let meta = FileMetadata::from_schema(&SchemaFactory::mixed());
    let decoded = FileMetadata::decode(&meta.encode().unwrap()).unwrap();
    assert_eq!(decoded, meta);
    assert_eq!(decoded.type_of("c"), Some(ColumnType::Float));
    assert_eq!(decoded.len(), 4);
}

#[test]
fn decode_accepts_any_key_order_and_whitespace() {
    let text = br#"{ "types": [true, 12, 1.5, "x"], "columns": ["p", "q", "r", "s"] }"#;
    let meta = FileMetadata::decode(text).unwrap();
    assert_eq!(
        meta.types,
        vec![
            ColumnType::Bool,
            ColumnType::Int,
            ColumnType::Float,
            ColumnType::Text
        ]
    );
}

#[test]
fn empty_schema_roundtrips() {
    let meta = FileMetadata {
        columns: vec![],
        types: vec![],
    };
    assert!(FileMetadata::decode(&meta.encode().unwrap()).unwrap().is_empty());
}

#[test]
fn malformed_metadata_is_a_format_error() {
    for bad in [
        &b"not json"[..],
        &[0xff, 0xfe][..],
        &br#"{"columns":["a"]}"#[..],
        &br#"{"columns":["a","b"],"types":[0]}"#[..],
        &br#"{"columns":["a","a"],"types":[0,0]}"#[..],
    ] {
        let err = FileMetadata::decode(bad).unwrap_err();
        assert!(err.is_format(), "{:?} gave {err:?}", String::from_utf8_lossy(bad));
    }
}

#[test]
fn unknown_type_tag_is_unsupported() {
    let err = FileMetadata::decode(br#"{"columns":["a","b"],"types":[0,null]}"#).unwrap_err();
    assert!(err.is_unsupported_type());
}
