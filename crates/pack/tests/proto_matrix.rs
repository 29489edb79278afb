use proptest::prelude::*;
use sentence_links_pack::{
    decode_fields, decode_fields_with, encode_fields, DecodeOptions, FieldMap, ProtoEncoder,
    ProtoError, UnknownWireTypePolicy, Utf8Policy, MAX_FIELD_NUMBER,
};

fn field_map() -> impl Strategy<Value = FieldMap> {
    prop::collection::vec((0..=MAX_FIELD_NUMBER, ".{0,40}"), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect::<FieldMap>())
}

#[test]
fn proto_template_config_matrix() {
    // Question, answer, then two varint settings the codec does not model.
    let mut encoder = ProtoEncoder::new();
    encoder.write_str_field(1, "{{Front}}").unwrap();
    encoder.write_str_field(2, "{{FrontSide}}<hr id=answer>{{Back}}").unwrap();
    encoder.write_varint_field(5, 1).unwrap();
    encoder.write_varint_field(6, 123_456).unwrap();
    let blob = encoder.writer.flush();

    let fields = decode_fields(&blob).unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[&1], "{{Front}}");
    assert_eq!(fields[&2], "{{FrontSide}}<hr id=answer>{{Back}}");

    // Varint settings are not re-emitted.
    let reencoded = encode_fields(&fields).unwrap();
    assert!(reencoded.len() < blob.len());
    assert_eq!(decode_fields(&reencoded).unwrap(), fields);
}

#[test]
fn proto_policy_matrix() {
    let blob = [0x0a, 0x01, b'q', 0x11, 0, 0, 0, 0, 0, 0, 0, 0, 0x12, 0x01, b'a'];

    let stop = decode_fields(&blob).unwrap();
    assert_eq!(stop.len(), 1);

    let skip = decode_fields_with(
        &blob,
        DecodeOptions {
            unknown_wire_type: UnknownWireTypePolicy::Skip,
            utf8: Utf8Policy::Strict,
        },
    )
    .unwrap();
    assert_eq!(skip.len(), 2);
    assert_eq!(skip[&2], "a");

    let reject = decode_fields_with(
        &blob,
        DecodeOptions {
            unknown_wire_type: UnknownWireTypePolicy::Reject,
            utf8: Utf8Policy::Strict,
        },
    );
    assert_eq!(
        reject,
        Err(ProtoError::UnsupportedWireType {
            wire_type: 1,
            offset: 3
        })
    );
}

#[test]
fn proto_error_messages() {
    assert_eq!(
        ProtoError::Truncated { offset: 4 }.to_string(),
        "record at offset 4 is truncated"
    );
    assert_eq!(
        ProtoError::InvalidText { field: 2 }.to_string(),
        "field 2 is not valid UTF-8"
    );
}

proptest! {
    #[test]
    fn proto_string_roundtrip(fields in field_map()) {
        let blob = encode_fields(&fields).unwrap();
        prop_assert_eq!(decode_fields(&blob).unwrap(), fields);
    }

    #[test]
    fn proto_encode_emits_ascending_keys(fields in field_map()) {
        let blob = encode_fields(&fields).unwrap();
        let decoded = decode_fields(&blob).unwrap();
        let keys: Vec<u32> = decoded.keys().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(keys, sorted);
        prop_assert_eq!(decoded.len(), fields.len());
    }

    #[test]
    fn proto_decode_never_panics(blob in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode_fields(&blob);
    }
}
