use super::{DecodeOptions, decode, decode_prefix};
use crate::pack::{PackError, Value, encode};

fn plain(bytes: &[u8]) -> Value {
	decode(bytes, &DecodeOptions::default()).expect("bytes decode")
}

#[test]
fn scalars_decode_from_every_integer_family() {
	assert_eq!(plain(&[0xc0]), Value::Nil);
	assert_eq!(plain(&[0xc3]), Value::Bool(true));
	assert_eq!(plain(&[0x05]), Value::Int(5));
	assert_eq!(plain(&[0xf0]), Value::Int(-16));
	assert_eq!(plain(&[0xcc, 0xff]), Value::Int(255));
	assert_eq!(plain(&[0xcd, 0xff, 0xff]), Value::Int(65_535));
	assert_eq!(plain(&[0xce, 0xff, 0xff, 0xff, 0xff]), Value::Int(4_294_967_295));
	assert_eq!(plain(&[0xd0, 0x80]), Value::Int(-128));
	assert_eq!(plain(&[0xd1, 0x80, 0x00]), Value::Int(-32_768));
	assert_eq!(plain(&[0xd2, 0x80, 0x00, 0x00, 0x00]), Value::Int(-2_147_483_648));
	assert_eq!(plain(&[0xd3, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]), Value::Int(-2));
}

#[test]
fn uint64_is_canonicalised() {
	let small = plain(&[0xcf, 0, 0, 0, 0, 0, 0, 0, 7]);
	assert!(matches!(small, Value::Int(7)), "non-minimal uint64 still yields Int");

	let large = plain(&[0xcf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
	assert!(matches!(large, Value::UInt(u64::MAX)));
}

#[test]
fn float32_widens_to_double() {
	let mut bytes = vec![0xca];
	bytes.extend_from_slice(&0.5_f32.to_be_bytes());
	assert_eq!(plain(&bytes), Value::Float(0.5));
}

#[test]
fn maps_default_to_field_set() {
	let bytes = encode(&Value::map([(1, "one"), (2, "two")])).expect("map encodes");

	let object = plain(&bytes);
	let fields = object.as_object().expect("default decode yields an object");
	assert_eq!(fields.len(), 2);
	assert_eq!(fields.get("1"), Some(&Value::from("one")));
	assert_eq!(fields.get("2"), Some(&Value::from("two")));

	let map = decode(&bytes, &DecodeOptions::with_usemap()).expect("usemap decode");
	assert_eq!(map, Value::map([(1, "one"), (2, "two")]));
}

#[test]
fn field_set_stringifies_scalar_keys() {
	let source = Value::Map(vec![
		(Value::Bool(true), Value::Int(1)),
		(Value::Nil, Value::Int(2)),
		(Value::Float(1.5), Value::Int(3)),
		(Value::Int(-4), Value::Int(4)),
	]);
	let object = plain(&encode(&source).expect("map encodes"));
	let names: Vec<&str> = object.as_object().expect("object").keys().map(String::as_str).collect();
	assert_eq!(names, vec!["true", "null", "1.5", "-4"]);
}

#[test]
fn field_set_rejects_container_keys() {
	let source = Value::Map(vec![(Value::Array(Vec::new()), Value::Nil)]);
	let bytes = encode(&source).expect("map encodes");

	let err = decode(&bytes, &DecodeOptions::default()).expect_err("array key has no field name");
	assert!(matches!(err, PackError::UnsupportedKey { at: 1, kind: "array" }));

	let map = decode(&bytes, &DecodeOptions::with_usemap()).expect("usemap accepts any key");
	assert_eq!(map, source);
}

#[test]
fn duplicate_keys_survive_only_with_usemap() {
	let source = Value::map([("k", 1), ("other", 2), ("k", 3)]);
	let bytes = encode(&source).expect("map encodes");

	assert_eq!(decode(&bytes, &DecodeOptions::with_usemap()).expect("usemap decode"), source);

	let object = plain(&bytes);
	let fields = object.as_object().expect("object");
	assert_eq!(fields.len(), 2);
	assert_eq!(fields.get_index(0), Some((&"k".to_owned(), &Value::Int(3))), "first position, last value");
}

#[test]
fn reserved_tag_is_malformed() {
	let err = decode(&[0x91, 0xc1], &DecodeOptions::default()).expect_err("0xc1 is never valid");
	assert!(matches!(err, PackError::MalformedInput { at: 1, tag: 0xc1 }));
}

#[test]
fn extension_tags_are_rejected() {
	let err = decode(&[0xd4, 0x01, 0x00], &DecodeOptions::default()).expect_err("fixext1 unsupported");
	assert!(matches!(err, PackError::UnsupportedExtension { at: 0, tag: 0xd4 }));
}

#[test]
fn declared_lengths_beyond_input_are_truncated() {
	let cases: [&[u8]; 8] = [
		&[],
		&[0xa5, b'a', b'b'],
		&[0xd9],
		&[0xda, 0xff, 0xff, b'x'],
		&[0xc6, 0x00, 0x01, 0x00, 0x00, 0x00],
		&[0xdd, 0xff, 0xff, 0xff, 0xff],
		&[0x82, 0x01],
		&[0xcb, 0x00, 0x00],
	];
	for bytes in cases {
		let err = decode(bytes, &DecodeOptions::default()).expect_err("input is truncated");
		assert!(matches!(err, PackError::TruncatedInput { .. }), "{bytes:02x?} gave {err}");
	}
}

#[test]
fn huge_count_fails_before_allocating() {
	let err = decode(&[0xdf, 0xff, 0xff, 0xff, 0xff, 0xc0], &DecodeOptions::default()).expect_err("map32 count lies");
	assert!(matches!(err, PackError::TruncatedInput { at: 5, rem: 1, .. }));
}

#[test]
fn invalid_utf8_fails_unless_lossy() {
	let bytes = [0xa2, 0xc3, 0x28];
	let err = decode(&bytes, &DecodeOptions::default()).expect_err("invalid utf-8");
	assert!(matches!(err, PackError::InvalidUtf8 { at: 1, .. }));

	let text = decode(&bytes, &DecodeOptions::permissive()).expect("lossy decode");
	assert_eq!(text, Value::from("\u{fffd}("));
}

#[test]
fn binary_is_never_validated() {
	let bytes = [0xc4, 0x02, 0xc3, 0x28];
	assert_eq!(plain(&bytes), Value::bin(vec![0xc3, 0x28]));
}

#[test]
fn recursion_ceiling_is_enforced() {
	let mut bytes = vec![0x91; 10];
	bytes.push(0xc0);

	let opt = DecodeOptions {
		max_depth: 9,
		..DecodeOptions::default()
	};
	let err = decode(&bytes, &opt).expect_err("ten levels exceed nine");
	assert!(matches!(err, PackError::RecursionLimitExceeded { max_depth: 9 }));

	let opt = DecodeOptions {
		max_depth: 10,
		..DecodeOptions::default()
	};
	decode(&bytes, &opt).expect("ten levels fit");
}

#[test]
fn default_ceiling_stops_hostile_nesting() {
	let bytes = vec![0x91; 100_000];
	let err = decode(&bytes, &DecodeOptions::default()).expect_err("nesting is bounded");
	assert!(matches!(err, PackError::RecursionLimitExceeded { max_depth: 256 }));
}

#[test]
fn prefix_reports_consumed_bytes() {
	let bytes = [0x92, 0x01, 0x02, 0xc0, 0xff];
	let (value, consumed) = decode_prefix(&bytes, &DecodeOptions::default()).expect("prefix decodes");
	assert_eq!(value, Value::Array(vec![Value::Int(1), Value::Int(2)]));
	assert_eq!(consumed, 3);

	let err = decode(&bytes, &DecodeOptions::default()).expect_err("decode wants the whole input");
	assert!(matches!(err, PackError::TrailingBytes { consumed: 3, len: 5 }));
}
