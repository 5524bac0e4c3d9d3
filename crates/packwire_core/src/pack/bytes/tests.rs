use super::Cursor;
use crate::pack::{PackError, Width};

#[test]
fn reads_big_endian_fields_in_order() {
	let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0xff, 0xfe];
	let mut cursor = Cursor::new(&bytes);

	assert_eq!(cursor.read_u8().expect("u8 reads"), 0x01);
	assert_eq!(cursor.read_u16().expect("u16 reads"), 0x0203);
	assert_eq!(cursor.read_u32().expect("u32 reads"), 0x0405_0607);
	assert_eq!(cursor.read_i16().expect("i16 reads"), -2);
	assert_eq!(cursor.pos(), 9);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn truncated_read_reports_offset_and_does_not_advance() {
	let bytes = [0xaa, 0xbb, 0xcc];
	let mut cursor = Cursor::new(&bytes);
	cursor.read_u8().expect("first byte reads");

	let err = cursor.read_u32().expect_err("u32 needs four bytes");
	assert!(matches!(err, PackError::TruncatedInput { at: 1, need: 4, rem: 2 }));
	assert_eq!(cursor.pos(), 1, "failed read must not move the cursor");
	assert_eq!(cursor.read_u16().expect("u16 still fits"), 0xbbcc);
}

#[test]
fn read_len_honours_width() {
	let bytes = [0x10, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00];
	let mut cursor = Cursor::new(&bytes);

	assert_eq!(cursor.read_len(Width::Inline).expect("inline"), 0);
	assert_eq!(cursor.read_len(Width::W1).expect("w1"), 0x10);
	assert_eq!(cursor.read_len(Width::W2).expect("w2"), 0x0100);
	assert_eq!(cursor.read_len(Width::W4).expect("w4"), 0x0001_0000);

	let err = cursor.read_len(Width::W1).expect_err("input exhausted");
	assert_eq!(err.to_string(), "truncated input at offset 7, need 1 bytes, remaining 0");
}

#[test]
fn signed_and_float_reads() {
	let mut bytes = Vec::new();
	bytes.push(0x80);
	bytes.extend_from_slice(&(-2_i32).to_be_bytes());
	bytes.extend_from_slice(&1.5_f32.to_be_bytes());
	bytes.extend_from_slice(&(-0.25_f64).to_be_bytes());
	let mut cursor = Cursor::new(&bytes);

	assert_eq!(cursor.read_i8().expect("i8"), -128);
	assert_eq!(cursor.read_i32().expect("i32"), -2);
	assert_eq!(cursor.read_f32().expect("f32"), 1.5);
	assert_eq!(cursor.read_f64().expect("f64"), -0.25);
}
