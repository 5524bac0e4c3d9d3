//! Minimal-tag selection for every value kind.
//!
//! All boundary decisions live here; the encoder only writes what these
//! functions return.

use crate::pack::marker::{FIXCOLLECTION_MAX_LEN, FIXSTR_MAX_LEN};
use crate::pack::{Marker, PackError, Result};

/// Byte width of the explicit length or magnitude field after a tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
	/// Payload is embedded in the tag byte.
	Inline,
	/// One byte.
	W1,
	/// Two bytes.
	W2,
	/// Four bytes.
	W4,
	/// Eight bytes.
	W8,
}

impl Width {
	/// Number of bytes occupied by the field.
	pub fn bytes(self) -> usize {
		match self {
			Self::Inline => 0,
			Self::W1 => 1,
			Self::W2 => 2,
			Self::W4 => 4,
			Self::W8 => 8,
		}
	}
}

/// Tag chosen for a value plus the width of the field that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
	/// Tag byte to emit.
	pub marker: Marker,
	/// Width of the length or magnitude field following the tag.
	pub width: Width,
}

impl Header {
	const fn new(marker: Marker, width: Width) -> Self {
		Self { marker, width }
	}
}

/// Variable-length kinds whose header carries a byte length or element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
	/// UTF-8 text, measured in bytes.
	Str,
	/// Opaque bytes.
	Bin,
	/// Element sequence, measured in elements.
	Array,
	/// Key/value mapping, measured in pairs.
	Map,
}

impl Family {
	/// Lowercase label used in error messages.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Str => "str",
			Self::Bin => "bin",
			Self::Array => "array",
			Self::Map => "map",
		}
	}
}

/// Pick the smallest unsigned tag for `value`.
pub fn classify_uint(value: u64) -> Header {
	match value {
		0..=0x7f => Header::new(Marker::FixPos(value as u8), Width::Inline),
		0x80..=0xff => Header::new(Marker::U8, Width::W1),
		0x100..=0xffff => Header::new(Marker::U16, Width::W2),
		0x1_0000..=0xffff_ffff => Header::new(Marker::U32, Width::W4),
		_ => Header::new(Marker::U64, Width::W8),
	}
}

/// Pick the smallest tag for a signed `value`.
///
/// Non-negative values use the unsigned families; only negative values use
/// the signed families.
pub fn classify_int(value: i64) -> Header {
	if value >= 0 {
		return classify_uint(value.unsigned_abs());
	}
	match value {
		-32..=-1 => Header::new(Marker::FixNeg(value as i8), Width::Inline),
		-0x80..=-33 => Header::new(Marker::I8, Width::W1),
		-0x8000..=-0x81 => Header::new(Marker::I16, Width::W2),
		-0x8000_0000..=-0x8001 => Header::new(Marker::I32, Width::W4),
		_ => Header::new(Marker::I64, Width::W8),
	}
}

/// Pick the smallest header for a str/bin byte length or array/map count.
pub fn classify_len(family: Family, len: usize) -> Result<Header> {
	if u32::try_from(len).is_err() {
		return Err(PackError::LengthOverflow { kind: family.as_str(), len });
	}

	let header = match family {
		Family::Str => match len {
			0..=FIXSTR_MAX_LEN => Header::new(Marker::FixStr(len as u8), Width::Inline),
			32..=0xff => Header::new(Marker::Str8, Width::W1),
			0x100..=0xffff => Header::new(Marker::Str16, Width::W2),
			_ => Header::new(Marker::Str32, Width::W4),
		},
		Family::Bin => match len {
			0..=0xff => Header::new(Marker::Bin8, Width::W1),
			0x100..=0xffff => Header::new(Marker::Bin16, Width::W2),
			_ => Header::new(Marker::Bin32, Width::W4),
		},
		Family::Array => match len {
			0..=FIXCOLLECTION_MAX_LEN => Header::new(Marker::FixArray(len as u8), Width::Inline),
			16..=0xffff => Header::new(Marker::Array16, Width::W2),
			_ => Header::new(Marker::Array32, Width::W4),
		},
		Family::Map => match len {
			0..=FIXCOLLECTION_MAX_LEN => Header::new(Marker::FixMap(len as u8), Width::Inline),
			16..=0xffff => Header::new(Marker::Map16, Width::W2),
			_ => Header::new(Marker::Map32, Width::W4),
		},
	};
	Ok(header)
}
