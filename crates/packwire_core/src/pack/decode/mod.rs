use tracing::{debug, trace};

use crate::pack::bytes::Cursor;
use crate::pack::{FieldSet, Marker, PackError, Result, Value, Width};

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Reconstruct mappings as order-preserving [`Value::Map`] instead of
	/// [`Value::Object`].
	pub usemap: bool,
	/// Replace invalid UTF-8 in text payloads with U+FFFD instead of failing.
	pub lossy_utf8: bool,
	/// Maximum container nesting depth.
	pub max_depth: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			usemap: false,
			lossy_utf8: false,
			max_depth: 256,
		}
	}
}

impl DecodeOptions {
	/// Preset that keeps mappings ordered and duplicate-preserving.
	pub fn with_usemap() -> Self {
		Self {
			usemap: true,
			..Self::default()
		}
	}

	/// Preset that accepts invalid UTF-8 text.
	pub fn permissive() -> Self {
		Self {
			lossy_utf8: true,
			..Self::default()
		}
	}
}

/// Decode exactly one value spanning the whole input.
pub fn decode(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let (value, consumed) = decode_prefix(bytes, opt)?;
	if consumed != bytes.len() {
		debug!(consumed, len = bytes.len(), "decode left trailing bytes");
		return Err(PackError::TrailingBytes { consumed, len: bytes.len() });
	}
	Ok(value)
}

/// Decode one value from the start of `bytes`, returning it with the number
/// of bytes consumed.
pub fn decode_prefix(bytes: &[u8], opt: &DecodeOptions) -> Result<(Value, usize)> {
	let mut cursor = Cursor::new(bytes);
	match decode_value(&mut cursor, opt, 0) {
		Ok(value) => {
			trace!(kind = value.kind(), consumed = cursor.pos(), usemap = opt.usemap, "decoded value");
			Ok((value, cursor.pos()))
		}
		Err(err) => {
			debug!(len = bytes.len(), at = cursor.pos(), error = %err, "decode failed");
			Err(err)
		}
	}
}

fn decode_value(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let at = cursor.pos();
	let marker = Marker::from_u8(cursor.read_u8()?);

	let value = match marker {
		Marker::FixPos(value) => Value::Int(i64::from(value)),
		Marker::FixNeg(value) => Value::Int(i64::from(value)),
		Marker::Nil => Value::Nil,
		Marker::False => Value::Bool(false),
		Marker::True => Value::Bool(true),
		Marker::U8 => Value::Int(i64::from(cursor.read_u8()?)),
		Marker::U16 => Value::Int(i64::from(cursor.read_u16()?)),
		Marker::U32 => Value::Int(i64::from(cursor.read_u32()?)),
		Marker::U64 => Value::from(cursor.read_u64()?),
		Marker::I8 => Value::Int(i64::from(cursor.read_i8()?)),
		Marker::I16 => Value::Int(i64::from(cursor.read_i16()?)),
		Marker::I32 => Value::Int(i64::from(cursor.read_i32()?)),
		Marker::I64 => Value::Int(cursor.read_i64()?),
		Marker::F32 => Value::Float(f64::from(cursor.read_f32()?)),
		Marker::F64 => Value::Float(cursor.read_f64()?),
		Marker::FixStr(len) => decode_str(cursor, usize::from(len), opt)?,
		Marker::Str8 => decode_sized_str(cursor, Width::W1, opt)?,
		Marker::Str16 => decode_sized_str(cursor, Width::W2, opt)?,
		Marker::Str32 => decode_sized_str(cursor, Width::W4, opt)?,
		Marker::Bin8 => decode_bin(cursor, Width::W1)?,
		Marker::Bin16 => decode_bin(cursor, Width::W2)?,
		Marker::Bin32 => decode_bin(cursor, Width::W4)?,
		Marker::FixArray(count) => decode_array(cursor, usize::from(count), opt, depth)?,
		Marker::Array16 => {
			let count = cursor.read_len(Width::W2)?;
			decode_array(cursor, count, opt, depth)?
		}
		Marker::Array32 => {
			let count = cursor.read_len(Width::W4)?;
			decode_array(cursor, count, opt, depth)?
		}
		Marker::FixMap(count) => decode_map(cursor, usize::from(count), opt, depth)?,
		Marker::Map16 => {
			let count = cursor.read_len(Width::W2)?;
			decode_map(cursor, count, opt, depth)?
		}
		Marker::Map32 => {
			let count = cursor.read_len(Width::W4)?;
			decode_map(cursor, count, opt, depth)?
		}
		Marker::Reserved => return Err(PackError::MalformedInput { at, tag: marker.to_u8() }),
		ext => return Err(PackError::UnsupportedExtension { at, tag: ext.to_u8() }),
	};
	Ok(value)
}

fn decode_sized_str(cursor: &mut Cursor<'_>, width: Width, opt: &DecodeOptions) -> Result<Value> {
	let len = cursor.read_len(width)?;
	decode_str(cursor, len, opt)
}

fn decode_str(cursor: &mut Cursor<'_>, len: usize, opt: &DecodeOptions) -> Result<Value> {
	let at = cursor.pos();
	let raw = cursor.read_exact(len)?;
	let text = match std::str::from_utf8(raw) {
		Ok(text) => text.to_owned(),
		Err(_) if opt.lossy_utf8 => String::from_utf8_lossy(raw).into_owned(),
		Err(source) => return Err(PackError::InvalidUtf8 { at, source }),
	};
	Ok(Value::Str(text))
}

fn decode_bin(cursor: &mut Cursor<'_>, width: Width) -> Result<Value> {
	let len = cursor.read_len(width)?;
	Ok(Value::Bin(cursor.read_exact(len)?.to_vec()))
}

/// Check nesting and that `min_bytes` could still follow, before allocating.
fn enter(cursor: &Cursor<'_>, min_bytes: usize, opt: &DecodeOptions, depth: u32) -> Result<u32> {
	if depth >= opt.max_depth {
		return Err(PackError::RecursionLimitExceeded { max_depth: opt.max_depth });
	}
	cursor.ensure(min_bytes)?;
	Ok(depth + 1)
}

fn decode_array(cursor: &mut Cursor<'_>, count: usize, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let depth = enter(cursor, count, opt, depth)?;
	let mut items = Vec::with_capacity(count);
	for _ in 0..count {
		items.push(decode_value(cursor, opt, depth)?);
	}
	Ok(Value::Array(items))
}

fn decode_map(cursor: &mut Cursor<'_>, count: usize, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let depth = enter(cursor, count.saturating_mul(2), opt, depth)?;

	if opt.usemap {
		let mut pairs = Vec::with_capacity(count);
		for _ in 0..count {
			let key = decode_value(cursor, opt, depth)?;
			let value = decode_value(cursor, opt, depth)?;
			pairs.push((key, value));
		}
		return Ok(Value::Map(pairs));
	}

	let mut fields = FieldSet::with_capacity(count);
	for _ in 0..count {
		let at = cursor.pos();
		let key = field_name(decode_value(cursor, opt, depth)?, at)?;
		let value = decode_value(cursor, opt, depth)?;
		fields.insert(key, value);
	}
	Ok(Value::Object(fields))
}

/// String form of a decoded key in field-set mode.
fn field_name(key: Value, at: usize) -> Result<String> {
	match key {
		Value::Str(name) => Ok(name),
		Value::Int(number) => Ok(number.to_string()),
		Value::UInt(number) => Ok(number.to_string()),
		Value::Bool(flag) => Ok(flag.to_string()),
		Value::Nil => Ok("null".to_owned()),
		Value::Float(number) => Ok(number.to_string()),
		other => Err(PackError::UnsupportedKey { at, kind: other.kind() }),
	}
}

#[cfg(test)]
mod tests;
