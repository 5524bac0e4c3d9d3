use tracing::{debug, trace};

use crate::pack::buffer::ByteBuf;
use crate::pack::classify::{Family, Header, Width, classify_int, classify_len, classify_uint};
use crate::pack::{FieldSet, Marker, PackError, Result, Value};

/// Runtime limits for encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum container nesting depth before the graph is treated as cyclic.
	pub max_depth: u32,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self { max_depth: 256 }
	}
}

/// Encode one value with default options.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
	encode_with(value, &EncodeOptions::default())
}

/// Encode one value into a fresh, exact-length byte vector.
pub fn encode_with(value: &Value, opt: &EncodeOptions) -> Result<Vec<u8>> {
	let mut encoder = Encoder::new(opt);
	match encoder.write_value(value, 0) {
		Ok(()) => {
			let bytes = encoder.buf.into_bytes();
			trace!(kind = value.kind(), len = bytes.len(), "encoded value");
			Ok(bytes)
		}
		Err(err) => {
			debug!(kind = value.kind(), error = %err, "encode failed");
			Err(err)
		}
	}
}

struct Encoder<'o> {
	buf: ByteBuf,
	opt: &'o EncodeOptions,
}

impl<'o> Encoder<'o> {
	fn new(opt: &'o EncodeOptions) -> Self {
		Self { buf: ByteBuf::new(), opt }
	}

	fn write_value(&mut self, value: &Value, depth: u32) -> Result<()> {
		match value {
			Value::Nil => self.buf.write_u8(Marker::Nil.to_u8()),
			Value::Bool(true) => self.buf.write_u8(Marker::True.to_u8()),
			Value::Bool(false) => self.buf.write_u8(Marker::False.to_u8()),
			Value::Int(number) => self.write_header(classify_int(*number), *number as u64),
			Value::UInt(number) => self.write_header(classify_uint(*number), *number),
			Value::Float(number) => {
				self.buf.write_u8(Marker::F64.to_u8());
				self.buf.write_u64(number.to_bits());
			}
			Value::Str(text) => self.write_sized(Family::Str, text.as_bytes())?,
			Value::Bin(bytes) => self.write_sized(Family::Bin, bytes)?,
			Value::Array(items) => {
				let depth = self.descend(depth)?;
				self.write_len(Family::Array, items.len())?;
				for item in items {
					self.write_value(item, depth)?;
				}
			}
			Value::Map(pairs) => {
				let depth = self.descend(depth)?;
				self.write_len(Family::Map, pairs.len())?;
				for (key, item) in pairs {
					self.write_value(key, depth)?;
					self.write_value(item, depth)?;
				}
			}
			Value::Object(fields) => self.write_object(fields, depth)?,
		}
		Ok(())
	}

	fn write_object(&mut self, fields: &FieldSet, depth: u32) -> Result<()> {
		let depth = self.descend(depth)?;
		self.write_len(Family::Map, fields.len())?;
		for (name, item) in fields {
			self.write_sized(Family::Str, name.as_bytes())?;
			self.write_value(item, depth)?;
		}
		Ok(())
	}

	fn descend(&self, depth: u32) -> Result<u32> {
		if depth >= self.opt.max_depth {
			return Err(PackError::CyclicReference { max_depth: self.opt.max_depth });
		}
		Ok(depth + 1)
	}

	fn write_sized(&mut self, family: Family, payload: &[u8]) -> Result<()> {
		self.write_len(family, payload.len())?;
		self.buf.write_bytes(payload);
		Ok(())
	}

	fn write_len(&mut self, family: Family, len: usize) -> Result<()> {
		let header = classify_len(family, len)?;
		self.write_header(header, len as u64);
		Ok(())
	}

	/// Emit the tag, then the low `width` bytes of `field` big-endian.
	///
	/// Negative integers arrive sign-extended, so truncation keeps their
	/// two's-complement form.
	fn write_header(&mut self, header: Header, field: u64) {
		self.buf.write_u8(header.marker.to_u8());
		match header.width {
			Width::Inline => {}
			Width::W1 => self.buf.write_u8(field as u8),
			Width::W2 => self.buf.write_u16(field as u16),
			Width::W4 => self.buf.write_u32(field as u32),
			Width::W8 => self.buf.write_u64(field),
		}
	}
}
