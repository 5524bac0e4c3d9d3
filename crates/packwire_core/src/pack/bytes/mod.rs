use crate::pack::{PackError, Result, Width};

/// Bounded big-endian cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Fail unless at least `n` bytes remain, without advancing.
	pub fn ensure(&self, n: usize) -> Result<()> {
		if n > self.remaining() {
			return Err(PackError::TruncatedInput {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		self.ensure(n)?;
		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		let [byte] = self.read_array::<1>()?;
		Ok(byte)
	}

	/// Read a big-endian `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		self.read_array().map(u16::from_be_bytes)
	}

	/// Read a big-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		self.read_array().map(u32::from_be_bytes)
	}

	/// Read a big-endian `u64`.
	pub fn read_u64(&mut self) -> Result<u64> {
		self.read_array().map(u64::from_be_bytes)
	}

	/// Read a two's-complement `i8`.
	pub fn read_i8(&mut self) -> Result<i8> {
		self.read_array().map(i8::from_be_bytes)
	}

	/// Read a big-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		self.read_array().map(i16::from_be_bytes)
	}

	/// Read a big-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		self.read_array().map(i32::from_be_bytes)
	}

	/// Read a big-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		self.read_array().map(i64::from_be_bytes)
	}

	/// Read a big-endian IEEE single.
	pub fn read_f32(&mut self) -> Result<f32> {
		self.read_array().map(f32::from_be_bytes)
	}

	/// Read a big-endian IEEE double.
	pub fn read_f64(&mut self) -> Result<f64> {
		self.read_array().map(f64::from_be_bytes)
	}

	/// Read an unsigned length field of the given width.
	///
	/// `Inline` reads nothing and yields 0; the caller takes the length from
	/// the tag byte instead.
	pub fn read_len(&mut self, width: Width) -> Result<usize> {
		let len = match width {
			Width::Inline => 0,
			Width::W1 => u64::from(self.read_u8()?),
			Width::W2 => u64::from(self.read_u16()?),
			Width::W4 => u64::from(self.read_u32()?),
			Width::W8 => self.read_u64()?,
		};
		usize::try_from(len).map_err(|_| PackError::TruncatedInput {
			at: self.pos,
			need: usize::MAX,
			rem: self.remaining(),
		})
	}
}

#[cfg(test)]
mod tests;
