/// Smallest capacity allocated on the first write.
const MIN_CAPACITY: usize = 64;

/// Append-only byte sink with geometric growth.
///
/// Capacity at least doubles whenever a write does not fit, so `n` appends
/// cost O(n) copies in total. Multi-byte writes are big-endian.
#[derive(Debug, Default)]
pub struct ByteBuf {
	bytes: Vec<u8>,
}

impl ByteBuf {
	/// Create an empty buffer without allocating.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a buffer able to hold `capacity` bytes before growing.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bytes: Vec::with_capacity(capacity),
		}
	}

	/// Number of bytes written so far.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// True when nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Current allocated capacity.
	pub fn capacity(&self) -> usize {
		self.bytes.capacity()
	}

	/// Borrow the written bytes.
	pub fn as_slice(&self) -> &[u8] {
		&self.bytes
	}

	fn reserve(&mut self, extra: usize) {
		let need = self.bytes.len() + extra;
		let cap = self.bytes.capacity();
		if need <= cap {
			return;
		}
		let target = need.max(cap.saturating_mul(2)).max(MIN_CAPACITY);
		self.bytes.reserve_exact(target - self.bytes.len());
	}

	/// Append one byte.
	pub fn write_u8(&mut self, value: u8) {
		self.reserve(1);
		self.bytes.push(value);
	}

	/// Append a big-endian `u16`.
	pub fn write_u16(&mut self, value: u16) {
		self.write_bytes(&value.to_be_bytes());
	}

	/// Append a big-endian `u32`.
	pub fn write_u32(&mut self, value: u32) {
		self.write_bytes(&value.to_be_bytes());
	}

	/// Append a big-endian `u64`.
	pub fn write_u64(&mut self, value: u64) {
		self.write_bytes(&value.to_be_bytes());
	}

	/// Append raw bytes verbatim.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.reserve(bytes.len());
		self.bytes.extend_from_slice(bytes);
	}

	/// Yield exactly the written bytes, releasing spare capacity.
	pub fn into_bytes(mut self) -> Vec<u8> {
		self.bytes.shrink_to_fit();
		self.bytes
	}
}
