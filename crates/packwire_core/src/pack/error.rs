use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors produced while encoding, decoding, and scanning MessagePack data.
#[derive(Debug, Error)]
pub enum PackError {
	/// Value kind has no wire representation.
	#[error("unsupported type: {kind}")]
	UnsupportedType {
		/// Description of the rejected kind.
		kind: String,
	},
	/// Encode nesting exceeded the configured ceiling.
	#[error("encode depth exceeded (max={max_depth}); value graph is self-referential or too deep")]
	CyclicReference {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// String, binary, or collection length does not fit a 32-bit length field.
	#[error("{kind} length {len} exceeds the 32-bit length field")]
	LengthOverflow {
		/// Length family being classified.
		kind: &'static str,
		/// Offending byte length or element count.
		len: usize,
	},
	/// Tag byte is reserved and never valid.
	#[error("malformed input: invalid tag 0x{tag:02x} at offset {at}")]
	MalformedInput {
		/// Byte offset of the tag.
		at: usize,
		/// Offending tag byte.
		tag: u8,
	},
	/// Extension tags are outside the value model.
	#[error("unsupported extension tag 0x{tag:02x} at offset {at}")]
	UnsupportedExtension {
		/// Byte offset of the tag.
		at: usize,
		/// Extension tag byte.
		tag: u8,
	},
	/// Not enough bytes remained for a requested read.
	#[error("truncated input at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedInput {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Text payload was not valid UTF-8.
	#[error("invalid utf-8 in string payload at offset {at}")]
	InvalidUtf8 {
		/// Byte offset of the string payload.
		at: usize,
		/// Underlying validation failure.
		#[source]
		source: std::str::Utf8Error,
	},
	/// Decode nesting exceeded the configured ceiling.
	#[error("recursion limit exceeded (max={max_depth})")]
	RecursionLimitExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Field-set reconstruction met a key with no string form.
	#[error("unsupported {kind} map key at offset {at}")]
	UnsupportedKey {
		/// Byte offset of the key.
		at: usize,
		/// Logical kind of the key.
		kind: &'static str,
	},
	/// Input continued after one complete value.
	#[error("trailing bytes after value: consumed {consumed} of {len}")]
	TrailingBytes {
		/// Bytes consumed by the value.
		consumed: usize,
		/// Total input length.
		len: usize,
	},
	/// Message raised by a `Serialize` implementation.
	#[error("serialize: {message}")]
	Serde {
		/// Message text.
		message: String,
	},
}

impl serde::ser::Error for PackError {
	fn custom<T: std::fmt::Display>(msg: T) -> Self {
		Self::Serde { message: msg.to_string() }
	}
}
