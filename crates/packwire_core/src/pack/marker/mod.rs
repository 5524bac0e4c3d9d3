//! Tag byte table of the MessagePack format.

/// Largest positive fixint.
pub const POS_FIXINT_MAX: u8 = 0x7f;
/// First fixmap tag; low nibble is the pair count.
pub const FIXMAP: u8 = 0x80;
/// First fixarray tag; low nibble is the element count.
pub const FIXARRAY: u8 = 0x90;
/// First fixstr tag; low five bits are the byte length.
pub const FIXSTR: u8 = 0xa0;
/// First negative fixint tag (-32).
pub const NEG_FIXINT: u8 = 0xe0;

/// Largest string byte length representable by a fixstr.
pub const FIXSTR_MAX_LEN: usize = 31;
/// Largest array or map count representable inline.
pub const FIXCOLLECTION_MAX_LEN: usize = 15;

/// Decoded meaning of a single tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
	/// `0x00-0x7f`, value inline.
	FixPos(u8),
	/// `0xe0-0xff`, value inline.
	FixNeg(i8),
	/// `0x80-0x8f`, pair count inline.
	FixMap(u8),
	/// `0x90-0x9f`, element count inline.
	FixArray(u8),
	/// `0xa0-0xbf`, byte length inline.
	FixStr(u8),
	/// `0xc0`
	Nil,
	/// `0xc1`, never valid.
	Reserved,
	/// `0xc2`
	False,
	/// `0xc3`
	True,
	/// `0xc4`
	Bin8,
	/// `0xc5`
	Bin16,
	/// `0xc6`
	Bin32,
	/// `0xc7`
	Ext8,
	/// `0xc8`
	Ext16,
	/// `0xc9`
	Ext32,
	/// `0xca`
	F32,
	/// `0xcb`
	F64,
	/// `0xcc`
	U8,
	/// `0xcd`
	U16,
	/// `0xce`
	U32,
	/// `0xcf`
	U64,
	/// `0xd0`
	I8,
	/// `0xd1`
	I16,
	/// `0xd2`
	I32,
	/// `0xd3`
	I64,
	/// `0xd4`
	FixExt1,
	/// `0xd5`
	FixExt2,
	/// `0xd6`
	FixExt4,
	/// `0xd7`
	FixExt8,
	/// `0xd8`
	FixExt16,
	/// `0xd9`
	Str8,
	/// `0xda`
	Str16,
	/// `0xdb`
	Str32,
	/// `0xdc`
	Array16,
	/// `0xdd`
	Array32,
	/// `0xde`
	Map16,
	/// `0xdf`
	Map32,
}

impl Marker {
	/// Classify a raw tag byte. Every byte maps to exactly one marker.
	pub fn from_u8(byte: u8) -> Self {
		match byte {
			0x00..=POS_FIXINT_MAX => Self::FixPos(byte),
			0x80..=0x8f => Self::FixMap(byte & 0x0f),
			0x90..=0x9f => Self::FixArray(byte & 0x0f),
			0xa0..=0xbf => Self::FixStr(byte & 0x1f),
			0xc0 => Self::Nil,
			0xc1 => Self::Reserved,
			0xc2 => Self::False,
			0xc3 => Self::True,
			0xc4 => Self::Bin8,
			0xc5 => Self::Bin16,
			0xc6 => Self::Bin32,
			0xc7 => Self::Ext8,
			0xc8 => Self::Ext16,
			0xc9 => Self::Ext32,
			0xca => Self::F32,
			0xcb => Self::F64,
			0xcc => Self::U8,
			0xcd => Self::U16,
			0xce => Self::U32,
			0xcf => Self::U64,
			0xd0 => Self::I8,
			0xd1 => Self::I16,
			0xd2 => Self::I32,
			0xd3 => Self::I64,
			0xd4 => Self::FixExt1,
			0xd5 => Self::FixExt2,
			0xd6 => Self::FixExt4,
			0xd7 => Self::FixExt8,
			0xd8 => Self::FixExt16,
			0xd9 => Self::Str8,
			0xda => Self::Str16,
			0xdb => Self::Str32,
			0xdc => Self::Array16,
			0xdd => Self::Array32,
			0xde => Self::Map16,
			0xdf => Self::Map32,
			NEG_FIXINT..=0xff => Self::FixNeg(byte as i8),
		}
	}

	/// Render the marker back to its tag byte.
	pub fn to_u8(self) -> u8 {
		match self {
			Self::FixPos(value) => value & POS_FIXINT_MAX,
			Self::FixNeg(value) => (value as u8) | NEG_FIXINT,
			Self::FixMap(count) => FIXMAP | (count & 0x0f),
			Self::FixArray(count) => FIXARRAY | (count & 0x0f),
			Self::FixStr(len) => FIXSTR | (len & 0x1f),
			Self::Nil => 0xc0,
			Self::Reserved => 0xc1,
			Self::False => 0xc2,
			Self::True => 0xc3,
			Self::Bin8 => 0xc4,
			Self::Bin16 => 0xc5,
			Self::Bin32 => 0xc6,
			Self::Ext8 => 0xc7,
			Self::Ext16 => 0xc8,
			Self::Ext32 => 0xc9,
			Self::F32 => 0xca,
			Self::F64 => 0xcb,
			Self::U8 => 0xcc,
			Self::U16 => 0xcd,
			Self::U32 => 0xce,
			Self::U64 => 0xcf,
			Self::I8 => 0xd0,
			Self::I16 => 0xd1,
			Self::I32 => 0xd2,
			Self::I64 => 0xd3,
			Self::FixExt1 => 0xd4,
			Self::FixExt2 => 0xd5,
			Self::FixExt4 => 0xd6,
			Self::FixExt8 => 0xd7,
			Self::FixExt16 => 0xd8,
			Self::Str8 => 0xd9,
			Self::Str16 => 0xda,
			Self::Str32 => 0xdb,
			Self::Array16 => 0xdc,
			Self::Array32 => 0xdd,
			Self::Map16 => 0xde,
			Self::Map32 => 0xdf,
		}
	}

	/// Stable lowercase label used by inspection output.
	pub fn name(self) -> &'static str {
		match self {
			Self::FixPos(_) => "positive_fixint",
			Self::FixNeg(_) => "negative_fixint",
			Self::FixMap(_) => "fixmap",
			Self::FixArray(_) => "fixarray",
			Self::FixStr(_) => "fixstr",
			Self::Nil => "nil",
			Self::Reserved => "reserved",
			Self::False => "false",
			Self::True => "true",
			Self::Bin8 => "bin8",
			Self::Bin16 => "bin16",
			Self::Bin32 => "bin32",
			Self::Ext8 => "ext8",
			Self::Ext16 => "ext16",
			Self::Ext32 => "ext32",
			Self::F32 => "float32",
			Self::F64 => "float64",
			Self::U8 => "uint8",
			Self::U16 => "uint16",
			Self::U32 => "uint32",
			Self::U64 => "uint64",
			Self::I8 => "int8",
			Self::I16 => "int16",
			Self::I32 => "int32",
			Self::I64 => "int64",
			Self::FixExt1 => "fixext1",
			Self::FixExt2 => "fixext2",
			Self::FixExt4 => "fixext4",
			Self::FixExt8 => "fixext8",
			Self::FixExt16 => "fixext16",
			Self::Str8 => "str8",
			Self::Str16 => "str16",
			Self::Str32 => "str32",
			Self::Array16 => "array16",
			Self::Array32 => "array32",
			Self::Map16 => "map16",
			Self::Map32 => "map32",
		}
	}

	/// True for the extension families, which carry no core value kind.
	pub fn is_ext(self) -> bool {
		matches!(
			self,
			Self::Ext8 | Self::Ext16 | Self::Ext32 | Self::FixExt1 | Self::FixExt2 | Self::FixExt4 | Self::FixExt8 | Self::FixExt16
		)
	}
}
