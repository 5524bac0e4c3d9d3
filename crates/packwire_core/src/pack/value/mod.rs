use indexmap::IndexMap;

/// Plain field-set reconstruction of a mapping: unique string keys in first
/// insertion order.
pub type FieldSet = IndexMap<String, Value>;

/// In-memory value tree covering every core MessagePack kind.
#[derive(Debug, Clone, Default)]
pub enum Value {
	/// Absent value.
	#[default]
	Nil,
	/// Boolean.
	Bool(bool),
	/// Signed integer; tag chosen by numeric value.
	Int(i64),
	/// Unsigned integer above `i64::MAX`.
	UInt(u64),
	/// Double-precision float.
	Float(f64),
	/// UTF-8 text.
	Str(String),
	/// Opaque bytes.
	Bin(Vec<u8>),
	/// Ordered elements.
	Array(Vec<Value>),
	/// Order-preserving key/value container; keys may repeat.
	Map(Vec<(Value, Value)>),
	/// Plain field-set with string keys.
	Object(FieldSet),
}

impl Value {
	/// Build a binary value.
	pub fn bin(bytes: impl Into<Vec<u8>>) -> Self {
		Self::Bin(bytes.into())
	}

	/// Build an order-preserving map from pairs.
	pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<Value>,
		V: Into<Value>,
	{
		Self::Map(pairs.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}

	/// Build a field-set from string-keyed pairs.
	pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		Self::Object(fields.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}

	/// Lowercase kind label.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Nil => "nil",
			Self::Bool(_) => "bool",
			Self::Int(_) | Self::UInt(_) => "int",
			Self::Float(_) => "float",
			Self::Str(_) => "str",
			Self::Bin(_) => "bin",
			Self::Array(_) => "array",
			Self::Map(_) => "map",
			Self::Object(_) => "object",
		}
	}

	/// True for `Nil`.
	pub fn is_nil(&self) -> bool {
		matches!(self, Self::Nil)
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Integer payload when it fits `i64`.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Int(value) => Some(*value),
			Self::UInt(value) => i64::try_from(*value).ok(),
			_ => None,
		}
	}

	/// Integer payload when it is non-negative.
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Self::Int(value) => u64::try_from(*value).ok(),
			Self::UInt(value) => Some(*value),
			_ => None,
		}
	}

	/// Float payload.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Float(value) => Some(*value),
			_ => None,
		}
	}

	/// Text payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(value) => Some(value),
			_ => None,
		}
	}

	/// Binary payload.
	pub fn as_bin(&self) -> Option<&[u8]> {
		match self {
			Self::Bin(value) => Some(value),
			_ => None,
		}
	}

	/// Array elements.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Ordered map pairs.
	pub fn as_map(&self) -> Option<&[(Value, Value)]> {
		match self {
			Self::Map(pairs) => Some(pairs),
			_ => None,
		}
	}

	/// Field-set entries.
	pub fn as_object(&self) -> Option<&FieldSet> {
		match self {
			Self::Object(fields) => Some(fields),
			_ => None,
		}
	}

	/// Look up the first map value whose key equals `key`, or a field-set
	/// entry when `key` is a string.
	pub fn get(&self, key: &Value) -> Option<&Value> {
		match self {
			Self::Map(pairs) => pairs.iter().find(|(candidate, _)| candidate == key).map(|(_, value)| value),
			Self::Object(fields) => key.as_str().and_then(|name| fields.get(name)),
			_ => None,
		}
	}

	/// Byte length for str/bin, element count for array, pair count for map
	/// and object, `None` for scalars.
	pub fn len(&self) -> Option<usize> {
		match self {
			Self::Str(value) => Some(value.len()),
			Self::Bin(value) => Some(value.len()),
			Self::Array(items) => Some(items.len()),
			Self::Map(pairs) => Some(pairs.len()),
			Self::Object(fields) => Some(fields.len()),
			_ => None,
		}
	}
}

/// Observational equality: integers compare numerically across `Int` and
/// `UInt`, floats compare bit-for-bit, field-sets ignore entry order.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Nil, Self::Nil) => true,
			(Self::Bool(left), Self::Bool(right)) => left == right,
			(Self::Int(left), Self::Int(right)) => left == right,
			(Self::UInt(left), Self::UInt(right)) => left == right,
			(Self::Int(signed), Self::UInt(unsigned)) | (Self::UInt(unsigned), Self::Int(signed)) => {
				u64::try_from(*signed).is_ok_and(|signed| signed == *unsigned)
			}
			(Self::Float(left), Self::Float(right)) => left.to_bits() == right.to_bits(),
			(Self::Str(left), Self::Str(right)) => left == right,
			(Self::Bin(left), Self::Bin(right)) => left == right,
			(Self::Array(left), Self::Array(right)) => left == right,
			(Self::Map(left), Self::Map(right)) => left == right,
			(Self::Object(left), Self::Object(right)) => left == right,
			_ => false,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! from_lossless_int {
	($($ty:ty),*) => {
		$(impl From<$ty> for Value {
			fn from(value: $ty) -> Self {
				Self::Int(i64::from(value))
			}
		})*
	};
}

from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(signed) => Self::Int(signed),
			Err(_) => Self::UInt(value),
		}
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<FieldSet> for Value {
	fn from(fields: FieldSet) -> Self {
		Self::Object(fields)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Nil, Into::into)
	}
}

impl FromIterator<Value> for Value {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self::Array(iter.into_iter().collect())
	}
}
