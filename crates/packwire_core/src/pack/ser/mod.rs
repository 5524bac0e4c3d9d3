//! Bridge between the serde data model and [`Value`].
//!
//! [`to_value`] lowers any `T: Serialize` into a value tree; the `Serialize`
//! impl for [`Value`] lets decoded trees be rendered by any serde format.

use serde::ser::{self, Serialize, SerializeMap as _, Serializer};

use crate::pack::{EncodeOptions, FieldSet, PackError, Result, Value, encode};

/// Lower a serializable value into a [`Value`] tree.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
	value.serialize(ValueSerializer {
		depth: 0,
		max_depth: EncodeOptions::default().max_depth,
	})
}

/// Lower a serializable value and encode it.
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
	encode(&to_value(value)?)
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Nil => serializer.serialize_unit(),
			Self::Bool(flag) => serializer.serialize_bool(*flag),
			Self::Int(number) => serializer.serialize_i64(*number),
			Self::UInt(number) => serializer.serialize_u64(*number),
			Self::Float(number) => serializer.serialize_f64(*number),
			Self::Str(text) => serializer.serialize_str(text),
			Self::Bin(bytes) => serializer.serialize_bytes(bytes),
			Self::Array(items) => serializer.collect_seq(items),
			Self::Map(pairs) => {
				let mut map = serializer.serialize_map(Some(pairs.len()))?;
				for (key, value) in pairs {
					map.serialize_entry(key, value)?;
				}
				map.end()
			}
			Self::Object(fields) => serializer.collect_map(fields),
		}
	}
}

#[derive(Debug, Clone, Copy)]
struct ValueSerializer {
	depth: u32,
	max_depth: u32,
}

impl ValueSerializer {
	fn nested(self) -> Result<Self> {
		if self.depth >= self.max_depth {
			return Err(PackError::CyclicReference { max_depth: self.max_depth });
		}
		Ok(Self {
			depth: self.depth + 1,
			..self
		})
	}
}

fn out_of_range(kind: &str, value: impl std::fmt::Display) -> PackError {
	PackError::UnsupportedType {
		kind: format!("{kind} {value} outside the 64-bit integer range"),
	}
}

impl Serializer for ValueSerializer {
	type Ok = Value;
	type Error = PackError;
	type SerializeSeq = SeqBuilder;
	type SerializeTuple = SeqBuilder;
	type SerializeTupleStruct = SeqBuilder;
	type SerializeTupleVariant = VariantBuilder<SeqBuilder>;
	type SerializeMap = MapBuilder;
	type SerializeStruct = ObjectBuilder;
	type SerializeStructVariant = VariantBuilder<ObjectBuilder>;

	fn is_human_readable(&self) -> bool {
		false
	}

	fn serialize_bool(self, v: bool) -> Result<Value> {
		Ok(Value::Bool(v))
	}

	fn serialize_i8(self, v: i8) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_i16(self, v: i16) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_i32(self, v: i32) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_i64(self, v: i64) -> Result<Value> {
		Ok(Value::Int(v))
	}

	fn serialize_i128(self, v: i128) -> Result<Value> {
		if let Ok(signed) = i64::try_from(v) {
			return Ok(Value::Int(signed));
		}
		u64::try_from(v).map(Value::UInt).map_err(|_| out_of_range("i128", v))
	}

	fn serialize_u8(self, v: u8) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_u16(self, v: u16) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_u32(self, v: u32) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_u64(self, v: u64) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_u128(self, v: u128) -> Result<Value> {
		u64::try_from(v).map(Value::from).map_err(|_| out_of_range("u128", v))
	}

	fn serialize_f32(self, v: f32) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_f64(self, v: f64) -> Result<Value> {
		Ok(Value::Float(v))
	}

	fn serialize_char(self, v: char) -> Result<Value> {
		Ok(Value::Str(v.to_string()))
	}

	fn serialize_str(self, v: &str) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
		Ok(Value::bin(v))
	}

	fn serialize_none(self) -> Result<Value> {
		Ok(Value::Nil)
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> Result<Value> {
		Ok(Value::Nil)
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
		Ok(Value::Nil)
	}

	fn serialize_unit_variant(self, _name: &'static str, _index: u32, variant: &'static str) -> Result<Value> {
		Ok(Value::from(variant))
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _name: &'static str, value: &T) -> Result<Value> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(self, _name: &'static str, _index: u32, variant: &'static str, value: &T) -> Result<Value> {
		let inner = value.serialize(self.nested()?)?;
		Ok(Value::object([(variant, inner)]))
	}

	fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder> {
		Ok(SeqBuilder {
			items: Vec::with_capacity(len.unwrap_or(0)),
			inner: self.nested()?,
		})
	}

	fn serialize_tuple(self, len: usize) -> Result<SeqBuilder> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqBuilder> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_variant(self, _name: &'static str, _index: u32, variant: &'static str, len: usize) -> Result<VariantBuilder<SeqBuilder>> {
		Ok(VariantBuilder {
			variant,
			body: self.nested()?.serialize_seq(Some(len))?,
		})
	}

	fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder> {
		Ok(MapBuilder {
			pairs: Vec::with_capacity(len.unwrap_or(0)),
			key: None,
			inner: self.nested()?,
		})
	}

	fn serialize_struct(self, _name: &'static str, len: usize) -> Result<ObjectBuilder> {
		Ok(ObjectBuilder {
			fields: FieldSet::with_capacity(len),
			inner: self.nested()?,
		})
	}

	fn serialize_struct_variant(self, _name: &'static str, _index: u32, variant: &'static str, len: usize) -> Result<VariantBuilder<ObjectBuilder>> {
		Ok(VariantBuilder {
			variant,
			body: self.nested()?.serialize_struct(variant, len)?,
		})
	}
}

pub struct SeqBuilder {
	items: Vec<Value>,
	inner: ValueSerializer,
}

impl SeqBuilder {
	fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.items.push(value.serialize(self.inner)?);
		Ok(())
	}
}

impl ser::SerializeSeq for SeqBuilder {
	type Ok = Value;
	type Error = PackError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.push(value)
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Array(self.items))
	}
}

impl ser::SerializeTuple for SeqBuilder {
	type Ok = Value;
	type Error = PackError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.push(value)
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Array(self.items))
	}
}

impl ser::SerializeTupleStruct for SeqBuilder {
	type Ok = Value;
	type Error = PackError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.push(value)
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Array(self.items))
	}
}

pub struct MapBuilder {
	pairs: Vec<(Value, Value)>,
	key: Option<Value>,
	inner: ValueSerializer,
}

impl ser::SerializeMap for MapBuilder {
	type Ok = Value;
	type Error = PackError;

	fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
		self.key = Some(key.serialize(self.inner)?);
		Ok(())
	}

	fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		let key = self.key.take().ok_or_else(|| PackError::Serde {
			message: "map value serialized before its key".to_owned(),
		})?;
		self.pairs.push((key, value.serialize(self.inner)?));
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Map(self.pairs))
	}
}

pub struct ObjectBuilder {
	fields: FieldSet,
	inner: ValueSerializer,
}

impl ser::SerializeStruct for ObjectBuilder {
	type Ok = Value;
	type Error = PackError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
		self.fields.insert(key.to_owned(), value.serialize(self.inner)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Object(self.fields))
	}
}

pub struct VariantBuilder<B> {
	variant: &'static str,
	body: B,
}

impl ser::SerializeTupleVariant for VariantBuilder<SeqBuilder> {
	type Ok = Value;
	type Error = PackError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.body.push(value)
	}

	fn end(self) -> Result<Value> {
		Ok(Value::object([(self.variant, Value::Array(self.body.items))]))
	}
}

impl ser::SerializeStructVariant for VariantBuilder<ObjectBuilder> {
	type Ok = Value;
	type Error = PackError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
		ser::SerializeStruct::serialize_field(&mut self.body, key, value)
	}

	fn end(self) -> Result<Value> {
		Ok(Value::object([(self.variant, Value::Object(self.body.fields))]))
	}
}
