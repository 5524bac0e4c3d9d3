//! Compact MessagePack value codec.
//!
//! ```
//! use packwire::pack::{DecodeOptions, Value, decode, encode};
//!
//! let value = Value::map([("id", Value::from(7)), ("tags", Value::Array(vec!["a".into()]))]);
//! let bytes = encode(&value).expect("encodes");
//! assert_eq!(decode(&bytes, &DecodeOptions::with_usemap()).expect("decodes"), value);
//! ```

/// Value model, tag classification, encoding, decoding, and scanning.
pub mod pack;
