mod buffer;
mod bytes;
mod classify;
mod decode;
mod encode;
mod error;
mod marker;
mod scan;
mod ser;
mod value;

/// Growable output buffer used by the encoder.
pub use buffer::ByteBuf;
/// Bounded big-endian input cursor.
pub use bytes::Cursor;
/// Minimal-tag classification for integers and lengths.
pub use classify::{Family, Header, Width, classify_int, classify_len, classify_uint};
/// Decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_prefix};
/// Encoding entry points and options.
pub use encode::{EncodeOptions, encode, encode_with};
/// Error and result aliases.
pub use error::{PackError, Result};
/// Tag byte table.
pub use marker::Marker;
/// Tag scanning without value construction.
pub use scan::{MarkerRecord, ScanOptions, scan_markers};
/// Serde bridge entry points.
pub use ser::{to_value, to_vec};
/// Value tree types.
pub use value::{FieldSet, Value};
