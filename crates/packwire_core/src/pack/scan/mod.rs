use tracing::trace;

use crate::pack::bytes::Cursor;
use crate::pack::{Marker, PackError, Result, Width};

/// Limits for tag scanning.
#[derive(Debug, Clone)]
pub struct ScanOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self { max_depth: 1024 }
	}
}

/// One tag observed while scanning an encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRecord {
	/// Byte offset of the tag.
	pub offset: usize,
	/// Container nesting depth; the top-level value is 0.
	pub depth: u32,
	/// Decoded tag.
	pub marker: Marker,
	/// Byte length for str/bin, element count for arrays, pair count for
	/// maps, payload width for scalars.
	pub len: usize,
}

/// Walk one encoded value and list every tag in document order.
///
/// Uses an explicit stack of pending child counts, so arbitrarily deep input
/// never grows the call stack.
pub fn scan_markers(bytes: &[u8], opt: &ScanOptions) -> Result<Vec<MarkerRecord>> {
	let mut cursor = Cursor::new(bytes);
	let mut records = Vec::new();
	let mut pending: Vec<usize> = vec![1];

	while let Some(remaining) = pending.last_mut() {
		if *remaining == 0 {
			pending.pop();
			continue;
		}
		*remaining -= 1;

		let depth = (pending.len() - 1) as u32;
		let offset = cursor.pos();
		let marker = Marker::from_u8(cursor.read_u8()?);
		let (len, children) = read_shape(&mut cursor, marker, offset)?;
		records.push(MarkerRecord { offset, depth, marker, len });

		if let Some(children) = children {
			if depth >= opt.max_depth {
				return Err(PackError::RecursionLimitExceeded { max_depth: opt.max_depth });
			}
			cursor.ensure(children)?;
			pending.push(children);
		}
	}

	if cursor.remaining() > 0 {
		return Err(PackError::TrailingBytes {
			consumed: cursor.pos(),
			len: bytes.len(),
		});
	}

	trace!(tags = records.len(), len = bytes.len(), "scanned markers");
	Ok(records)
}

/// Consume the header and any opaque payload of `marker`, returning the
/// record length and, for containers, the number of child values.
fn read_shape(cursor: &mut Cursor<'_>, marker: Marker, at: usize) -> Result<(usize, Option<usize>)> {
	let shape = match marker {
		Marker::FixPos(_) | Marker::FixNeg(_) | Marker::Nil | Marker::False | Marker::True => (0, None),
		Marker::U8 | Marker::I8 => (skip(cursor, 1)?, None),
		Marker::U16 | Marker::I16 => (skip(cursor, 2)?, None),
		Marker::U32 | Marker::I32 | Marker::F32 => (skip(cursor, 4)?, None),
		Marker::U64 | Marker::I64 | Marker::F64 => (skip(cursor, 8)?, None),
		Marker::FixStr(len) => (skip(cursor, usize::from(len))?, None),
		Marker::Str8 | Marker::Bin8 => (skip_sized(cursor, Width::W1)?, None),
		Marker::Str16 | Marker::Bin16 => (skip_sized(cursor, Width::W2)?, None),
		Marker::Str32 | Marker::Bin32 => (skip_sized(cursor, Width::W4)?, None),
		Marker::FixArray(count) => (usize::from(count), Some(usize::from(count))),
		Marker::Array16 => {
			let count = cursor.read_len(Width::W2)?;
			(count, Some(count))
		}
		Marker::Array32 => {
			let count = cursor.read_len(Width::W4)?;
			(count, Some(count))
		}
		Marker::FixMap(count) => (usize::from(count), Some(usize::from(count) * 2)),
		Marker::Map16 => {
			let count = cursor.read_len(Width::W2)?;
			(count, Some(count.saturating_mul(2)))
		}
		Marker::Map32 => {
			let count = cursor.read_len(Width::W4)?;
			(count, Some(count.saturating_mul(2)))
		}
		Marker::Reserved => return Err(PackError::MalformedInput { at, tag: marker.to_u8() }),
		ext => return Err(PackError::UnsupportedExtension { at, tag: ext.to_u8() }),
	};
	Ok(shape)
}

fn skip(cursor: &mut Cursor<'_>, len: usize) -> Result<usize> {
	cursor.read_exact(len)?;
	Ok(len)
}

fn skip_sized(cursor: &mut Cursor<'_>, width: Width) -> Result<usize> {
	let len = cursor.read_len(width)?;
	skip(cursor, len)
}
