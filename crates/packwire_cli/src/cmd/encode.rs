use std::path::PathBuf;

use packwire::pack::{encode, to_value};
use tracing::info;

use crate::cmd::io::{Compression, read_input, write_output};
use crate::error::Result;

pub struct Args {
	pub input: PathBuf,
	pub output: Option<PathBuf>,
	pub zstd: bool,
}

/// Parse JSON input and write its MessagePack encoding.
pub fn run(args: Args) -> Result<()> {
	let Args { input, output, zstd } = args;

	let raw = read_input(&input)?;
	let json: serde_json::Value = serde_json::from_slice(&raw)?;
	let bytes = encode(&to_value(&json)?)?;
	info!(json = raw.len(), encoded = bytes.len(), "encoded document");

	let compression = if zstd { Compression::Zstd } else { Compression::None };
	write_output(output.as_ref(), &bytes, compression)
}
