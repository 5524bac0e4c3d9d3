use std::path::PathBuf;

use packwire::pack::{DecodeOptions, decode};
use tracing::info;

use crate::cmd::io::read_encoded;
use crate::error::Result;

pub struct Args {
	pub input: PathBuf,
	pub usemap: bool,
	pub lossy_utf8: bool,
	pub max_depth: Option<u32>,
}

/// Decode one MessagePack value and print it as pretty JSON.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		usemap,
		lossy_utf8,
		max_depth,
	} = args;

	let mut options = DecodeOptions {
		usemap,
		lossy_utf8,
		..DecodeOptions::default()
	};
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let (compression, bytes) = read_encoded(&input)?;
	let value = decode(&bytes, &options)?;
	info!(len = bytes.len(), compression = compression.as_str(), kind = value.kind(), "decoded document");

	println!("{}", serde_json::to_string_pretty(&value)?);
	Ok(())
}
