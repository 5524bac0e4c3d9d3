use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CliError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
const STDIO: &str = "-";
/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression detected on an input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw bytes.
	None,
	/// zstd frame.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Read all bytes from `path`, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
	let raw = if path.as_os_str() == STDIO {
		let mut out = Vec::new();
		std::io::stdin().lock().read_to_end(&mut out)?;
		out
	} else {
		std::fs::read(path)?
	};
	debug!(path = %path.display(), len = raw.len(), "read input");
	Ok(raw)
}

/// Read encoded input, unwrapping a zstd frame when present.
pub fn read_encoded(path: &Path) -> Result<(Compression, Vec<u8>)> {
	unwrap_frame(read_input(path)?)
}

/// Detect a zstd frame by magic and decompress it; other input passes through.
pub fn unwrap_frame(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if !raw.starts_with(&ZSTD_MAGIC) {
		return Ok((Compression::None, raw));
	}

	let mut decoder = zstd::stream::read::Decoder::new(raw.as_slice())?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(CliError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	debug!(compressed = raw.len(), len = out.len(), "unwrapped zstd frame");
	Ok((Compression::Zstd, out))
}

/// Write `bytes` to `output` (stdout when `None` or `-`), optionally zstd-framed.
pub fn write_output(output: Option<&PathBuf>, bytes: &[u8], compression: Compression) -> Result<()> {
	let framed;
	let payload = match compression {
		Compression::None => bytes,
		Compression::Zstd => {
			framed = zstd::stream::encode_all(bytes, 0)?;
			framed.as_slice()
		}
	};

	match output {
		Some(path) if path.as_os_str() != STDIO => std::fs::write(path, payload)?,
		_ => {
			let mut stdout = std::io::stdout().lock();
			stdout.write_all(payload)?;
			stdout.flush()?;
		}
	}
	debug!(len = payload.len(), compression = compression.as_str(), "wrote output");
	Ok(())
}
