use packwire::pack::PackError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `packwire` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem, stdio, or zstd stream failure.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
	/// Codec failure.
	#[error(transparent)]
	Pack(#[from] PackError),
	/// JSON parse or render failure.
	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),
	/// zstd frame expanded past the safety cap.
	#[error("decompressed input exceeds limit of {limit} bytes")]
	DecompressedTooLarge {
		/// Byte cap applied while decompressing.
		limit: usize,
	},
}
