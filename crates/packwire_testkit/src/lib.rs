//! Shared test helpers for workspace crates.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One-byte UTF-8 sample character.
pub const ASCII: char = 'a';
/// Two-byte UTF-8 sample character.
pub const GREEK: char = 'α';
/// Three-byte UTF-8 sample character.
pub const ASIAN: char = '亜';

/// Every length boundary the wire format cares about.
pub const LENGTH_BOUNDARIES: [usize; 10] = [0, 15, 16, 31, 32, 255, 256, 65_535, 65_536, 65_537];

/// Boundary sweep between `min` and `max`: every `2^k - 1`, `2^k` and
/// `2^k + 1` in range, plus `min` and its successors, without repeats.
pub fn pattern(min: i64, max: i64) -> Vec<i64> {
	let mut out = Vec::new();
	let mut seen = HashSet::new();
	let mut val = min - 1;

	while val <= max {
		if min <= val && !seen.contains(&val) {
			out.push(val);
		}
		seen.insert(val);
		val += 1;

		for _ in 0..2 {
			if val <= max && !seen.contains(&val) {
				out.push(val);
			}
			seen.insert(val);
			val += 1;
		}
		val -= 2;

		val = if val == 0 { 1 } else { val * 2 - 1 };
	}
	out
}

/// [`pattern`] over non-negative lengths.
pub fn length_pattern(min: usize, max: usize) -> Vec<usize> {
	pattern(min as i64, max as i64).into_iter().map(|len| len as usize).collect()
}

/// String of `count` copies of `unit`.
pub fn repeat_char(unit: char, count: usize) -> String {
	std::iter::repeat_n(unit, count).collect()
}

/// Small mixed JSON document exercising every JSON kind.
pub fn sample_json() -> serde_json::Value {
	serde_json::json!({
		"name": "packwire",
		"count": 3,
		"negative": -129,
		"ratio": 0.5,
		"enabled": true,
		"missing": null,
		"tags": ["a", "α", "亜"],
		"nested": {"depth": 2, "items": [[], {}]}
	})
}

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}
