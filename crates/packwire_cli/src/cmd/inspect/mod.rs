use std::path::PathBuf;

use packwire::pack::{MarkerRecord, ScanOptions, scan_markers};
use serde::Serialize;
use tracing::info;

use crate::cmd::io::read_encoded;
use crate::error::Result;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Row {
	offset: usize,
	depth: u32,
	tag: String,
	marker: &'static str,
	len: usize,
}

impl From<&MarkerRecord> for Row {
	fn from(record: &MarkerRecord) -> Self {
		Self {
			offset: record.offset,
			depth: record.depth,
			tag: format!("0x{:02x}", record.marker.to_u8()),
			marker: record.marker.name(),
			len: record.len,
		}
	}
}

/// Print one row per tag in the encoded input.
pub fn run(input: PathBuf, json: bool) -> Result<()> {
	let (compression, bytes) = read_encoded(&input)?;
	let records = scan_markers(&bytes, &ScanOptions::default())?;
	info!(len = bytes.len(), compression = compression.as_str(), tags = records.len(), "scanned document");

	let rows: Vec<Row> = records.iter().map(Row::from).collect();
	if json {
		println!("{}", serde_json::to_string_pretty(&rows)?);
		return Ok(());
	}

	print!("{}", render_table(&rows));
	Ok(())
}

fn render_table(rows: &[Row]) -> String {
	let mut out = String::from("offset\tdepth\ttag\tmarker\tlen\n");
	for row in rows {
		let indent = "  ".repeat(row.depth as usize);
		out.push_str(&format!("{}\t{}\t{}\t{indent}{}\t{}\n", row.offset, row.depth, row.tag, row.marker, row.len));
	}
	out
}
