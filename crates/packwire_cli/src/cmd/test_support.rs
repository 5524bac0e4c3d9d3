use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use packwire_testkit::target_dir as workspace_target_dir;

static PACKWIRE_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_packwire(args: &[&str]) -> Output {
	Command::new(packwire_bin()).args(args).output().expect("packwire command executes")
}

pub(crate) fn run_packwire_json(args: &[&str]) -> serde_json::Value {
	let output = run_packwire(args);
	assert!(
		output.status.success(),
		"packwire command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Write `bytes` to a per-test scratch file under the target directory.
pub(crate) fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = workspace_target_dir().join("packwire-cli-tests");
	std::fs::create_dir_all(&dir).expect("scratch dir");
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("scratch file");
	path
}

fn packwire_bin() -> &'static PathBuf {
	PACKWIRE_BIN.get_or_init(resolve_packwire_bin)
}

fn resolve_packwire_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_packwire") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "packwire.exe" } else { "packwire" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "packwire"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build packwire binary at {}", bin.display());

	bin
}
