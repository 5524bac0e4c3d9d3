#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "packwire", about = "MessagePack conversion and inspection tools")]
struct Cli {
	/// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Convert a JSON document into MessagePack bytes.
	Encode {
		/// JSON input path, or `-` for stdin.
		input: PathBuf,
		/// Output path; stdout when omitted.
		#[arg(short, long)]
		output: Option<PathBuf>,
		/// Wrap the output in a zstd frame.
		#[arg(long)]
		zstd: bool,
	},
	/// Decode MessagePack bytes and print them as JSON.
	Decode {
		input: PathBuf,
		/// Decode mappings into ordered key/value pairs.
		#[arg(long)]
		usemap: bool,
		/// Replace invalid UTF-8 instead of failing.
		#[arg(long = "lossy-utf8")]
		lossy_utf8: bool,
		#[arg(long = "max-depth")]
		max_depth: Option<u32>,
	},
	/// List every tag in an encoded buffer.
	Inspect {
		input: PathBuf,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Commands::Encode { input, output, zstd } => cmd::encode::run(cmd::encode::Args { input, output, zstd }),
		Commands::Decode {
			input,
			usemap,
			lossy_utf8,
			max_depth,
		} => cmd::decode::run(cmd::decode::Args {
			input,
			usemap,
			lossy_utf8,
			max_depth,
		}),
		Commands::Inspect { input, json } => cmd::inspect::run(input, json),
	}
}

fn init_tracing(verbose: u8) {
	let fallback = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.compact()
		.init();
}
