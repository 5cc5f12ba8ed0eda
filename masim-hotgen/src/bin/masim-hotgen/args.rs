//! Arguments

// Imports
use std::path::PathBuf;

/// Generates a `masim` configuration for hot-region experiments.
///
/// By default, 100 regions of 1 GiB each, accessed over 10 phases of 1 minute each.
#[derive(Debug)]
#[derive(clap::Parser)]
pub struct Args {
	/// Log file
	///
	/// Specifies a file to perform verbose logging to.
	/// You can use `RUST_LOG_FILE` to set filtering options
	#[clap(long = "log-file")]
	pub log_file: Option<PathBuf>,

	/// Whether to append to the log file
	#[clap(long = "log-file-append")]
	pub log_file_append: bool,

	/// Whether hot regions are fixed (static) or change every phase (dynamic)
	#[clap(long = "mode", value_enum)]
	pub mode: Mode,

	/// Number of hot regions
	#[clap(long = "nr-hot", alias = "nr_hot", allow_negative_numbers = true)]
	pub nr_hot: i64,

	/// Whether all hot regions have the same hotness, or different hotness
	#[clap(long = "hotness", value_enum)]
	pub hotness: Hotness,

	/// Random seed
	///
	/// If not specified, a random one is chosen and logged.
	#[clap(long = "seed")]
	pub seed: Option<u64>,

	/// Config file
	///
	/// Json file overriding any of the default constants
	#[clap(long = "config")]
	pub config_file: Option<PathBuf>,

	/// Output format
	#[clap(long = "format", value_enum, default_value_t = Format::Masim)]
	pub format: Format,

	/// Output file
	///
	/// If not specified, outputs to stdout
	#[clap(long = "output")]
	pub output_file: Option<PathBuf>,
}

/// Hot region mode
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(clap::ValueEnum)]
pub enum Mode {
	Static,
	Dynamic,
}

/// Hotness
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(clap::ValueEnum)]
pub enum Hotness {
	Same,
	Diff,
}

/// Output format
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(clap::ValueEnum)]
pub enum Format {
	/// `masim` configuration file
	Masim,

	/// Json
	Json,

	/// Bincode
	Bincode,
}
