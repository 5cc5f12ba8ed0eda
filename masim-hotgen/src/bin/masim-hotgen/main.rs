//! `masim` hot-region configuration generator

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	masim_hotgen::{BincodeSink, Config, HotnessPolicy, JsonSink, MasimSink, Params, SelectMode, Sink, Workload},
	masim_hotgen_util::{logger, DisplayWrapper},
	rand::{rngs::StdRng, SeedableRng},
	std::{
		fs,
		io::{self, BufWriter},
	},
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Read the config file, if any
	let config = match &args.config_file {
		Some(config_file) => {
			let config_file = fs::File::open(config_file).context("Unable to open config file")?;
			serde_json::from_reader::<_, Config>(config_file).context("Unable to parse config file")?
		},
		None => Config::default(),
	};
	tracing::debug!(?config, "Using config");

	let mode = match args.mode {
		args::Mode::Static => SelectMode::Static,
		args::Mode::Dynamic => SelectMode::Dynamic,
	};
	let hotness = match args.hotness {
		args::Hotness::Same => HotnessPolicy::Same,
		args::Hotness::Diff => HotnessPolicy::Diff,
	};
	let params = Params::from_signed(&config, mode, args.nr_hot, hotness).context("Invalid parameters")?;

	// Note: We always log the seed so any run can be replayed.
	let seed = args.seed.unwrap_or_else(rand::random);
	tracing::info!(seed, %mode, hot_count = params.hot_count, %hotness, "Generating workload");

	let generated = masim_hotgen::generate(&config, &params, StdRng::seed_from_u64(seed))
		.context("Unable to generate workload")?;
	tracing::info!(
		"Generated workload: {}",
		DisplayWrapper::new(|f| generated.fmt_summary(f))
	);

	// Finally emit it
	let emit_res = match &args.output_file {
		Some(output_file) => {
			let output_file = fs::File::create(output_file).context("Unable to create output file")?;
			self::emit(args.format, BufWriter::new(output_file), &generated.workload)
		},
		None => self::emit(args.format, io::stdout().lock(), &generated.workload),
	};
	emit_res.context("Unable to emit workload")?;

	Ok(())
}

/// Emits `workload` to `writer` in `format`
fn emit(format: args::Format, writer: impl io::Write, workload: &Workload) -> Result<(), anyhow::Error> {
	match format {
		args::Format::Masim => MasimSink::new(writer).emit(workload),
		args::Format::Json => JsonSink::new(writer).emit(workload),
		args::Format::Bincode => BincodeSink::new(writer).emit(workload),
	}
}
