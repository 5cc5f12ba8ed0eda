//! Workload sinks

// Imports
use {
	crate::{
		phase::{AccessPattern, Phase},
		region::Region,
		Workload,
	},
	anyhow::Context,
	std::io,
};

/// Workload sink.
///
/// Receives the finished workload and emits it in some format.
pub trait Sink {
	/// Emits `workload`
	fn emit(&mut self, workload: &Workload) -> Result<(), anyhow::Error>;
}

/// Sink for `masim`'s configuration file format.
///
/// Regions are emitted first as `name, size[, data file]`, followed by each
/// phase as its name, runtime and `region, randomness, stride, probability, mode` lines.
#[derive(Debug)]
pub struct MasimSink<W> {
	/// Writer
	writer: W,
}

impl<W: io::Write> MasimSink<W> {
	/// Creates a new sink
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	/// Consumes this sink, returning the writer
	pub fn into_inner(self) -> W {
		self.writer
	}

	fn write_region(&mut self, region: &Region) -> Result<(), io::Error> {
		match &region.init_data_file {
			Some(data_file) => writeln!(self.writer, "{}, {}, {data_file}", region.name, region.size_bytes),
			None => writeln!(self.writer, "{}, {}", region.name, region.size_bytes),
		}
	}

	fn write_phase(&mut self, phase_idx: usize, phase: &Phase) -> Result<(), io::Error> {
		writeln!(self.writer, "# phase {phase_idx}")?;
		writeln!(self.writer, "{}", phase.name)?;
		writeln!(self.writer, "# runtime (ms)")?;
		writeln!(self.writer, "{}", phase.runtime_ms)?;
		writeln!(self.writer, "# region, randomness, stride, probability, rw mode")?;
		for pattern in &phase.patterns {
			self.write_pattern(pattern)?;
		}
		writeln!(self.writer)
	}

	fn write_pattern(&mut self, pattern: &AccessPattern) -> Result<(), io::Error> {
		writeln!(
			self.writer,
			"{}, {}, {}, {}, {}",
			pattern.region_name,
			u8::from(pattern.random_access),
			pattern.stride,
			pattern.probability,
			pattern.rw_mode.as_str()
		)
	}
}

impl<W: io::Write> Sink for MasimSink<W> {
	fn emit(&mut self, workload: &Workload) -> Result<(), anyhow::Error> {
		writeln!(self.writer, "# regions").context("Unable to write regions header")?;
		for region in &workload.regions {
			self.write_region(region)
				.with_context(|| format!("Unable to write region {:?}", region.name))?;
		}
		writeln!(self.writer).context("Unable to write regions footer")?;

		for (phase_idx, phase) in workload.phases.iter().enumerate() {
			self.write_phase(phase_idx, phase)
				.with_context(|| format!("Unable to write phase {:?}", phase.name))?;
		}

		self.writer.flush().context("Unable to flush output")
	}
}

/// Sink for json
#[derive(Debug)]
pub struct JsonSink<W> {
	/// Writer
	writer: W,
}

impl<W: io::Write> JsonSink<W> {
	/// Creates a new sink
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	/// Consumes this sink, returning the writer
	pub fn into_inner(self) -> W {
		self.writer
	}
}

impl<W: io::Write> Sink for JsonSink<W> {
	fn emit(&mut self, workload: &Workload) -> Result<(), anyhow::Error> {
		serde_json::to_writer_pretty(&mut self.writer, workload).context("Unable to write workload as json")?;
		writeln!(self.writer).context("Unable to write trailing newline")?;
		self.writer.flush().context("Unable to flush output")
	}
}

/// Sink for `bincode`
#[derive(Debug)]
pub struct BincodeSink<W> {
	/// Writer
	writer: W,
}

impl<W: io::Write> BincodeSink<W> {
	/// Creates a new sink
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	/// Consumes this sink, returning the writer
	pub fn into_inner(self) -> W {
		self.writer
	}
}

impl<W: io::Write> Sink for BincodeSink<W> {
	fn emit(&mut self, workload: &Workload) -> Result<(), anyhow::Error> {
		bincode::encode_into_std_write(workload, &mut self.writer, bincode::config::standard())
			.context("Unable to encode workload")?;
		self.writer.flush().context("Unable to flush output")
	}
}
