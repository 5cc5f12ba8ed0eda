//! Workload generation

// Imports
use {
	crate::{
		hotness::{HotnessMap, HotnessPolicy},
		phase::{AccessPattern, Phase, RwMode},
		region::{Region, RegionCatalog},
		select::{HotSetSelector, SelectMode},
		Config,
		GenError,
	},
	itertools::Itertools,
	rand::Rng,
	std::fmt,
};

/// Invocation parameters
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Params {
	/// Hot region selection mode
	pub mode: SelectMode,

	/// Number of hot regions per phase
	pub hot_count: usize,

	/// Hotness policy
	pub hotness: HotnessPolicy,
}

impl Params {
	/// Creates parameters from a signed hot region count, such as one given on the command line.
	///
	/// `config` is validated first, so an invalid config is reported even when the count is also invalid.
	///
	/// # Errors
	/// Returns [`GenError::InvalidConfig`] if `config` is invalid, and
	/// [`GenError::InvalidParameter`] if `hot_count` isn't within `1..=config.nr_regions`.
	pub fn from_signed(
		config: &Config,
		mode: SelectMode,
		hot_count: i64,
		hotness: HotnessPolicy,
	) -> Result<Self, GenError> {
		config.validate()?;
		let hot_count = usize::try_from(hot_count)
			.ok()
			.filter(|hot_count| (1..=config.nr_regions).contains(hot_count))
			.ok_or_else(|| GenError::hot_count_out_of_range(hot_count, config.nr_regions))?;

		Ok(Self {
			mode,
			hot_count,
			hotness,
		})
	}
}

/// Workload.
///
/// All regions, and all phases, starting with the initialization phase.
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(bincode::Encode, bincode::Decode)]
pub struct Workload {
	pub regions: Vec<Region>,
	pub phases:  Vec<Phase>,
}

impl Workload {
	/// Returns the initialization phase
	pub fn init_phase(&self) -> Option<&Phase> {
		self.phases.first()
	}

	/// Returns all simulation phases
	pub fn sim_phases(&self) -> &[Phase] {
		self.phases.get(1..).unwrap_or_default()
	}
}

/// Output of [`generate`]
#[derive(Clone, Debug)]
pub struct Generated {
	/// Workload
	pub workload: Workload,

	/// Hotness of each simulation phase
	pub phase_hotness: Vec<HotnessMap>,
}

/// Generates a workload.
///
/// The parameters and configuration are validated before anything is built.
///
/// # Errors
/// Returns [`GenError::InvalidConfig`] if `config` is invalid or its hotness
/// ladder overflows for `params`, and [`GenError::InvalidParameter`] if the
/// hot region count is out of range.
pub fn generate<R: Rng>(config: &Config, params: &Params, rng: R) -> Result<Generated, GenError> {
	config.validate()?;
	let mut selector = HotSetSelector::new(params.mode, config.nr_regions, params.hot_count, rng)?;

	let weights = config.hotness_weights();
	if params.hotness.max_hotness(params.hot_count, weights).is_none() {
		return Err(GenError::InvalidConfig {
			reason: format!(
				"hotness ladder of {} hot regions overflows, starting at {} with step {}",
				params.hot_count, weights.base, weights.step
			),
		});
	}
	tracing::debug!(?params, "Validated parameters");

	let catalog = RegionCatalog::new(config.nr_regions, config.region_size_bytes, &config.region_name_prefix);

	let mut phases = Vec::with_capacity(config.nr_phases + 1);
	phases.push(self::init_phase(config, &catalog));

	let mut phase_hotness = Vec::with_capacity(config.nr_phases);
	for phase_idx in 0..config.nr_phases {
		let hot_set = selector.select();
		let hotness = params.hotness.assign(&hot_set, weights);

		let patterns = catalog
			.iter()
			.map(|(region_idx, region)| AccessPattern {
				region_name:   region.name.clone(),
				random_access: true,
				stride:        config.stride,
				probability:   hotness.hotness(region_idx),
				rw_mode:       RwMode::ReadOnly,
			})
			.collect();

		let phase = Phase {
			name: config.phase_name(phase_idx),
			runtime_ms: config.phase_runtime_ms,
			patterns,
		};
		tracing::debug!(
			phase = %phase.name,
			hot = ?hotness
				.hot()
				.iter()
				.map(|(&region_idx, hotness)| (catalog.get(region_idx).map(|region| &region.name), hotness))
				.collect_vec(),
			"Assembled phase"
		);

		phases.push(phase);
		phase_hotness.push(hotness);
	}

	Ok(Generated {
		workload: Workload {
			regions: catalog.into_regions(),
			phases,
		},
		phase_hotness,
	})
}

/// Builds the initialization phase, which writes every region once
fn init_phase(config: &Config, catalog: &RegionCatalog) -> Phase {
	let patterns = catalog
		.iter()
		.map(|(_, region)| AccessPattern {
			region_name:   region.name.clone(),
			random_access: true,
			stride:        config.stride,
			probability:   config.init_hotness,
			rw_mode:       RwMode::WriteOnly,
		})
		.collect();

	Phase {
		name: config.init_phase_name.clone(),
		runtime_ms: config.phase_runtime_ms,
		patterns,
	}
}

impl Generated {
	/// Formats a summary of the generated workload to `f`.
	pub fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
		// Note: Start with a newline, since we're a multi-line output
		f.pad("\n")?;

		let Workload { regions, phases } = &self.workload;
		let total_bytes = regions.iter().map(|region| region.size_bytes).sum::<u64>();
		writeln!(f, "Regions: {} ({total_bytes} bytes total)", regions.len())?;
		writeln!(f, "Phases: {} (including initialization)", phases.len())?;

		for (phase, hotness) in self.workload.sim_phases().iter().zip(&self.phase_hotness) {
			let hot_names = hotness
				.hot()
				.keys()
				.filter_map(|&region_idx| regions.get(region_idx.to_usize()))
				.map(|region| region.name.as_str())
				.join(", ");
			let hot_hotness = hotness
				.hot()
				.values()
				.map(|&hotness| f64::from(hotness))
				.collect::<average::Variance>();
			let hot_share = 100.0 *
				(hotness.hot().values().map(|&hotness| u64::from(hotness)).sum::<u64>() as f64 /
					phase.total_probability() as f64);

			writeln!(
				f,
				"{}: hot [{hot_names}], hotness {:.2} ± {:.2}, {hot_share:.2}% of accesses",
				phase.name,
				hot_hotness.mean(),
				hot_hotness.error(),
			)?;
		}

		Ok(())
	}
}
