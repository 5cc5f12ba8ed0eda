//! Configuration

// Imports
use crate::GenError;

/// Generator configuration.
///
/// Holds every constant of a run. The defaults reproduce the standard
/// hot-region experiment: 100 regions of 1 GiB each, 10 phases of 1 minute each.
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
	/// Number of regions
	pub nr_regions: usize,

	/// Size of each region, in bytes
	pub region_size_bytes: u64,

	/// Runtime of each phase (including the initialization phase), in milliseconds
	pub phase_runtime_ms: u64,

	/// Number of simulation phases, not counting the initialization phase
	pub nr_phases: usize,

	/// Access stride, in bytes
	pub stride: u64,

	// Hotness (relative accesses per millisecond)
	pub cold_hotness:     u32,
	pub hot_hotness_base: u32,

	/// Hotness increment between consecutive hot regions when using [`HotnessPolicy::Diff`](crate::HotnessPolicy::Diff)
	pub hot_hotness_step: u32,

	/// Hotness of every region during the initialization phase
	pub init_hotness: u32,

	// Naming
	pub region_name_prefix: String,
	pub phase_name_prefix:  String,
	pub init_phase_name:    String,
}

impl Config {
	pub const DEFAULT_NR_REGIONS: usize = 100;
	pub const DEFAULT_REGION_SIZE_BYTES: u64 = 1024 * 1024 * 1024;
	pub const DEFAULT_PHASE_RUNTIME_MS: u64 = 60_000;
	pub const DEFAULT_NR_PHASES: usize = 10;
	pub const DEFAULT_STRIDE: u64 = 4096;
	pub const DEFAULT_COLD_HOTNESS: u32 = 1;
	pub const DEFAULT_HOT_HOTNESS_BASE: u32 = 50;
	pub const DEFAULT_HOT_HOTNESS_STEP: u32 = 10;
	pub const DEFAULT_INIT_HOTNESS: u32 = 1;

	/// Validates this configuration.
	///
	/// # Errors
	/// Returns [`GenError::InvalidConfig`] if the configuration cannot produce
	/// a well-formed workload.
	pub fn validate(&self) -> Result<(), GenError> {
		let invalid = |reason: String| Err(GenError::InvalidConfig { reason });

		if self.nr_regions == 0 {
			return invalid("there must be at least 1 region".to_owned());
		}
		if self.nr_phases == 0 {
			return invalid("there must be at least 1 phase".to_owned());
		}
		if self.region_size_bytes == 0 {
			return invalid("region size must be positive".to_owned());
		}
		if self.phase_runtime_ms == 0 {
			return invalid("phase runtime must be positive".to_owned());
		}
		if self.stride == 0 {
			return invalid("stride must be positive".to_owned());
		}
		if self.cold_hotness == 0 || self.init_hotness == 0 {
			return invalid("cold and initialization hotness must be positive".to_owned());
		}
		if self.hot_hotness_base <= self.cold_hotness {
			return invalid(format!(
				"hot hotness base ({}) must be greater than the cold hotness ({})",
				self.hot_hotness_base, self.cold_hotness
			));
		}
		if self.hot_hotness_step == 0 {
			return invalid("hot hotness step must be positive".to_owned());
		}
		if self.is_phase_name(&self.init_phase_name) {
			return invalid(format!(
				"initialization phase name {:?} clashes with a simulation phase name",
				self.init_phase_name
			));
		}

		Ok(())
	}

	/// Returns the name of simulation phase `phase_idx`
	pub fn phase_name(&self, phase_idx: usize) -> String {
		format!("{}{phase_idx}", self.phase_name_prefix)
	}

	/// Returns if `name` is the name of any simulation phase
	fn is_phase_name(&self, name: &str) -> bool {
		name.strip_prefix(&self.phase_name_prefix)
			.and_then(|idx| idx.parse::<usize>().ok())
			.is_some_and(|idx| idx < self.nr_phases && self.phase_name(idx) == name)
	}

	/// Returns the hotness weights of this configuration
	pub fn hotness_weights(&self) -> crate::hotness::HotnessWeights {
		crate::hotness::HotnessWeights {
			cold: self.cold_hotness,
			base: self.hot_hotness_base,
			step: self.hot_hotness_step,
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			nr_regions:         Self::DEFAULT_NR_REGIONS,
			region_size_bytes:  Self::DEFAULT_REGION_SIZE_BYTES,
			phase_runtime_ms:   Self::DEFAULT_PHASE_RUNTIME_MS,
			nr_phases:          Self::DEFAULT_NR_PHASES,
			stride:             Self::DEFAULT_STRIDE,
			cold_hotness:       Self::DEFAULT_COLD_HOTNESS,
			hot_hotness_base:   Self::DEFAULT_HOT_HOTNESS_BASE,
			hot_hotness_step:   Self::DEFAULT_HOT_HOTNESS_STEP,
			init_hotness:       Self::DEFAULT_INIT_HOTNESS,
			region_name_prefix: "r".to_owned(),
			phase_name_prefix:  "phase".to_owned(),
			init_phase_name:    "init_phase".to_owned(),
		}
	}
}
