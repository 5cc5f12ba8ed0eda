//! Phases

/// Read/write mode of an access pattern
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(bincode::Encode, bincode::Decode)]
#[serde(rename_all = "snake_case")]
pub enum RwMode {
	ReadOnly,
	WriteOnly,
	ReadWrite,
}

impl RwMode {
	/// Returns the short name of this mode (`ro`, `wo` or `rw`)
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ReadOnly => "ro",
			Self::WriteOnly => "wo",
			Self::ReadWrite => "rw",
		}
	}
}

/// Access pattern of a single region within a phase
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(bincode::Encode, bincode::Decode)]
pub struct AccessPattern {
	/// Region name
	pub region_name: String,

	/// Whether offsets are chosen randomly, instead of sequentially
	pub random_access: bool,

	/// Stride, in bytes
	pub stride: u64,

	/// Access probability, relative to all other patterns of the phase
	pub probability: u32,

	/// Read/write mode
	pub rw_mode: RwMode,
}

/// Phase
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(bincode::Encode, bincode::Decode)]
pub struct Phase {
	/// Name
	pub name: String,

	/// Runtime, in milliseconds
	pub runtime_ms: u64,

	/// Access patterns, one per region
	pub patterns: Vec<AccessPattern>,
}

impl Phase {
	/// Returns the total probability of all patterns
	pub fn total_probability(&self) -> u64 {
		self.patterns.iter().map(|pattern| u64::from(pattern.probability)).sum()
	}
}
