//! Errors

/// Generation error
#[derive(PartialEq, Eq, Clone, Debug, thiserror::Error)]
pub enum GenError {
	/// An invocation parameter was out of range
	#[error("Invalid parameter `{name}`: {reason}")]
	InvalidParameter { name: &'static str, reason: String },

	/// The configuration cannot produce a well-formed workload
	#[error("Invalid configuration: {reason}")]
	InvalidConfig { reason: String },
}

impl GenError {
	/// Creates an error for a hot region count outside of `1..=nr_regions`
	pub fn hot_count_out_of_range(hot_count: impl std::fmt::Display, nr_regions: usize) -> Self {
		Self::InvalidParameter {
			name:   "hot_count",
			reason: format!("must be between 1 and {nr_regions}, found {hot_count}"),
		}
	}
}
