//! Hot region selection

// Imports
use {
	crate::{region::RegionIdx, GenError},
	masim_hotgen_util::SampleDistinct,
	rand::Rng,
	std::fmt,
};

/// Hot region selection mode
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
	/// Hot regions are drawn once and kept for all phases
	Static,

	/// Hot regions are re-drawn every phase
	Dynamic,
}

impl fmt::Display for SelectMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static => f.pad("static"),
			Self::Dynamic => f.pad("dynamic"),
		}
	}
}

/// Hot set.
///
/// Distinct region indices, kept in the order the sampler returned them.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct HotSet {
	/// Indices, in sampling order
	idxs: Vec<RegionIdx>,
}

impl HotSet {
	/// Returns all hot region indices, in sampling order
	pub fn iter(&self) -> impl ExactSizeIterator<Item = RegionIdx> + '_ {
		self.idxs.iter().copied()
	}

	/// Creates a hot set from `idxs`, which must be distinct
	#[cfg(test)]
	pub(crate) fn from_idxs(idxs: impl IntoIterator<Item = RegionIdx>) -> Self {
		Self {
			idxs: idxs.into_iter().collect(),
		}
	}
}

/// Hot set selector
#[derive(Debug)]
pub struct HotSetSelector<R> {
	/// Mode
	mode: SelectMode,

	/// Total number of regions
	nr_regions: usize,

	/// Number of hot regions per selection
	hot_count: usize,

	/// Hot set drawn in static mode
	static_hot_set: Option<HotSet>,

	/// Random source
	rng: R,
}

impl<R: Rng> HotSetSelector<R> {
	/// Creates a new selector.
	///
	/// # Errors
	/// Returns [`GenError::InvalidParameter`] if `hot_count` isn't within `1..=nr_regions`.
	pub fn new(mode: SelectMode, nr_regions: usize, hot_count: usize, rng: R) -> Result<Self, GenError> {
		if !(1..=nr_regions).contains(&hot_count) {
			return Err(GenError::hot_count_out_of_range(hot_count, nr_regions));
		}

		Ok(Self {
			mode,
			nr_regions,
			hot_count,
			static_hot_set: None,
			rng,
		})
	}

	/// Selects the hot set for the next phase.
	///
	/// In static mode, the first call draws the hot set and every
	/// following call returns the same one.
	pub fn select(&mut self) -> HotSet {
		match self.mode {
			SelectMode::Static => {
				let (nr_regions, hot_count, rng) = (self.nr_regions, self.hot_count, &mut self.rng);
				self.static_hot_set
					.get_or_insert_with(|| {
						let hot_set = self::draw(rng, nr_regions, hot_count);
						tracing::debug!(?hot_set, "Drew static hot set");
						hot_set
					})
					.clone()
			},
			SelectMode::Dynamic => self::draw(&mut self.rng, self.nr_regions, self.hot_count),
		}
	}
}

/// Draws `hot_count` distinct indices from `0..nr_regions`
fn draw<R: Rng>(rng: &mut R, nr_regions: usize, hot_count: usize) -> HotSet {
	let idxs = rng
		.sample_distinct(nr_regions, hot_count)
		.into_iter()
		.map(RegionIdx::new)
		.collect();

	HotSet { idxs }
}
