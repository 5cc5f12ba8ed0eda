//! Hotness weighting

// Imports
use {
	crate::{region::RegionIdx, select::HotSet},
	std::{collections::BTreeMap, fmt},
};

/// Hotness policy for hot regions
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotnessPolicy {
	/// All hot regions share the same hotness
	Same,

	/// Each hot region is hotter than the previous one, by a fixed step
	Diff,
}

impl fmt::Display for HotnessPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Same => f.pad("same"),
			Self::Diff => f.pad("diff"),
		}
	}
}

/// Hotness weights
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct HotnessWeights {
	/// Weight of cold regions
	pub cold: u32,

	/// Weight of the first hot region
	pub base: u32,

	/// Increment for each following hot region, for [`HotnessPolicy::Diff`]
	pub step: u32,
}

impl HotnessPolicy {
	/// Assigns a hotness to every region of `hot_set`.
	///
	/// Under [`HotnessPolicy::Diff`], the `i`-th region of the hot set, in its
	/// enumeration order, receives `base + i * step`.
	///
	/// # Panics
	/// Panics if the hotness ladder overflows, which [`HotnessPolicy::max_hotness`] checks beforehand.
	pub fn assign(self, hot_set: &HotSet, weights: HotnessWeights) -> HotnessMap {
		let hot = hot_set
			.iter()
			.enumerate()
			.map(|(rank, idx)| {
				let hotness = self.hotness(rank, weights).expect("Hotness ladder overflowed");
				(idx, hotness)
			})
			.collect();

		HotnessMap {
			hot,
			cold: weights.cold,
		}
	}

	/// Returns the hotness of the hottest of `hot_count` hot regions.
	///
	/// Returns `None` if it doesn't fit a `u32`.
	pub fn max_hotness(self, hot_count: usize, weights: HotnessWeights) -> Option<u32> {
		self.hotness(hot_count.saturating_sub(1), weights)
	}

	/// Returns the hotness of the hot region ranked `rank`
	fn hotness(self, rank: usize, weights: HotnessWeights) -> Option<u32> {
		match self {
			Self::Same => Some(weights.base),
			Self::Diff => u32::try_from(rank)
				.ok()
				.and_then(|rank| rank.checked_mul(weights.step))
				.and_then(|offset| offset.checked_add(weights.base)),
		}
	}
}

/// Hotness of every region within a phase
#[derive(Clone, Debug)]
pub struct HotnessMap {
	/// Hotness of each hot region
	hot: BTreeMap<RegionIdx, u32>,

	/// Hotness of all other regions
	cold: u32,
}

impl HotnessMap {
	/// Returns the hotness of region `idx`
	pub fn hotness(&self, idx: RegionIdx) -> u32 {
		self.hot.get(&idx).copied().unwrap_or(self.cold)
	}

	/// Returns all hot regions and their hotness, sorted by region
	pub fn hot(&self) -> &BTreeMap<RegionIdx, u32> {
		&self.hot
	}
}

#[cfg(test)]
mod tests {
	use {super::*, itertools::Itertools};

	const WEIGHTS: HotnessWeights = HotnessWeights {
		cold: 1,
		base: 50,
		step: 10,
	};

	fn hot_set(idxs: &[usize]) -> HotSet {
		HotSet::from_idxs(idxs.iter().copied().map(RegionIdx::new))
	}

	#[test]
	fn same_is_uniform() {
		let hot_set = self::hot_set(&[7, 3, 42]);
		let map = HotnessPolicy::Same.assign(&hot_set, WEIGHTS);
		for idx in hot_set.iter() {
			assert_eq!(map.hotness(idx), 50);
		}
		assert_eq!(map.hotness(RegionIdx::new(0)), 1);
		assert!(!map.hot().contains_key(&RegionIdx::new(0)));
	}

	#[test]
	fn diff_follows_enumeration_order() {
		let hot_set = self::hot_set(&[7, 3, 42]);
		let map = HotnessPolicy::Diff.assign(&hot_set, WEIGHTS);
		let hotness = hot_set.iter().map(|idx| map.hotness(idx)).collect_vec();
		assert_eq!(hotness, [50, 60, 70]);
		assert_eq!(map.hotness(RegionIdx::new(8)), 1);
	}

	#[test]
	fn max_hotness_depends_on_policy() {
		let weights = HotnessWeights {
			cold: 1,
			base: 50,
			step: u32::MAX,
		};
		assert_eq!(HotnessPolicy::Same.max_hotness(100, weights), Some(50));
		assert_eq!(HotnessPolicy::Diff.max_hotness(1, weights), Some(50));
		assert_eq!(HotnessPolicy::Diff.max_hotness(2, weights), None);
		assert_eq!(HotnessPolicy::Diff.max_hotness(3, WEIGHTS), Some(70));
	}

	#[test]
	fn diff_is_deterministic() {
		let hot_set = self::hot_set(&[9, 1, 5, 4]);
		let lhs = HotnessPolicy::Diff.assign(&hot_set, WEIGHTS);
		let rhs = HotnessPolicy::Diff.assign(&hot_set, WEIGHTS);
		assert_eq!(lhs.hot(), rhs.hot());
	}
}
