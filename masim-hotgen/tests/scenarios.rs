//! Generation scenarios on the default configuration

// Imports
use {
	itertools::Itertools,
	masim_hotgen::{Config, GenError, Generated, HotnessPolicy, Params, Phase, RwMode, SelectMode},
	rand::{rngs::StdRng, SeedableRng},
	std::collections::BTreeSet,
};

fn generate(mode: SelectMode, hot_count: usize, hotness: HotnessPolicy, seed: u64) -> Result<Generated, GenError> {
	let params = Params {
		mode,
		hot_count,
		hotness,
	};
	masim_hotgen::generate(&Config::default(), &params, StdRng::seed_from_u64(seed))
}

/// Returns the names of all regions hotter than the cold hotness
fn hot_names(phase: &Phase) -> BTreeSet<&str> {
	phase
		.patterns
		.iter()
		.filter(|pattern| pattern.probability > Config::DEFAULT_COLD_HOTNESS)
		.map(|pattern| pattern.region_name.as_str())
		.collect()
}

/// Returns the hotness of all hot regions, in region order
fn hot_hotness(phase: &Phase) -> Vec<u32> {
	phase
		.patterns
		.iter()
		.map(|pattern| pattern.probability)
		.filter(|&probability| probability > Config::DEFAULT_COLD_HOTNESS)
		.collect()
}

#[test]
fn scenario_static_same() {
	let generated = self::generate(SelectMode::Static, 5, HotnessPolicy::Same, 0).expect("Unable to generate");
	let workload = &generated.workload;
	assert_eq!(workload.phases.len(), 11);

	let first_hot = self::hot_names(&workload.sim_phases()[0]);
	assert_eq!(first_hot.len(), 5);
	for phase in workload.sim_phases() {
		assert_eq!(self::hot_names(phase), first_hot);
		assert_eq!(self::hot_hotness(phase), [50; 5]);
		assert_eq!(phase.patterns.iter().filter(|pattern| pattern.probability == 1).count(), 95);
	}
}

#[test]
fn scenario_dynamic_diff() {
	let generated = self::generate(SelectMode::Dynamic, 3, HotnessPolicy::Diff, 0).expect("Unable to generate");
	let workload = &generated.workload;
	assert_eq!(workload.phases.len(), 11);

	for phase in workload.sim_phases() {
		assert_eq!(self::hot_hotness(phase).into_iter().sorted().collect_vec(), [50, 60, 70]);
		assert_eq!(phase.patterns.iter().filter(|pattern| pattern.probability == 1).count(), 97);
	}
}

#[test]
fn scenario_zero_hot() {
	let res = self::generate(SelectMode::Static, 0, HotnessPolicy::Same, 0);
	assert!(matches!(res, Err(GenError::InvalidParameter { name: "hot_count", .. })));
}

#[test]
fn scenario_too_many_hot() {
	let res = self::generate(SelectMode::Dynamic, 150, HotnessPolicy::Diff, 0);
	assert!(matches!(res, Err(GenError::InvalidParameter { name: "hot_count", .. })));
}

#[test]
fn scenario_negative_hot() {
	for hot_count in [-1, -100, i64::MIN] {
		let res = Params::from_signed(&Config::default(), SelectMode::Static, hot_count, HotnessPolicy::Same);
		assert!(
			matches!(res, Err(GenError::InvalidParameter { name: "hot_count", .. })),
			"Hot count {hot_count} should be invalid"
		);
	}
}

#[test]
fn hot_count_is_exact_for_all_valid_counts() {
	for hot_count in 1..=100 {
		let generated = self::generate(SelectMode::Dynamic, hot_count, HotnessPolicy::Same, hot_count as u64)
			.expect("Unable to generate");
		for (phase, hotness) in generated.workload.sim_phases().iter().zip(&generated.phase_hotness) {
			assert_eq!(hotness.hot().len(), hot_count);
			assert!(hotness.hot().keys().all(|idx| idx.to_usize() < 100));
			assert_eq!(self::hot_names(phase).len(), hot_count);
		}
	}
}

#[test]
fn every_phase_covers_every_region_once() {
	for mode in [SelectMode::Static, SelectMode::Dynamic] {
		for hotness in [HotnessPolicy::Same, HotnessPolicy::Diff] {
			let generated = self::generate(mode, 10, hotness, 17).expect("Unable to generate");
			let workload = &generated.workload;
			let region_names = workload.regions.iter().map(|region| region.name.as_str()).collect_vec();
			assert_eq!(region_names.len(), 100);
			assert!(region_names.iter().all_unique());

			for phase in &workload.phases {
				let pattern_names = phase.patterns.iter().map(|pattern| pattern.region_name.as_str()).collect_vec();
				assert_eq!(pattern_names, region_names, "Phase {} doesn't match the regions", phase.name);
			}
		}
	}
}

#[test]
fn init_phase_writes_sim_phases_read() {
	let generated = self::generate(SelectMode::Dynamic, 7, HotnessPolicy::Diff, 3).expect("Unable to generate");
	let workload = &generated.workload;

	let init_phase = workload.init_phase().expect("Missing initialization phase");
	assert_eq!(init_phase.name, "init_phase");
	assert!(init_phase.patterns.iter().all(|pattern| pattern.rw_mode == RwMode::WriteOnly));
	assert!(init_phase.patterns.iter().all(|pattern| pattern.probability == 1));

	assert_eq!(workload.sim_phases().len(), 10);
	for phase in workload.sim_phases() {
		assert!(phase.patterns.iter().all(|pattern| pattern.rw_mode == RwMode::ReadOnly));
	}
	for phase in &workload.phases {
		assert_eq!(phase.runtime_ms, 60_000);
		assert!(phase.patterns.iter().all(|pattern| pattern.random_access && pattern.stride == 4096));
	}
}

#[test]
fn same_hotness_is_uniform() {
	let generated = self::generate(SelectMode::Dynamic, 20, HotnessPolicy::Same, 11).expect("Unable to generate");
	for phase in generated.workload.sim_phases() {
		let hotness = self::hot_hotness(phase);
		assert_eq!(hotness.len(), 20);
		assert!(hotness.iter().all_equal());
		assert!(hotness[0] > Config::DEFAULT_COLD_HOTNESS);
		assert!(phase
			.patterns
			.iter()
			.all(|pattern| pattern.probability == 50 || pattern.probability == 1));
	}
}

#[test]
fn diff_hotness_is_a_ladder() {
	let generated = self::generate(SelectMode::Static, 12, HotnessPolicy::Diff, 9).expect("Unable to generate");
	for (phase, hotness) in generated.workload.sim_phases().iter().zip(&generated.phase_hotness) {
		let phase_hotness = self::hot_hotness(phase);
		assert!(phase_hotness.iter().all_unique());
		assert!(phase_hotness.iter().all(|&hotness| hotness > Config::DEFAULT_COLD_HOTNESS));

		// Note: Only the ladder itself matters, not which region got which step
		let ladder = hotness.hot().values().copied().sorted().collect_vec();
		assert_eq!(ladder, (0..12).map(|rank| 50 + rank * 10).collect_vec());
		assert!(ladder.windows(2).all(|pair| pair[0] < pair[1]));
	}
}

#[test]
fn static_hot_set_is_stable() {
	for seed in 0..20 {
		let generated = self::generate(SelectMode::Static, 8, HotnessPolicy::Diff, seed).expect("Unable to generate");
		let hot_sets = generated
			.workload
			.sim_phases()
			.iter()
			.map(self::hot_names)
			.collect_vec();
		assert!(hot_sets.iter().all_equal(), "Seed {seed} changed hot regions");

		// Note: Static mode also keeps each region's rank in the ladder
		let first = &generated.workload.sim_phases()[0];
		assert!(generated.workload.sim_phases().iter().all(|phase| phase.patterns == first.patterns));
	}
}

#[test]
fn dynamic_is_reproducible() {
	let lhs = self::generate(SelectMode::Dynamic, 4, HotnessPolicy::Diff, 1234).expect("Unable to generate");
	let rhs = self::generate(SelectMode::Dynamic, 4, HotnessPolicy::Diff, 1234).expect("Unable to generate");
	assert_eq!(lhs.workload, rhs.workload);
}

#[test]
fn dynamic_redraws_across_phases() {
	let redrawn_seeds = (0..50)
		.filter(|&seed| {
			let generated =
				self::generate(SelectMode::Dynamic, 5, HotnessPolicy::Same, seed).expect("Unable to generate");
			!generated
				.workload
				.sim_phases()
				.iter()
				.map(self::hot_names)
				.all_equal()
		})
		.count();

	assert_eq!(redrawn_seeds, 50);
}
