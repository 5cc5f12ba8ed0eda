//! Hot-region workload generator for `masim`.
//!
//! Builds a catalog of uniformly sized regions, picks a set of hot regions
//! for each phase and assembles the access patterns `masim` replays, starting
//! with an initialization phase that writes every region once.

// Modules
pub mod config;
pub mod error;
pub mod hotness;
pub mod phase;
pub mod region;
pub mod select;
pub mod sink;
pub mod workload;

// Exports
pub use self::{
	config::Config,
	error::GenError,
	hotness::{HotnessMap, HotnessPolicy, HotnessWeights},
	phase::{AccessPattern, Phase, RwMode},
	region::{Region, RegionCatalog, RegionIdx},
	select::{HotSet, HotSetSelector, SelectMode},
	sink::{BincodeSink, JsonSink, MasimSink, Sink},
	workload::{generate, Generated, Params, Workload},
};
