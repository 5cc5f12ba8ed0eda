//! Utilities

// Modules
pub mod logger;

// Imports
use std::{cell::RefCell, fmt};

/// Extension trait for `R: rand::Rng` types to sample distinct indices
#[extend::ext(name = SampleDistinct)]
pub impl<R: rand::Rng> R {
	/// Samples `amount` distinct indices from `0..len`, uniformly and without replacement.
	///
	/// The indices are returned in an unspecified but seed-deterministic order.
	///
	/// # Panics
	/// Panics if `amount > len`.
	fn sample_distinct(&mut self, len: usize, amount: usize) -> Vec<usize> {
		rand::seq::index::sample(self, len, amount).into_vec()
	}
}

/// [`fmt::Display`] helper to display using a `FnMut(&mut fmt::Formatter)`
pub struct DisplayWrapper<F: FnMut(&mut fmt::Formatter) -> fmt::Result>(RefCell<F>);

impl<F: FnMut(&mut fmt::Formatter) -> fmt::Result> DisplayWrapper<F> {
	/// Creates a new display wrapper
	#[must_use]
	pub const fn new(func: F) -> Self {
		Self(RefCell::new(func))
	}
}


impl<F: FnMut(&mut fmt::Formatter) -> fmt::Result> fmt::Display for DisplayWrapper<F> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		// Note: `f` cannot be re-entrant, so this cannot fail
		self.0.borrow_mut()(f)
	}
}
