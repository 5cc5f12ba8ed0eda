//! Regions

/// Memory region
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(bincode::Encode, bincode::Decode)]
pub struct Region {
	/// Name
	pub name: String,

	/// Size, in bytes
	pub size_bytes: u64,

	/// File to initialize the region's data from
	pub init_data_file: Option<String>,
}

/// Region index within a [`RegionCatalog`]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Debug)]
pub struct RegionIdx(usize);

impl RegionIdx {
	/// Creates a region index
	pub fn new(idx: usize) -> Self {
		Self(idx)
	}

	/// Returns this index as a `usize`
	pub fn to_usize(self) -> usize {
		self.0
	}
}

/// Region catalog.
///
/// Ordered, fixed-size collection of uniformly sized regions named `{prefix}{idx}`.
#[derive(Clone, Debug)]
pub struct RegionCatalog {
	/// All regions, by index
	regions: Vec<Region>,
}

impl RegionCatalog {
	/// Builds a catalog of `nr_regions` regions of `size_bytes` each
	pub fn new(nr_regions: usize, size_bytes: u64, name_prefix: &str) -> Self {
		let regions = (0..nr_regions)
			.map(|idx| Region {
				name: format!("{name_prefix}{idx}"),
				size_bytes,
				init_data_file: None,
			})
			.collect();

		Self { regions }
	}

	/// Returns a region by its index
	pub fn get(&self, idx: RegionIdx) -> Option<&Region> {
		self.regions.get(idx.0)
	}

	/// Returns an iterator over all regions, along with their index
	pub fn iter(&self) -> impl ExactSizeIterator<Item = (RegionIdx, &Region)> + '_ {
		self.regions
			.iter()
			.enumerate()
			.map(|(idx, region)| (RegionIdx(idx), region))
	}

	/// Returns all regions
	pub fn regions(&self) -> &[Region] {
		&self.regions
	}

	/// Consumes this catalog, returning all regions
	pub fn into_regions(self) -> Vec<Region> {
		self.regions
	}
}
