/// Index of the location every tour starts and ends at.
pub(crate) const ORIGIN: usize = 0;

pub(crate) const MIN_LOCATIONS: usize = 2;

/// Largest matrix a `Subset` bitmask can address.
pub const MAX_LOCATIONS: usize = u32::BITS as usize;

pub(crate) const DEFAULT_MAX_LOCATIONS: usize = 20;
pub(crate) const DEFAULT_SYMMETRY_TOLERANCE: f64 = 1e-9;
pub(crate) const DEFAULT_UNIT: &str = "km";
