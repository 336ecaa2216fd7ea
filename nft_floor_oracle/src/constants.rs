/// Upper bound of the per-asset observation window, after expiry eviction.
pub const MAX_OBSERVATIONS: usize = 64;

/// Observations one feeder may hold in a window. A further submission replaces its oldest.
pub const MAX_OBSERVATIONS_PER_FEEDER: usize = 8;

pub const MIN_COUNT_TO_AGGREGATE: u32 = 1;

/// Smallest accepted deviation multiplier. A multiplier of 1 would reject every feed.
pub const MIN_PRICE_DEVIATION: u64 = 2;

/// Keeps `twap * max_price_deviation` within the small-int range of `BigUint` arithmetic.
pub const MAX_PRICE_DEVIATION: u64 = 1_000;
