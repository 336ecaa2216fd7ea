use multiversx_sc::imports::*;

/// Sorts the list and returns the element at `len / 2`.
///
/// Even-sized windows resolve to the upper of the two middle items, never their average:
/// `[1, 3]` aggregates to `3`.
pub fn upper_median<M: ManagedTypeApi>(list: &mut [BigUint<M>]) -> Option<BigUint<M>> {
    if list.is_empty() {
        return None;
    }
    list.sort_unstable();
    list.get(list.len() / 2).cloned()
}

/// An observation expires once it is strictly older than `now - expiration_period`.
pub fn is_expired(observed_at: u64, now: u64, expiration_period: u64) -> bool {
    now.saturating_sub(observed_at) > expiration_period
}

/// Checks a feeder price against the band `(twap / max_deviation, twap * max_deviation)`.
/// Both edges are rejected. An unprimed twap (zero) accepts any price.
pub fn is_within_deviation<M: ManagedTypeApi>(
    price: &BigUint<M>,
    twap: &BigUint<M>,
    max_deviation: u64,
) -> bool {
    if twap == &BigUint::zero() {
        return true;
    }

    let upper = twap.clone() * max_deviation;
    let lower = twap.clone() / max_deviation;

    price < &upper && price > &lower
}
