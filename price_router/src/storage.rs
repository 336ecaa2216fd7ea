multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getFloorOracle)]
    #[storage_mapper("floor_oracle_address")]
    fn floor_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Secondary source, answers whenever the floor oracle has no active quote.
    #[view(getFallbackPrice)]
    #[storage_mapper("fallback_price")]
    fn fallback_price(&self, asset: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    /// Floor oracle twap, read straight from the oracle's storage (same shard).
    #[storage_mapper_from_address("twap")]
    fn floor_twap(
        &self,
        floor_oracle_address: ManagedAddress,
        asset: TokenIdentifier,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;
}
