multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::structs::{OracleConfig, PriceObservation, Role};

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getConfig)]
    #[storage_mapper("config")]
    fn config(&self) -> SingleValueMapper<OracleConfig>;

    #[storage_mapper("assets")]
    fn assets(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[storage_mapper("feeders")]
    fn feeders(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("role_members")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;

    /// Read by consuming routers through `storage_mapper_from_address`, keep the key stable.
    #[storage_mapper("twap")]
    fn twap(&self, asset: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper("last_updated")]
    fn last_updated(&self, asset: &TokenIdentifier) -> SingleValueMapper<u64>;

    #[storage_mapper("feed_paused")]
    fn feed_paused(&self, asset: &TokenIdentifier) -> SingleValueMapper<bool>;

    /// Arrival order, which is also timestamp order.
    #[storage_mapper("observations")]
    fn observations(
        &self,
        asset: &TokenIdentifier,
    ) -> LinkedListMapper<PriceObservation<Self::Api>>;
}
