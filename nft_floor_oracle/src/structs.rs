use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, Debug, PartialEq, Eq,
)]
pub enum Role {
    Admin,
    Updater,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct OracleConfig {
    pub min_count_to_aggregate: u32,
    /// Seconds an observation stays eligible for aggregation.
    pub expiration_period: u64,
    /// Multiplier bounding new observations around the current twap.
    pub max_price_deviation: u64,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct PriceObservation<M: ManagedTypeApi> {
    pub feeder: ManagedAddress<M>,
    pub price: BigUint<M>,
    pub timestamp: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwapSource {
    Admin,
    Aggregation,
}

#[type_abi]
#[derive(TopEncode)]
pub struct TwapUpdatedEvent<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
    pub observations: usize,
    pub block: u64,
    pub epoch: u64,
}
