#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod oracle;
pub mod storage;
pub mod structs;

use errors::{ADDRESS_IS_ZERO_ERROR, NO_PRICE_AVAILABLE_ERROR};
use structs::PriceSource;

#[multiversx_sc::contract]
pub trait PriceRouter: storage::StorageModule + oracle::OracleModule {
    #[init]
    fn init(&self, floor_oracle_address: ManagedAddress) {
        self.set_floor_oracle_unchecked(floor_oracle_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setFloorOracle)]
    fn set_floor_oracle(&self, floor_oracle_address: ManagedAddress) {
        self.set_floor_oracle_unchecked(floor_oracle_address);
    }

    /// Zero clears the fallback for the asset.
    #[only_owner]
    #[endpoint(setFallbackPrice)]
    fn set_fallback_price(&self, asset: TokenIdentifier, price: BigUint) {
        self.fallback_price(&asset).set(&price);
    }

    #[view(getAssetPrice)]
    fn get_asset_price(&self, asset: TokenIdentifier) -> BigUint {
        let (source, price) = self.find_asset_price(&asset);
        require!(source != PriceSource::Unavailable, NO_PRICE_AVAILABLE_ERROR);

        price
    }

    #[view(getPriceSource)]
    fn get_price_source(&self, asset: TokenIdentifier) -> PriceSource {
        let (source, _) = self.find_asset_price(&asset);
        source
    }

    fn set_floor_oracle_unchecked(&self, floor_oracle_address: ManagedAddress) {
        require!(!floor_oracle_address.is_zero(), ADDRESS_IS_ZERO_ERROR);
        self.floor_oracle_address().set(&floor_oracle_address);
    }
}
