multiversx_sc::imports!();

use crate::{errors::FLOOR_ORACLE_NOT_SET_ERROR, storage, structs::PriceSource};

#[multiversx_sc::module]
pub trait OracleModule: storage::StorageModule {
    /// Resolves the price of an asset, preferring the floor oracle.
    /// A zero twap means the oracle has no active quote (unknown, removed or unprimed
    /// asset) and is never returned as a price.
    fn find_asset_price(&self, asset: &TokenIdentifier) -> (PriceSource, BigUint) {
        let floor_oracle = self.floor_oracle_address();
        require!(!floor_oracle.is_empty(), FLOOR_ORACLE_NOT_SET_ERROR);

        let floor_price = self.floor_twap(floor_oracle.get(), asset.clone()).get();
        if floor_price > BigUint::zero() {
            return (PriceSource::FloorOracle, floor_price);
        }

        let fallback_price = self.fallback_price(asset).get();
        if fallback_price > BigUint::zero() {
            return (PriceSource::Fallback, fallback_price);
        }

        (PriceSource::Unavailable, BigUint::zero())
    }
}
