#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod aggregation;
pub mod constants;
pub mod errors;
pub mod events;
pub mod permissions;
pub mod storage;
pub mod structs;
pub mod utils;
pub mod views;

#[multiversx_sc::contract]
pub trait NftFloorOracle:
    multiversx_sc_modules::pause::PauseModule
    + events::EventsModule
    + storage::StorageModule
    + permissions::PermissionsModule
    + utils::UtilsModule
    + views::ViewsModule
    + admin::AdminModule
{
    /// Writes a floor price for a registered NFT collection.
    /// Admins set the twap directly, zero included. Authorized feeders add an observation
    /// that must sit inside the deviation band and may trigger a new aggregation.
    #[endpoint(setPrice)]
    fn set_price(&self, asset: TokenIdentifier, price: BigUint) {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        self.set_price_checked(&caller, asset, price);
    }

    /// Applies `setPrice` to every pair in order. One rejected pair reverts the batch.
    #[endpoint(setMultiplePrices)]
    fn set_multiple_prices(&self, prices: MultiValueEncoded<MultiValue2<TokenIdentifier, BigUint>>) {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        for (asset, price) in prices.into_iter().map(|entry| entry.into_tuple()) {
            self.set_price_checked(&caller, asset, price);
        }
    }
}
