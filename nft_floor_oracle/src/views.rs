multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::structs::PriceObservation;

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule {
    /// Returns the current floor price of the asset, or zero when the asset is unknown
    /// or was never primed. Zero always means "no data", never a real floor.
    #[view(getTwap)]
    fn get_twap(&self, asset: TokenIdentifier) -> BigUint {
        self.twap(&asset).get()
    }

    #[view(getLastUpdateTime)]
    fn get_last_update_time(&self, asset: TokenIdentifier) -> u64 {
        self.last_updated(&asset).get()
    }

    #[view(isFeedPaused)]
    fn is_feed_paused(&self, asset: TokenIdentifier) -> bool {
        self.feed_paused(&asset).get()
    }

    #[view(isAssetRegistered)]
    fn is_asset_registered(&self, asset: TokenIdentifier) -> bool {
        self.assets().contains(&asset)
    }

    #[view(getAssets)]
    fn get_assets(&self) -> MultiValueEncoded<TokenIdentifier> {
        let mut result = MultiValueEncoded::new();
        for asset in self.assets().iter() {
            result.push(asset);
        }
        result
    }

    #[view(getFeeders)]
    fn get_feeders(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for feeder in self.feeders().iter() {
            result.push(feeder);
        }
        result
    }

    /// Raw observation window in arrival order, including entries that expired since
    /// the last write. Eviction only happens on the next feeder submission.
    #[view(getObservations)]
    fn get_observations(
        &self,
        asset: TokenIdentifier,
    ) -> MultiValueEncoded<PriceObservation<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for node in self.observations(&asset).iter() {
            result.push(node.into_value());
        }
        result
    }
}
