use crate::{
    errors::ASSET_NOT_REGISTERED_ERROR,
    structs::{OracleConfig, Role},
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + multiversx_sc_modules::pause::PauseModule
    + crate::permissions::PermissionsModule
    + crate::utils::UtilsModule
    + crate::views::ViewsModule
    + crate::events::EventsModule
{
    /// The deployer becomes the first admin. The contract starts paused, the owner
    /// unpauses it once assets and feeders are in place.
    #[init]
    fn init(
        &self,
        min_count_to_aggregate: u32,
        expiration_period: u64,
        max_price_deviation: u64,
        feeders: MultiValueEncoded<ManagedAddress>,
    ) {
        let deployer = self.blockchain().get_caller();
        self.grant_role_unchecked(Role::Admin, &deployer);

        self.set_config_unchecked(OracleConfig {
            min_count_to_aggregate,
            expiration_period,
            max_price_deviation,
        });
        self.set_oracles_unchecked(feeders);

        self.set_paused(true);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.set_paused(true);
    }

    #[endpoint(addAssets)]
    fn add_assets(&self, assets: MultiValueEncoded<TokenIdentifier>) {
        self.require_admin();

        let mut assets_mapper = self.assets();
        for asset in assets {
            if assets_mapper.insert(asset.clone()) {
                self.asset_added_event(&asset);
            }
        }
    }

    /// Drops every trace of the asset. Consumers reading the twap afterwards get zero
    /// and are expected to fall back to another source.
    #[endpoint(removeAsset)]
    fn remove_asset(&self, asset: TokenIdentifier) {
        self.require_admin();
        require!(self.assets().swap_remove(&asset), ASSET_NOT_REGISTERED_ERROR);

        self.clear_asset_state(&asset);
        self.asset_removed_event(&asset);
    }

    #[endpoint(setOracles)]
    fn set_oracles(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        self.require_admin();
        self.set_oracles_unchecked(feeders);
    }

    /// Applies to the next aggregation pass only, stored observations are not re-aggregated.
    #[endpoint(setConfig)]
    fn set_config(
        &self,
        min_count_to_aggregate: u32,
        expiration_period: u64,
        max_price_deviation: u64,
    ) {
        self.require_admin();
        self.set_config_unchecked(OracleConfig {
            min_count_to_aggregate,
            expiration_period,
            max_price_deviation,
        });
    }

    #[endpoint(setPause)]
    fn set_pause(&self, asset: TokenIdentifier, paused: bool) {
        self.require_admin();
        self.require_registered_asset(&asset);

        self.feed_paused(&asset).set(paused);
        self.feed_paused_event(&asset, paused);
    }

    fn set_config_unchecked(&self, config: OracleConfig) {
        self.require_valid_config(&config);
        self.config().set(&config);
        self.config_set_event(&config);
    }
}
