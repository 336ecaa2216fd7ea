multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::structs::{OracleConfig, Role, TwapSource, TwapUpdatedEvent};

#[multiversx_sc::module]
pub trait EventsModule {
    fn emit_twap_updated_event(
        &self,
        asset: &TokenIdentifier,
        source: TwapSource,
        price: &BigUint,
        timestamp: u64,
        observations: usize,
    ) {
        self.twap_updated_event(
            asset,
            source,
            &TwapUpdatedEvent {
                price: price.clone(),
                timestamp,
                observations,
                block: self.blockchain().get_block_nonce(),
                epoch: self.blockchain().get_block_epoch(),
            },
        )
    }

    #[event("twap_updated")]
    fn twap_updated_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] source: TwapSource,
        twap_updated_event: &TwapUpdatedEvent<Self::Api>,
    );

    #[event("observation_recorded")]
    fn observation_recorded_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] feeder: &ManagedAddress,
        #[indexed] timestamp: u64,
        price: &BigUint,
    );

    #[event("observation_dropped")]
    fn observation_dropped_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] feeder: &ManagedAddress,
        #[indexed] timestamp: u64,
        price: &BigUint,
    );

    #[event("asset_added")]
    fn asset_added_event(&self, #[indexed] asset: &TokenIdentifier);

    #[event("asset_removed")]
    fn asset_removed_event(&self, #[indexed] asset: &TokenIdentifier);

    #[event("feeder_added")]
    fn feeder_added_event(&self, #[indexed] feeder: &ManagedAddress);

    #[event("feeder_removed")]
    fn feeder_removed_event(&self, #[indexed] feeder: &ManagedAddress);

    #[event("config_set")]
    fn config_set_event(&self, config: &OracleConfig);

    #[event("feed_paused")]
    fn feed_paused_event(&self, #[indexed] asset: &TokenIdentifier, #[indexed] paused: bool);

    #[event("role_granted")]
    fn role_granted_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        #[indexed] sender: &ManagedAddress,
    );

    #[event("role_revoked")]
    fn role_revoked_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        #[indexed] sender: &ManagedAddress,
    );
}
