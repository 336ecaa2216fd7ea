multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use arrayvec::ArrayVec;

use crate::{
    aggregation,
    constants::*,
    errors::*,
    structs::{OracleConfig, PriceObservation, Role, TwapSource},
};

#[multiversx_sc::module]
pub trait UtilsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::permissions::PermissionsModule
    + multiversx_sc_modules::pause::PauseModule
{
    fn require_registered_asset(&self, asset: &TokenIdentifier) {
        require!(self.assets().contains(asset), ASSET_NOT_REGISTERED_ERROR);
    }

    fn require_valid_config(&self, config: &OracleConfig) {
        require!(
            config.min_count_to_aggregate >= MIN_COUNT_TO_AGGREGATE
                && config.min_count_to_aggregate as usize <= MAX_OBSERVATIONS,
            INVALID_MIN_COUNT_ERROR
        );
        require!(
            config.max_price_deviation >= MIN_PRICE_DEVIATION
                && config.max_price_deviation <= MAX_PRICE_DEVIATION,
            INVALID_MAX_DEVIATION_ERROR
        );
    }

    /// Routes a single price write. Admins override the twap directly, feeders go through
    /// the deviation guard and the aggregation window.
    fn set_price_checked(&self, caller: &ManagedAddress, asset: TokenIdentifier, price: BigUint) {
        let is_admin = self.has_role(Role::Admin, caller);
        if !is_admin {
            require!(self.is_authorized_feeder(caller), UNAUTHORIZED_ERROR);
            require!(price > BigUint::zero(), PRICE_MUST_BE_POSITIVE_ERROR);
        }

        self.require_registered_asset(&asset);
        require!(!self.feed_paused(&asset).get(), FEED_PAUSED_ERROR);

        let now = self.blockchain().get_block_timestamp();
        if is_admin {
            self.write_twap(&asset, &price, now, TwapSource::Admin, 0);
            return;
        }

        self.submit_observation(caller, asset, price, now);
    }

    fn submit_observation(
        &self,
        feeder: &ManagedAddress,
        asset: TokenIdentifier,
        price: BigUint,
        now: u64,
    ) {
        let config = self.config().get();
        let twap = self.twap(&asset).get();
        require!(
            aggregation::is_within_deviation(&price, &twap, config.max_price_deviation),
            INVALID_PRICE_DEVIATION_ERROR
        );

        self.evict_expired_observations(&asset, now, config.expiration_period);
        self.make_room_for(&asset, feeder);

        self.observations(&asset).push_back(PriceObservation {
            feeder: feeder.clone(),
            price: price.clone(),
            timestamp: now,
        });
        self.observation_recorded_event(&asset, feeder, now, &price);

        self.aggregate(&asset, &config, now);
    }

    /// Drops observations from the front of the window while they are expired.
    /// Arrival order equals timestamp order, so the first fresh entry ends the sweep.
    fn evict_expired_observations(&self, asset: &TokenIdentifier, now: u64, expiration_period: u64) {
        let mut observations = self.observations(asset);
        while let Some(oldest) = observations.front() {
            if !aggregation::is_expired(oldest.get_value_as_ref().timestamp, now, expiration_period) {
                break;
            }
            let _ = observations.pop_front();
        }
    }

    /// Frees one slot before a new observation lands. A feeder holding its full share gives
    /// up its own oldest entry, so it can never crowd the others out. Otherwise a full window
    /// drops its oldest entry overall.
    fn make_room_for(&self, asset: &TokenIdentifier, feeder: &ManagedAddress) {
        let mut observations = self.observations(asset);

        let mut own_count = 0usize;
        let mut own_oldest = None;
        for node in observations.iter() {
            if &node.get_value_as_ref().feeder == feeder {
                own_count += 1;
                if own_oldest.is_none() {
                    own_oldest = Some(node.get_node_id());
                }
            }
        }

        let dropped = if own_count >= MAX_OBSERVATIONS_PER_FEEDER {
            own_oldest.and_then(|node_id| observations.remove_node_by_id(node_id))
        } else if observations.len() >= MAX_OBSERVATIONS {
            observations.pop_front()
        } else {
            None
        };

        if let Some(node) = dropped {
            let observation = node.into_value();
            self.observation_dropped_event(
                asset,
                &observation.feeder,
                observation.timestamp,
                &observation.price,
            );
        }
    }

    fn aggregate(&self, asset: &TokenIdentifier, config: &OracleConfig, now: u64) {
        let observations = self.observations(asset);
        let count = observations.len();
        if count < config.min_count_to_aggregate as usize {
            return;
        }

        let mut prices = ArrayVec::<BigUint<Self::Api>, MAX_OBSERVATIONS>::new();
        for node in observations.iter() {
            prices.push(node.into_value().price);
        }

        if let Some(price) = aggregation::upper_median(prices.as_mut_slice()) {
            self.write_twap(asset, &price, now, TwapSource::Aggregation, count);
        }
    }

    fn write_twap(
        &self,
        asset: &TokenIdentifier,
        price: &BigUint,
        now: u64,
        source: TwapSource,
        observations: usize,
    ) {
        self.twap(asset).set(price);
        self.last_updated(asset).set(now);
        self.emit_twap_updated_event(asset, source, price, now, observations);
    }

    fn clear_asset_state(&self, asset: &TokenIdentifier) {
        self.observations(asset).clear();
        self.twap(asset).clear();
        self.last_updated(asset).clear();
        self.feed_paused(asset).clear();
    }

    /// Replaces the feeder registry. Only addresses that enter or leave it are touched:
    /// dropped feeders lose their `Updater` role, every listed feeder holds it afterwards.
    fn set_oracles_unchecked(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        let mut new_feeders = ManagedVec::<Self::Api, ManagedAddress<Self::Api>>::new();
        for feeder in feeders {
            if !new_feeders.contains(&feeder) {
                new_feeders.push(feeder);
            }
        }

        let mut dropped = ManagedVec::<Self::Api, ManagedAddress<Self::Api>>::new();
        for feeder in self.feeders().iter() {
            if !new_feeders.contains(&feeder) {
                dropped.push(feeder);
            }
        }

        for feeder in dropped.iter() {
            let _ = self.feeders().swap_remove(&feeder);
            self.revoke_role_unchecked(Role::Updater, &feeder);
            self.feeder_removed_event(&feeder);
        }

        for feeder in new_feeders.iter() {
            if self.feeders().insert(feeder.clone()) {
                self.feeder_added_event(&feeder);
            }
            self.grant_role_unchecked(Role::Updater, &feeder);
        }
    }
}
