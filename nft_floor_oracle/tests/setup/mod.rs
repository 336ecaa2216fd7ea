#![allow(dead_code)]

use crate::constants::*;

use common_proxies::proxy_nft_floor_oracle::{
    NftFloorOracleProxy, OracleConfig, PriceObservation, Role,
};
use multiversx_sc::types::{
    BigUint, ManagedAddress, MultiValueEncoded, ReturnsResult, TestAddress, TokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, MultiValue2, ReturnsLogs, TestTokenIdentifier},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(NFT_FLOOR_ORACLE_PATH, nft_floor_oracle::ContractBuilder);

    blockchain
}

pub fn wad(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(WAD)
}

pub fn token(collection: TestTokenIdentifier) -> TokenIdentifier<StaticApi> {
    collection.to_token_identifier()
}

pub fn managed_address(address: TestAddress) -> ManagedAddress<StaticApi> {
    address.to_managed_address()
}

pub struct FloorOracleTestState {
    pub world: ScenarioWorld,
}

impl FloorOracleTestState {
    /// Deploys the oracle with `updater` and `feeder1` as feeders, unpauses it and
    /// registers the DOODLE collection.
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(START_TIMESTAMP);

        setup_nft_floor_oracle(&mut world);

        let mut state = Self { world };
        state.add_assets(OWNER_ADDRESS, &[DOODLE_COLLECTION]);
        state
    }

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn set_price(
        &mut self,
        from: TestAddress,
        collection: TestTokenIdentifier,
        price: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .set_price(token(collection), price)
            .run();
    }

    pub fn set_price_error(
        &mut self,
        from: TestAddress,
        collection: TestTokenIdentifier,
        price: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .set_price(token(collection), price)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_multiple_prices(
        &mut self,
        from: TestAddress,
        prices: &[(TestTokenIdentifier, BigUint<StaticApi>)],
        error_message: Option<&[u8]>,
    ) {
        let mut entries =
            MultiValueEncoded::<StaticApi, MultiValue2<TokenIdentifier<StaticApi>, BigUint<StaticApi>>>::new();
        for (collection, price) in prices {
            entries.push(MultiValue2::from((token(collection.clone()), price.clone())));
        }

        let call = self
            .world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .set_multiple_prices(entries);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn add_assets(&mut self, from: TestAddress, collections: &[TestTokenIdentifier]) {
        let mut assets = MultiValueEncoded::<StaticApi, TokenIdentifier<StaticApi>>::new();
        for collection in collections {
            assets.push(token(collection.clone()));
        }

        self.world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .add_assets(assets)
            .run();
    }

    pub fn add_assets_error(
        &mut self,
        from: TestAddress,
        collections: &[TestTokenIdentifier],
        error_message: &[u8],
    ) {
        let mut assets = MultiValueEncoded::<StaticApi, TokenIdentifier<StaticApi>>::new();
        for collection in collections {
            assets.push(token(collection.clone()));
        }

        self.world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .add_assets(assets)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn remove_asset(
        &mut self,
        from: TestAddress,
        collection: TestTokenIdentifier,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .remove_asset(token(collection));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn set_oracles(
        &mut self,
        from: TestAddress,
        feeders: &[TestAddress],
        error_message: Option<&[u8]>,
    ) {
        let mut addresses = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
        for feeder in feeders {
            addresses.push(managed_address(feeder.clone()));
        }

        let call = self
            .world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .set_oracles(addresses);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    /// Runs `setOracles` and returns the identifiers of the events it emitted, in order.
    pub fn set_oracles_events(&mut self, from: TestAddress, feeders: &[TestAddress]) -> Vec<Vec<u8>> {
        let mut addresses = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
        for feeder in feeders {
            addresses.push(managed_address(*feeder));
        }

        self.world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .set_oracles(addresses)
            .returns(ReturnsLogs)
            .run()
            .into_iter()
            .filter_map(|log| log.topics.first().cloned())
            .collect()
    }

    pub fn set_config(
        &mut self,
        from: TestAddress,
        min_count_to_aggregate: u32,
        expiration_period: u64,
        max_price_deviation: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .set_config(min_count_to_aggregate, expiration_period, max_price_deviation);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn set_pause(
        &mut self,
        from: TestAddress,
        collection: TestTokenIdentifier,
        paused: bool,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .set_pause(token(collection), paused);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn grant_role(
        &mut self,
        from: TestAddress,
        role: Role,
        account: TestAddress,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .grant_role(role, managed_address(account));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn revoke_role(&mut self, from: TestAddress, role: Role, account: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .revoke_role(role, managed_address(account))
            .run();
    }

    pub fn renounce_role(&mut self, from: TestAddress, role: Role) {
        self.world
            .tx()
            .from(from)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .renounce_role(role)
            .run();
    }

    pub fn pause_contract(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause_contract(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .unpause_endpoint()
            .run();
    }

    pub fn get_twap(&mut self, collection: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .get_twap(token(collection))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_last_update_time(&mut self, collection: TestTokenIdentifier) -> u64 {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .get_last_update_time(token(collection))
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_feed_paused(&mut self, collection: TestTokenIdentifier) -> bool {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .is_feed_paused(token(collection))
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_asset_registered(&mut self, collection: TestTokenIdentifier) -> bool {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .is_asset_registered(token(collection))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_assets(&mut self) -> Vec<TokenIdentifier<StaticApi>> {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .get_assets()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn get_feeders(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .get_feeders()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn get_observations(
        &mut self,
        collection: TestTokenIdentifier,
    ) -> Vec<PriceObservation<StaticApi>> {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .get_observations(token(collection))
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn get_config(&mut self) -> OracleConfig {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .config()
            .returns(ReturnsResult)
            .run()
    }

    pub fn has_role(&mut self, role: Role, account: TestAddress) -> bool {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .has_role_view(role, managed_address(account))
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_authorized_feeder(&mut self, account: TestAddress) -> bool {
        self.world
            .query()
            .to(NFT_FLOOR_ORACLE_ADDRESS)
            .typed(NftFloorOracleProxy)
            .is_authorized_feeder_view(managed_address(account))
            .returns(ReturnsResult)
            .run()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(UPDATER_ADDRESS).nonce(1);
    world.account(FEEDER_ADDRESS_1).nonce(1);
    world.account(FEEDER_ADDRESS_2).nonce(1);
    world.account(FEEDER_ADDRESS_3).nonce(1);
    world.account(STRANGER_ADDRESS).nonce(1);
    for feeder in POOL_FEEDERS {
        world.account(feeder).nonce(1);
    }
}

pub fn setup_nft_floor_oracle(world: &mut ScenarioWorld) {
    let mut feeders = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
    feeders.push(managed_address(UPDATER_ADDRESS));
    feeders.push(managed_address(FEEDER_ADDRESS_1));

    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(NftFloorOracleProxy)
        .init(
            INITIAL_MIN_COUNT,
            INITIAL_EXPIRATION_PERIOD,
            INITIAL_MAX_DEVIATION,
            feeders,
        )
        .code(NFT_FLOOR_ORACLE_PATH)
        .new_address(NFT_FLOOR_ORACLE_ADDRESS)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(NFT_FLOOR_ORACLE_ADDRESS)
        .typed(NftFloorOracleProxy)
        .unpause_endpoint()
        .run();
}
