#![allow(dead_code)]

use crate::constants::*;
use common_proxies::{proxy_flash_mock, proxy_pool_engine, proxy_price_feed, proxy_share_pool};
use multiversx_sc::codec::multi_types::OptionalValue;
use multiversx_sc::types::{
    BigUint, ManagedAddress, ManagedArgBuffer, ManagedBuffer, ReturnsNewManagedAddress,
    ReturnsResult, TestAddress, TestTokenIdentifier,
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POOL_ENGINE_PATH, pool_engine::ContractBuilder);
    blockchain.register_contract(SHARE_POOL_PATH, share_pool::ContractBuilder);
    blockchain.register_contract(FLASH_MOCK_PATH, flash_mock::ContractBuilder);
    blockchain.register_contract(PRICE_FEED_PATH, price_feed_mock::ContractBuilder);

    blockchain
}

pub fn scaled(amount: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals as u32)
}

pub struct PoolEngineTestState {
    pub world: ScenarioWorld,
    pub engine: ManagedAddress<StaticApi>,
    pub template: ManagedAddress<StaticApi>,
    pub flash_mock: ManagedAddress<StaticApi>,
    pub price_feed: ManagedAddress<StaticApi>,
    pub usdc_pool: ManagedAddress<StaticApi>,
}

impl PoolEngineTestState {
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER_ADDRESS).nonce(1);
        world
            .account(DEPOSITOR_ADDRESS)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, scaled(1_000_000, USDC_DECIMALS))
            .esdt_balance(WEGLD_TOKEN, scaled(10_000, WEGLD_DECIMALS));
        world
            .account(SECOND_DEPOSITOR_ADDRESS)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, scaled(1_000_000, USDC_DECIMALS))
            .esdt_balance(WEGLD_TOKEN, scaled(10_000, WEGLD_DECIMALS));

        let template = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_share_pool::SharePoolProxy)
            .init(asset(USDC_TOKEN), USDC_DECIMALS)
            .code(SHARE_POOL_PATH)
            .new_address(SHARE_POOL_TEMPLATE_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let engine = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .init(&template)
            .code(POOL_ENGINE_PATH)
            .new_address(POOL_ENGINE_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let flash_mock = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_flash_mock::FlashMockProxy)
            .init()
            .code(FLASH_MOCK_PATH)
            .new_address(FLASH_MOCK_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let price_feed = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_price_feed::PriceFeedProxy)
            .init()
            .code(PRICE_FEED_PATH)
            .new_address(PRICE_FEED_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        // The borrower mock pays fees out of its own pre-funded balance.
        world.set_esdt_balance(
            flash_mock.clone(),
            USDC_TOKEN.as_bytes(),
            scaled(1_000_000, USDC_DECIMALS),
        );
        world.set_esdt_balance(
            flash_mock.clone(),
            WEGLD_TOKEN.as_bytes(),
            scaled(10_000, WEGLD_DECIMALS),
        );

        let mut state = Self {
            world,
            engine,
            template,
            flash_mock,
            price_feed,
            usdc_pool: ManagedAddress::zero(),
        };

        state.usdc_pool = state.create_share_pool(USDC_TOKEN, FLASH_LOAN_FEE, USDC_DECIMALS, None);
        state.set_price_feed_address();
        state.set_price(USDC_TOKEN, BigUint::from(WAD));

        state
    }

    // --- Admin helpers ---

    pub fn create_share_pool(
        &mut self,
        token: TestTokenIdentifier,
        flash_loan_fee: u64,
        decimals: usize,
        error_message: Option<&[u8]>,
    ) -> ManagedAddress<StaticApi> {
        let call = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .create_share_pool(asset(token), BigUint::from(flash_loan_fee), decimals);

        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                ManagedAddress::zero()
            },
            None => call.returns(ReturnsResult).run(),
        }
    }

    pub fn set_asset_active(&mut self, token: TestTokenIdentifier, is_active: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .set_asset_active(asset(token), is_active)
            .run();
    }

    pub fn set_flash_loan_fee(
        &mut self,
        token: TestTokenIdentifier,
        flash_loan_fee: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .set_flash_loan_fee(asset(token), BigUint::from(flash_loan_fee));

        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn set_price_feed_address(&mut self) {
        let price_feed = self.price_feed.clone();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .set_price_feed_address(&price_feed)
            .run();
    }

    pub fn set_price(&mut self, token: TestTokenIdentifier, price: BigUint<StaticApi>) {
        let price_feed = self.price_feed.clone();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&price_feed)
            .typed(proxy_price_feed::PriceFeedProxy)
            .set_price(asset(token), price)
            .run();
    }

    // --- User flows ---

    pub fn deposit(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) -> BigUint<StaticApi> {
        let deposit_token = asset(token);
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .deposit()
            .egld_or_single_esdt(&deposit_token, 0, &amount);

        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                BigUint::zero()
            },
            None => call.returns(ReturnsResult).run(),
        }
    }

    pub fn redeem(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        opt_shares: OptionalValue<BigUint<StaticApi>>,
        error_message: Option<&[u8]>,
    ) -> BigUint<StaticApi> {
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .redeem(asset(token), opt_shares);

        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                BigUint::zero()
            },
            None => call.returns(ReturnsResult).run(),
        }
    }

    pub fn flash_loan(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        contract_address: ManagedAddress<StaticApi>,
        endpoint: ManagedBuffer<StaticApi>,
        arguments: ManagedArgBuffer<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .flash_loan(asset(token), amount, contract_address, endpoint, arguments);

        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    // --- Queries ---

    pub fn exchange_rate(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_share_pool::SharePoolProxy)
            .exchange_rate()
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    pub fn total_shares(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_share_pool::SharePoolProxy)
            .total_shares()
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    pub fn share_balance(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        holder: TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_share_pool::SharePoolProxy)
            .share_balance(holder.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn reserves(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_share_pool::SharePoolProxy)
            .get_reserves()
            .returns(ReturnsResult)
            .run()
    }

    pub fn flash_loan_depth(&mut self, token: TestTokenIdentifier) -> u64 {
        let engine = self.engine.clone();
        self.world
            .query()
            .to(&engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .flash_loan_depth(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_asset_price(
        &mut self,
        token: TestTokenIdentifier,
        error_message: Option<&[u8]>,
    ) -> BigUint<StaticApi> {
        let engine = self.engine.clone();
        let call = self
            .world
            .query()
            .to(&engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .get_asset_price(asset(token));

        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                BigUint::zero()
            },
            None => call.returns(ReturnsResult).run(),
        }
    }
}
