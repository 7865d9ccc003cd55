use common_errors::*;
use common_proxies::proxy_share_pool;

use multiversx_sc::codec::multi_types::OptionalValue;
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult,
    TestAddress, TestSCAddress,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, MxscPath, TestTokenIdentifier},
    ScenarioTxRun, ScenarioWorld,
};

const SHARE_POOL_PATH: MxscPath = MxscPath::new("output/share-pool.mxsc.json");
const SHARE_POOL_ADDRESS: TestSCAddress = TestSCAddress::new("share-pool");

const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
const USDC_DECIMALS: usize = 6;

const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
const USER_ADDRESS: TestAddress = TestAddress::new("user");

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(SHARE_POOL_PATH, share_pool::ContractBuilder);
    blockchain
}

fn scaled(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(USDC_DECIMALS as u32)
}

fn usdc() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier())
}

fn setup() -> (ScenarioWorld, ManagedAddress<StaticApi>) {
    let mut world = world();

    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, scaled(1_000_000));
    world.account(USER_ADDRESS).nonce(1);

    let pool = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_share_pool::SharePoolProxy)
        .init(usdc(), USDC_DECIMALS)
        .code(SHARE_POOL_PATH)
        .new_address(SHARE_POOL_ADDRESS)
        .returns(ReturnsNewManagedAddress)
        .run();

    (world, pool)
}

fn deposit_for_user(
    world: &mut ScenarioWorld,
    pool: &ManagedAddress<StaticApi>,
    amount: BigUint<StaticApi>,
) -> BigUint<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .deposit(USER_ADDRESS.to_managed_address::<StaticApi>())
        .egld_or_single_esdt(&usdc(), 0, &amount)
        .returns(ReturnsResult)
        .run()
}

fn exchange_rate(world: &mut ScenarioWorld, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
    world
        .query()
        .to(pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .exchange_rate()
        .returns(ReturnsResult)
        .run()
        .into_raw_units()
        .clone()
}

fn reserves(world: &mut ScenarioWorld, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
    world
        .query()
        .to(pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .get_reserves()
        .returns(ReturnsResult)
        .run()
}

#[test]
fn deposit_mints_at_par_and_keeps_rate() {
    let (mut world, pool) = setup();

    let shares = deposit_for_user(&mut world, &pool, scaled(1_000));

    assert_eq!(shares, scaled(1_000));
    assert_eq!(exchange_rate(&mut world, &pool), BigUint::from(RAY));
    assert_eq!(reserves(&mut world, &pool), scaled(1_000));
}

#[test]
fn accrue_fee_compounds_the_rate() {
    let (mut world, pool) = setup();
    deposit_for_user(&mut world, &pool, scaled(1_000));

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .accrue_fee(BigUint::from(300_000u64))
        .run();

    assert_eq!(
        exchange_rate(&mut world, &pool),
        BigUint::from(1_000_300_000_000_000_000_000_000_000u128)
    );
}

#[test]
fn accrue_fee_zero_cannot_move_the_rate() {
    let (mut world, pool) = setup();
    deposit_for_user(&mut world, &pool, scaled(1_000));

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .accrue_fee(BigUint::zero())
        .returns(ExpectMessage(
            core::str::from_utf8(ERROR_RATE_MUST_INCREASE).unwrap(),
        ))
        .run();
}

#[test]
fn accrue_fee_without_shares_fails() {
    let (mut world, pool) = setup();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .accrue_fee(BigUint::from(300_000u64))
        .returns(ExpectMessage(
            core::str::from_utf8(ERROR_DEGENERATE_SUPPLY).unwrap(),
        ))
        .run();
}

#[test]
fn redeem_full_balance() {
    let (mut world, pool) = setup();
    deposit_for_user(&mut world, &pool, scaled(1_000));

    let amount = world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .redeem(
            USER_ADDRESS.to_managed_address::<StaticApi>(),
            OptionalValue::<BigUint<StaticApi>>::None,
        )
        .returns(ReturnsResult)
        .run();

    assert_eq!(amount, scaled(1_000));
    assert_eq!(reserves(&mut world, &pool), BigUint::zero());
    world
        .check_account(USER_ADDRESS)
        .esdt_balance(USDC_TOKEN, scaled(1_000));
}

#[test]
fn borrow_settle_accrue_conserves_value() {
    let (mut world, pool) = setup();
    deposit_for_user(&mut world, &pool, scaled(1_000));

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .borrow(scaled(100))
        .run();

    assert_eq!(reserves(&mut world, &pool), scaled(900));

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .settle_repayment()
        .egld_or_single_esdt(&usdc(), 0, &BigUint::from(100_300_000u64))
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .accrue_fee(BigUint::from(300_000u64))
        .run();

    assert_eq!(reserves(&mut world, &pool), BigUint::from(1_000_300_000u64));
    assert_eq!(
        exchange_rate(&mut world, &pool),
        BigUint::from(1_000_300_000_000_000_000_000_000_000u128)
    );

    let amount = world
        .query()
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .get_amount_for_shares(scaled(1_000))
        .returns(ReturnsResult)
        .run();
    assert_eq!(amount, BigUint::from(1_000_300_000u64));

    let shares = world
        .query()
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .get_shares_for_amount(BigUint::from(1_000_300_000u64))
        .returns(ReturnsResult)
        .run();
    assert_eq!(shares, scaled(1_000));
}

#[test]
fn borrow_above_reserves_fails() {
    let (mut world, pool) = setup();
    deposit_for_user(&mut world, &pool, scaled(1_000));

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .borrow(scaled(2_000))
        .returns(ExpectMessage(
            core::str::from_utf8(ERROR_INSUFFICIENT_LIQUIDITY).unwrap(),
        ))
        .run();
}

#[test]
fn non_owner_cannot_touch_the_pool() {
    let (mut world, pool) = setup();

    world
        .tx()
        .from(USER_ADDRESS)
        .to(&pool)
        .typed(proxy_share_pool::SharePoolProxy)
        .borrow(scaled(100))
        .returns(ExpectMessage("Endpoint can only be called by owner"))
        .run();
}
