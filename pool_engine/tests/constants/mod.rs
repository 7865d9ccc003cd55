use multiversx_sc::types::{EgldOrEsdtTokenIdentifier, TestAddress, TestSCAddress};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{MxscPath, TestTokenIdentifier},
};

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

// 0.3%, WAD-scaled
pub const FLASH_LOAN_FEE: u64 = 3_000_000_000_000_000;

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_DECIMALS: usize = 6;

pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const WEGLD_DECIMALS: usize = 18;

pub const UNKNOWN_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("UNKNOWN-abcdef");
pub const INVALID_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("1-invalid");

pub const POOL_ENGINE_ADDRESS: TestSCAddress = TestSCAddress::new("pool-engine");
pub const SHARE_POOL_TEMPLATE_ADDRESS: TestSCAddress = TestSCAddress::new("share-pool-template");
pub const FLASH_MOCK_ADDRESS: TestSCAddress = TestSCAddress::new("flash-mock");
pub const PRICE_FEED_ADDRESS: TestSCAddress = TestSCAddress::new("price-feed");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const DEPOSITOR_ADDRESS: TestAddress = TestAddress::new("depositor");
pub const SECOND_DEPOSITOR_ADDRESS: TestAddress = TestAddress::new("second-depositor");

pub const POOL_ENGINE_PATH: MxscPath = MxscPath::new("output/pool-engine.mxsc.json");
pub const SHARE_POOL_PATH: MxscPath = MxscPath::new("../share_pool/output/share-pool.mxsc.json");
pub const FLASH_MOCK_PATH: MxscPath = MxscPath::new("../flash_mock/output/flash-mock.mxsc.json");
pub const PRICE_FEED_PATH: MxscPath =
    MxscPath::new("../price_feed_mock/output/price-feed-mock.mxsc.json");

pub fn asset(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}
