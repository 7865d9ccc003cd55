#![no_std]

multiversx_sc::imports!();

use common_errors::ERROR_NO_PRICE_FOUND;

/// Settable price feed used by the tests.
///
/// Prices are WAD-scaled. The engine only exposes them through a view;
/// the tests flip them around to prove fees never follow.
#[multiversx_sc::contract]
pub trait PriceFeedMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setPrice)]
    fn set_price(&self, asset: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.price(&asset).set(price);
    }

    #[view(latestPrice)]
    fn latest_price(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        let mapper = self.price(&asset);
        require!(!mapper.is_empty(), ERROR_NO_PRICE_FOUND);

        mapper.get()
    }

    #[storage_mapper("price")]
    fn price(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;
}
