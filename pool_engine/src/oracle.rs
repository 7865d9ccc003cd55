multiversx_sc::imports!();

use common_errors::ERROR_PRICE_FEED_NOT_SET;
use common_proxies::proxy_price_feed;

use crate::storage;

#[multiversx_sc::module]
pub trait OracleModule: storage::Storage {
    /// Spot price pass-through for off-chain consumers, WAD-scaled.
    ///
    /// Nothing in the lending flow reads this. A fee priced off a spot feed
    /// could be manipulated within the very transaction that pays it, so
    /// fees stay amount-denominated.
    #[view(getAssetPrice)]
    fn get_asset_price(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        let feed = self.price_feed_address();
        require!(!feed.is_empty(), ERROR_PRICE_FEED_NOT_SET);

        self.tx()
            .to(feed.get())
            .typed(proxy_price_feed::PriceFeedProxy)
            .latest_price(&asset)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
