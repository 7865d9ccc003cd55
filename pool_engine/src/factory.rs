multiversx_sc::imports!();

use common_errors::ERROR_TEMPLATE_EMPTY;
use common_proxies::proxy_share_pool;

use crate::storage;

#[multiversx_sc::module]
pub trait FactoryModule: storage::Storage {
    fn create_pool(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
    ) -> ManagedAddress {
        require!(
            !self.share_pool_template_address().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );

        self.tx()
            .typed(proxy_share_pool::SharePoolProxy)
            .init(asset, asset_decimals)
            .from_source(self.share_pool_template_address().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call()
    }

    fn upgrade_pool(&self, pool_address: ManagedAddress) {
        require!(
            !self.share_pool_template_address().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );

        self.tx()
            .to(pool_address)
            .typed(proxy_share_pool::SharePoolProxy)
            .upgrade()
            .from_source(self.share_pool_template_address().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .upgrade_async_call_and_exit();
    }
}
