multiversx_sc::imports!();

use common_structs::AssetConfig;

#[multiversx_sc::module]
pub trait Storage {
    /// Code source for every deployed share pool.
    #[storage_mapper("share_pool_template_address")]
    fn share_pool_template_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("price_feed_address")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Deployed share pool of each supported asset.
    #[view(getPoolAddress)]
    #[storage_mapper("pools_map")]
    fn pools_map(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<ManagedAddress>;

    #[view(getAssetConfig)]
    #[storage_mapper("asset_config")]
    fn asset_config(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<AssetConfig<Self::Api>>;

    /// Number of flash loans currently open for an asset. A counter, not a
    /// flag: nested loans of the same asset each add a level.
    #[view(getFlashLoanDepth)]
    #[storage_mapper("flash_loan_depth")]
    fn flash_loan_depth(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<u64>;

    /// Amount repaid so far towards the loan opened at `depth`.
    /// Raw `BigUint` so an untouched slot decodes to zero.
    #[storage_mapper("flash_loan_repaid")]
    fn flash_loan_repaid(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        depth: u64,
    ) -> SingleValueMapper<BigUint>;
}
