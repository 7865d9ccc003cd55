multiversx_sc::imports!();

use common_constants::WAD;
use common_errors::{
    ERROR_ASSET_ALREADY_SUPPORTED, ERROR_INVALID_FLASH_LOAN_FEE, ERROR_INVALID_TICKER,
};
use common_structs::AssetConfig;

use crate::{factory, storage, validation};

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + factory::FactoryModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Deploys a share pool for a new asset and registers its configuration.
    ///
    /// # Arguments
    /// - `asset`: Token identifier (EGLD or ESDT) the pool will custody.
    /// - `flash_loan_fee`: WAD-scaled fee rate, strictly below 100%.
    /// - `asset_decimals`: Decimals of the underlying token.
    ///
    /// # Returns
    /// - `ManagedAddress`: Address of the freshly deployed pool.
    #[only_owner]
    #[endpoint(createSharePool)]
    fn create_share_pool(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        flash_loan_fee: BigUint,
        asset_decimals: usize,
    ) -> ManagedAddress {
        require!(
            self.pools_map(&asset).is_empty(),
            ERROR_ASSET_ALREADY_SUPPORTED
        );
        require!(asset.is_valid(), ERROR_INVALID_TICKER);
        self.validate_flash_loan_fee(&flash_loan_fee);

        let address = self.create_pool(&asset, asset_decimals);
        self.require_non_zero_address(&address);

        self.pools_map(&asset).set(address.clone());
        self.asset_config(&asset).set(AssetConfig {
            is_active: true,
            flash_loan_fee: self.to_decimal_wad(flash_loan_fee.clone()),
            asset_decimals,
        });

        self.create_share_pool_event(&asset, &address, &flash_loan_fee, asset_decimals);

        address
    }

    /// Re-deploys an existing pool from the current template code.
    #[only_owner]
    #[endpoint(upgradeSharePool)]
    fn upgrade_share_pool(&self, asset: EgldOrEsdtTokenIdentifier) {
        let pool_address = self.require_asset_supported(&asset);
        self.upgrade_pool(pool_address);
    }

    /// Enables or disables deposits and flash loans for an asset.
    /// Redemptions stay available either way.
    #[only_owner]
    #[endpoint(setAssetActive)]
    fn set_asset_active(&self, asset: EgldOrEsdtTokenIdentifier, is_active: bool) {
        self.require_asset_supported(&asset);

        self.asset_config(&asset)
            .update(|config| config.is_active = is_active);

        self.update_asset_status_event(&asset, is_active);
    }

    #[only_owner]
    #[endpoint(setFlashLoanFee)]
    fn set_flash_loan_fee(&self, asset: EgldOrEsdtTokenIdentifier, flash_loan_fee: BigUint) {
        self.require_asset_supported(&asset);
        self.validate_flash_loan_fee(&flash_loan_fee);

        let previous_fee = self
            .asset_config(&asset)
            .get()
            .flash_loan_fee
            .into_raw_units()
            .clone();

        self.asset_config(&asset)
            .update(|config| config.flash_loan_fee = self.to_decimal_wad(flash_loan_fee.clone()));

        self.update_flash_loan_fee_event(&asset, &previous_fee, &flash_loan_fee);
    }

    #[only_owner]
    #[endpoint(setPriceFeedAddress)]
    fn set_price_feed_address(&self, price_feed_address: ManagedAddress) {
        self.require_non_zero_address(&price_feed_address);
        self.price_feed_address().set(&price_feed_address);

        self.update_price_feed_event(&price_feed_address);
    }

    /// A fee of 100% or more would make every loan unrepayable.
    fn validate_flash_loan_fee(&self, flash_loan_fee: &BigUint) {
        require!(
            flash_loan_fee < &BigUint::from(WAD),
            ERROR_INVALID_FLASH_LOAN_FEE
        );
    }
}
