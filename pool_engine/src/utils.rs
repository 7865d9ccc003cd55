multiversx_sc::imports!();

use common_constants::RAY_PRECISION;
use common_proxies::proxy_share_pool;
use common_structs::AssetConfig;

use crate::storage;

#[multiversx_sc::module]
pub trait UtilsModule: storage::Storage + common_math::SharedMathModule {
    /// Live custody balance of a pool, read without side effects.
    fn pool_reserves(&self, pool_address: &ManagedAddress) -> BigUint {
        self.tx()
            .to(pool_address)
            .typed(proxy_share_pool::SharePoolProxy)
            .get_reserves()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Fee owed for a loan of `amount`, in raw token units.
    ///
    /// Token arithmetic at RAY precision, rounded half up back to the
    /// asset's own scale. No price enters the computation.
    fn compute_flash_loan_fee(&self, amount: &BigUint, config: &AssetConfig<Self::Api>) -> BigUint {
        let amount_dec = self.to_decimal(amount.clone(), config.asset_decimals);
        let fee_ray = self.mul_half_up(&amount_dec, &config.flash_loan_fee, RAY_PRECISION);

        self.rescale_half_up(&fee_ray, config.asset_decimals)
            .into_raw_units()
            .clone()
    }
}
