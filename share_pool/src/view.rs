multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::RAY_PRECISION;

use crate::storage;

/// Read-only endpoints for key pool metrics.
#[multiversx_sc::module]
pub trait ViewModule: storage::Storage + common_math::SharedMathModule {
    /// Retrieves the live custody balance of the pool asset.
    ///
    /// # Returns
    /// - `BigUint`: The current reserves.
    #[view(getReserves)]
    fn reserves(&self) -> BigUint {
        let params = self.params().get();
        self.blockchain().get_sc_balance(&params.asset_id, 0)
    }

    /// Underlying amount a given share amount redeems for at the current rate.
    #[view(getAmountForShares)]
    fn get_amount_for_shares(&self, shares: BigUint) -> BigUint {
        let params = self.params().get();
        let rate = self.exchange_rate().get();
        let shares_dec = self.to_decimal(shares, params.asset_decimals);
        let amount = self.mul_half_up(&shares_dec, &rate, RAY_PRECISION);

        self.rescale_half_up(&amount, params.asset_decimals)
            .into_raw_units()
            .clone()
    }

    /// Shares a given underlying amount mints at the current rate.
    #[view(getSharesForAmount)]
    fn get_shares_for_amount(&self, amount: BigUint) -> BigUint {
        let params = self.params().get();
        let rate = self.exchange_rate().get();
        let amount_dec = self.to_decimal(amount, params.asset_decimals);
        let shares = self.div_half_up(&amount_dec, &rate, RAY_PRECISION);

        self.rescale_half_up(&shares, params.asset_decimals)
            .into_raw_units()
            .clone()
    }
}
