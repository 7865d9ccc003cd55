multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::RAY_PRECISION;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_DEGENERATE_SUPPLY, ERROR_INSUFFICIENT_LIQUIDITY,
    ERROR_INSUFFICIENT_SHARES, ERROR_RATE_MUST_INCREASE,
};

use crate::{cache::Cache, storage, utils, view};

#[multiversx_sc::module]
pub trait SharesModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + view::ViewModule
{
    /// Mints shares for the incoming payment at the current exchange rate.
    ///
    /// `shares = amount / exchange_rate`. The exchange rate itself is left
    /// untouched: a deposit must never move the share price, otherwise a
    /// depositor could inflate it and skim value from existing holders.
    ///
    /// # Returns
    /// - `BigUint`: The raw amount of shares minted for `depositor`.
    #[only_owner]
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self, depositor: ManagedAddress) -> BigUint {
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);

        require!(amount > cache.zero, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let shares_ray = self.div_half_up(&amount, &cache.exchange_rate, RAY_PRECISION);
        let shares = self.rescale_half_up(&shares_ray, cache.params.asset_decimals);
        let shares_raw = shares.into_raw_units().clone();

        require!(
            shares_raw > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        self.share_balance(&depositor)
            .update(|balance| *balance += &shares_raw);
        cache.total_shares += shares;

        self.emit_pool_state(&cache);

        shares_raw
    }

    /// Burns shares and pays out the underlying at the current rate.
    ///
    /// `None` redeems the full balance. The payout is bounded by the live
    /// custody balance, not by bookkeeping: liquidity committed to an open
    /// flash loan is simply not available until repayment lands.
    ///
    /// # Returns
    /// - `BigUint`: The raw underlying amount transferred to `redeemer`.
    #[only_owner]
    #[endpoint(redeem)]
    fn redeem(&self, redeemer: ManagedAddress, opt_shares: OptionalValue<BigUint>) -> BigUint {
        let mut cache = Cache::new(self);
        let balance = self.share_balance(&redeemer).get();

        let shares_raw = match opt_shares {
            OptionalValue::Some(shares) => shares,
            OptionalValue::None => balance.clone(),
        };

        require!(
            shares_raw > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
        require!(balance >= shares_raw, ERROR_INSUFFICIENT_SHARES);

        let shares = cache.get_decimal_value(&shares_raw);
        let amount_ray = self.mul_half_up(&shares, &cache.exchange_rate, RAY_PRECISION);
        let amount = self.rescale_half_up(&amount_ray, cache.params.asset_decimals);

        require!(cache.has_reserves(&amount), ERROR_INSUFFICIENT_LIQUIDITY);

        self.share_balance(&redeemer)
            .update(|balance| *balance -= &shares_raw);
        cache.total_shares -= shares;

        let payment = self.send_asset(&cache, &amount, &redeemer);

        self.emit_pool_state(&cache);

        payment.amount
    }

    /// Folds a collected fee into the exchange rate.
    ///
    /// `new_rate = exchange_rate * (total_shares + fee) / total_shares`.
    /// With zero shares in circulation there is nobody to attribute the
    /// fee to, and the formula would divide by zero.
    #[only_owner]
    #[endpoint(accrueFee)]
    fn accrue_fee(&self, fee: BigUint) {
        let mut cache = Cache::new(self);

        require!(cache.total_shares != cache.zero, ERROR_DEGENERATE_SUPPLY);

        let fee_dec = cache.get_decimal_value(&fee);
        let grown_supply = cache.total_shares.clone() + fee_dec;
        let growth = self.div_half_up(&grown_supply, &cache.total_shares, RAY_PRECISION);
        let new_rate = self.mul_half_up(&cache.exchange_rate, &growth, RAY_PRECISION);

        require!(new_rate > cache.exchange_rate, ERROR_RATE_MUST_INCREASE);

        cache.exchange_rate = new_rate;

        self.emit_pool_state(&cache);
    }

    /// Releases custody to the engine for the flash-loan leg.
    ///
    /// Shares and exchange rate stay untouched; only the physical balance
    /// moves. The engine enforces repayment before the transaction ends.
    #[only_owner]
    #[endpoint(borrow)]
    fn borrow(&self, amount: BigUint) {
        let cache = Cache::new(self);

        require!(
            amount > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let amount_dec = cache.get_decimal_value(&amount);
        require!(cache.has_reserves(&amount_dec), ERROR_INSUFFICIENT_LIQUIDITY);

        self.send_asset(&cache, &amount_dec, &self.blockchain().get_caller());

        self.emit_pool_state(&cache);
    }

    /// Receives repayment custody back from the engine.
    #[only_owner]
    #[payable("*")]
    #[endpoint(settleRepayment)]
    fn settle_repayment(&self) {
        let cache = Cache::new(self);
        let _ = self.get_payment_amount(&cache);

        self.emit_pool_state(&cache);
    }
}
