multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{cache::Cache, storage};

use common_errors::ERROR_INVALID_ASSET;

/// Helper functions shared by the share pool endpoints: payment
/// retrieval and validation, asset transfers, state event emission.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Retrieves and validates the payment amount from a transaction.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Validated payment amount.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);

        cache.get_decimal_value(&amount)
    }

    /// Transfers the pool asset to a specified address.
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenPayment<Self::Api>`: Payment object representing the transfer.
    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(
            cache.params.asset_id.clone(),
            0,
            amount.into_raw_units().clone(),
        );

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Emits a snapshot of the pool state for transparency.
    #[inline(always)]
    fn emit_pool_state(&self, cache: &Cache<Self>) {
        let reserves = cache.get_reserves();
        self.update_pool_state_event(
            &cache.params.asset_id,
            cache.exchange_rate.into_raw_units(),
            cache.total_shares.into_raw_units(),
            reserves.into_raw_units(),
        );
    }
}
