multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::SharePoolParams;

/// On-chain storage mappers for the share pool state.
#[multiversx_sc::module]
pub trait Storage {
    /// Returns the pool parameters (asset identifier and decimals).
    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<SharePoolParams<Self::Api>>;

    /// The share price in underlying terms, RAY precision.
    ///
    /// Monotonically non-decreasing; only `accrueFee` may raise it.
    #[view(getExchangeRate)]
    #[storage_mapper("exchange_rate")]
    fn exchange_rate(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Total shares in circulation, in asset decimal precision.
    #[view(getTotalShares)]
    #[storage_mapper("total_shares")]
    fn total_shares(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Shares held per depositor, raw units at asset decimal precision.
    ///
    /// Stored as raw `BigUint` so an absent entry decodes to zero.
    #[view(getShareBalance)]
    #[storage_mapper("share_balance")]
    fn share_balance(&self, depositor: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
