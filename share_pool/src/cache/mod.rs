use common_structs::SharePoolParams;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of the pool's state, cached from on-chain storage for
/// efficient access and updates.
///
/// Mutable fields are committed back to storage when the cache is dropped,
/// so every endpoint works on one consistent in-memory view.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    /// The configuration of the pool (asset identifier and decimals).
    pub params: SharePoolParams<C::Api>,
    /// The share price in underlying terms, RAY precision.
    pub exchange_rate: ManagedDecimal<C::Api, NumDecimals>,
    /// Total shares in circulation, asset decimal precision.
    pub total_shares: ManagedDecimal<C::Api, NumDecimals>,
    /// Zero value with pool-specific asset decimals for comparisons.
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Constructs a new cache by reading the current state from storage.
    pub fn new(sc_ref: &'a C) -> Self {
        let params = sc_ref.params().get();
        Cache {
            zero: sc_ref.to_decimal(BigUint::zero(), params.asset_decimals),
            exchange_rate: sc_ref.exchange_rate().get(),
            total_shares: sc_ref.total_shares().get(),
            params,
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.exchange_rate().set(&self.exchange_rate);
        self.sc_ref.total_shares().set(&self.total_shares);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Converts a raw value into a `ManagedDecimal` at the pool's decimals.
    pub fn get_decimal_value(
        &self,
        value: &BigUint<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(value.clone(), self.params.asset_decimals)
    }

    /// Live custody balance of the pool, straight from the blockchain.
    ///
    /// Bookkeeping is deliberately not used here: during an open flash
    /// loan the committed liquidity has already left the contract, so the
    /// live balance is the only honest bound for redemptions.
    pub fn get_reserves(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        let current_pool_balance = self
            .sc_ref
            .blockchain()
            .get_sc_balance(&self.params.asset_id, 0);
        self.get_decimal_value(&current_pool_balance)
    }

    /// Checks if the pool holds enough uncommitted custody for `amount`.
    pub fn has_reserves(&self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        self.get_reserves() >= *amount
    }

    /// Checks if the given asset matches the pool's asset.
    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.params.asset_id == *asset
    }
}
