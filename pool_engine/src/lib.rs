#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod config;
pub mod factory;
pub mod oracle;
pub mod storage;
pub mod utils;
pub mod validation;

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

/// Entry point of the lending primitive.
///
/// Owns one share pool per supported asset and routes every user-facing
/// operation through it. The engine is the only caller the pools accept,
/// so all invariant checks concentrate here.
#[multiversx_sc::contract]
pub trait PoolEngine:
    storage::Storage
    + config::ConfigModule
    + factory::FactoryModule
    + oracle::OracleModule
    + utils::UtilsModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    #[init]
    fn init(&self, share_pool_template_address: ManagedAddress) {
        self.require_non_zero_address(&share_pool_template_address);
        self.share_pool_template_address()
            .set(share_pool_template_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Supplies the paid asset to its pool and mints shares for the caller.
    ///
    /// Blocked while a flash loan of the same asset is open: a mid-loan
    /// deposit could masquerade as a repayment and leave the loan itself
    /// unpaid.
    ///
    /// # Returns
    /// - `BigUint`: The raw amount of shares minted.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();

        let pool_address = self.require_asset_supported(&asset);
        let asset_config = self.asset_config(&asset).get();
        require!(asset_config.can_deposit(), ERROR_ASSET_NOT_ALLOWED);
        self.require_amount_greater_than_zero(&amount);
        require!(
            self.flash_loan_depth(&asset).get() == 0,
            ERROR_FLASH_LOAN_IN_PROGRESS
        );

        let shares = self
            .tx()
            .to(&pool_address)
            .typed(proxy_share_pool::SharePoolProxy)
            .deposit(&caller)
            .egld_or_single_esdt(&asset, 0, &amount)
            .returns(ReturnsResult)
            .sync_call();

        self.deposit_event(&asset, &caller, &amount, &shares);

        shares
    }

    /// Burns the caller's shares and pays out the underlying.
    ///
    /// `None` redeems the full balance. Works even while the asset is
    /// disabled or a flash loan is open; the pool bounds the payout by its
    /// live custody balance.
    ///
    /// # Returns
    /// - `BigUint`: The raw underlying amount paid out.
    #[endpoint(redeem)]
    fn redeem(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        opt_shares: OptionalValue<BigUint>,
    ) -> BigUint {
        let caller = self.blockchain().get_caller();
        let pool_address = self.require_asset_supported(&asset);

        let shares = match opt_shares {
            OptionalValue::Some(shares) => shares,
            OptionalValue::None => self
                .tx()
                .to(&pool_address)
                .typed(proxy_share_pool::SharePoolProxy)
                .share_balance(&caller)
                .returns(ReturnsResult)
                .sync_call_readonly(),
        };
        self.require_amount_greater_than_zero(&shares);

        let amount = self
            .tx()
            .to(&pool_address)
            .typed(proxy_share_pool::SharePoolProxy)
            .redeem(&caller, OptionalValue::Some(shares.clone()))
            .returns(ReturnsResult)
            .sync_call();

        self.redeem_event(&asset, &caller, &amount, &shares);

        amount
    }

    /// Lends `amount` to `contract_address` for the duration of one call.
    ///
    /// The borrower endpoint receives the principal as payment plus the fee
    /// and initiator appended to its arguments. By the time the callback
    /// returns, repayments routed through `repay` must cover principal plus
    /// fee, and the pool's custody must have physically grown by the fee.
    /// Both checks are needed: the ledger alone could be satisfied while
    /// custody is drained through a reentrant redemption, and custody alone
    /// could be satisfied by a deposit that never touches the ledger.
    ///
    /// # Arguments
    /// - `asset`: Token identifier to borrow.
    /// - `amount`: Amount to borrow in raw token units.
    /// - `contract_address`: Contract receiving the loan, same shard only.
    /// - `endpoint`: Endpoint to call on the receiving contract.
    /// - `arguments`: Arguments for the endpoint call.
    #[endpoint(flashLoan)]
    fn flash_loan(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        contract_address: &ManagedAddress,
        endpoint: ManagedBuffer<Self::Api>,
        mut arguments: ManagedArgBuffer<Self::Api>,
    ) {
        let caller = self.blockchain().get_caller();

        let pool_address = self.require_asset_supported(asset);
        let asset_config = self.asset_config(asset).get();
        require!(asset_config.can_flash_loan(), ERROR_ASSET_NOT_ALLOWED);

        self.require_amount_greater_than_zero(&amount);
        self.validate_flash_loan_shard(contract_address);
        self.validate_flash_loan_endpoint(&endpoint);

        let fee = self.compute_flash_loan_fee(&amount, &asset_config);
        let starting_reserves = self.pool_reserves(&pool_address);
        require!(starting_reserves >= amount, ERROR_INSUFFICIENT_LIQUIDITY);

        let depth = self.flash_loan_depth(asset).get() + 1;
        self.flash_loan_depth(asset).set(depth);

        self.tx()
            .to(&pool_address)
            .typed(proxy_share_pool::SharePoolProxy)
            .borrow(&amount)
            .returns(ReturnsResult)
            .sync_call();

        arguments.push_arg(&fee);
        arguments.push_arg(&caller);

        self.tx()
            .to(contract_address)
            .raw_call(endpoint)
            .arguments_raw(arguments)
            .egld_or_single_esdt(asset, 0, &amount)
            .sync_call();

        let repaid = self.flash_loan_repaid(asset, depth).get();
        let total_due = &amount + &fee;
        require!(repaid >= total_due, ERROR_FLASH_LOAN_NOT_REPAID);

        let ending_reserves = self.pool_reserves(&pool_address);
        require!(
            ending_reserves >= &starting_reserves + &fee,
            ERROR_FLASH_LOAN_NOT_REPAID
        );

        // A zero fee has nothing to fold into the exchange rate.
        if fee > BigUint::zero() {
            self.tx()
                .to(&pool_address)
                .typed(proxy_share_pool::SharePoolProxy)
                .accrue_fee(&fee)
                .returns(ReturnsResult)
                .sync_call();
        }

        self.flash_loan_repaid(asset, depth).clear();
        self.flash_loan_depth(asset).set(depth - 1);

        self.flash_loan_event(asset, &caller, contract_address, &amount, &fee);
    }

    /// Repays the innermost open flash loan of the paid asset.
    ///
    /// Credits the repayment ledger and forwards custody back to the pool.
    /// Overpayment is accepted and stays with the pool, benefiting all
    /// share holders.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();

        let pool_address = self.require_asset_supported(&asset);
        self.require_amount_greater_than_zero(&amount);

        let depth = self.flash_loan_depth(&asset).get();
        require!(depth > 0, ERROR_NO_ACTIVE_FLASH_LOAN);

        self.flash_loan_repaid(&asset, depth)
            .update(|repaid| *repaid += &amount);

        self.tx()
            .to(&pool_address)
            .typed(proxy_share_pool::SharePoolProxy)
            .settle_repayment()
            .egld_or_single_esdt(&asset, 0, &amount)
            .returns(ReturnsResult)
            .sync_call();

        self.flash_repayment_event(&asset, &caller, &amount, depth);
    }
}
