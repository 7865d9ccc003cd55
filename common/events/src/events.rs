#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("create_share_pool")]
    fn create_share_pool_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] pool_address: &ManagedAddress,
        #[indexed] flash_loan_fee: &BigUint,
        #[indexed] asset_decimals: usize,
    );

    #[event("update_asset_status")]
    fn update_asset_status_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] is_active: bool,
    );

    // Fee changes are never silent: both values land in the log.
    #[event("update_flash_loan_fee")]
    fn update_flash_loan_fee_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] previous_fee: &BigUint,
        #[indexed] new_fee: &BigUint,
    );

    #[event("update_price_feed")]
    fn update_price_feed_event(&self, #[indexed] price_feed_address: &ManagedAddress);

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("redeem")]
    fn redeem_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] redeemer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("flash_loan")]
    fn flash_loan_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] initiator: &ManagedAddress,
        #[indexed] target_contract: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] fee: &BigUint,
    );

    #[event("flash_repayment")]
    fn flash_repayment_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] payer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] depth: u64,
    );

    #[event("update_pool_state")]
    fn update_pool_state_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] exchange_rate: &BigUint,
        #[indexed] total_shares: &BigUint,
        #[indexed] reserves: &BigUint,
    );
}
