#![no_std]

multiversx_sc::imports!();

use common_proxies::proxy_pool_engine;

/// Borrower used by the flash loan tests.
///
/// Every endpoint here is a callback target: the engine calls it with the
/// principal attached and the owed fee plus the loan initiator appended to
/// the arguments. The caller is always the engine itself.
#[multiversx_sc::contract]
pub trait FlashMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // Well-behaved borrower, routes principal plus fee back through repay.
    #[payable("*")]
    #[endpoint(flash)]
    fn flash(&self, fee: BigUint, _original_caller: ManagedAddress) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let engine = self.blockchain().get_caller();

        let repayment = amount + fee;
        self.tx()
            .to(&engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .repay()
            .egld_or_single_esdt(&asset, 0, &repayment)
            .returns(ReturnsResult)
            .sync_call();
    }

    // Scammy borrower that keeps the principal, callers should fail
    #[payable("*")]
    #[endpoint(flashNoRepay)]
    fn flash_no_repay(&self, _fee: BigUint, _original_caller: ManagedAddress) {}

    // Repays the principal but withholds the fee
    #[payable("*")]
    #[endpoint(flashRepaySome)]
    fn flash_repay_some(&self, _fee: BigUint, _original_caller: ManagedAddress) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let engine = self.blockchain().get_caller();

        self.tx()
            .to(&engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .repay()
            .egld_or_single_esdt(&asset, 0, &amount)
            .returns(ReturnsResult)
            .sync_call();
    }

    // Tries to push the principal back as a deposit instead of a repayment
    #[payable("*")]
    #[endpoint(flashDeposit)]
    fn flash_deposit(&self, _fee: BigUint, _original_caller: ManagedAddress) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let engine = self.blockchain().get_caller();

        self.tx()
            .to(&engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .deposit()
            .egld_or_single_esdt(&asset, 0, &amount)
            .returns(ReturnsResult)
            .sync_call();
    }

    // Opens a second loan of the same asset before settling the first one.
    // The inner loan lands back on `flash`, which repays it in full.
    #[payable("*")]
    #[endpoint(flashNested)]
    fn flash_nested(&self, inner_amount: BigUint, fee: BigUint, _original_caller: ManagedAddress) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let engine = self.blockchain().get_caller();

        self.tx()
            .to(&engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .flash_loan(
                &asset,
                &inner_amount,
                &self.blockchain().get_sc_address(),
                ManagedBuffer::from(b"flash"),
                ManagedArgBuffer::new(),
            )
            .returns(ReturnsResult)
            .sync_call();

        let repayment = amount + fee;
        self.tx()
            .to(&engine)
            .typed(proxy_pool_engine::PoolEngineProxy)
            .repay()
            .egld_or_single_esdt(&asset, 0, &repayment)
            .returns(ReturnsResult)
            .sync_call();
    }
}
