#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-asset configuration kept by the engine.
///
/// `flash_loan_fee` is a WAD-scaled rate (1 WAD = 100%) applied to the
/// borrowed token amount. It is never derived from an oracle price.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone)]
pub struct AssetConfig<M: ManagedTypeApi> {
    pub is_active: bool,
    pub flash_loan_fee: ManagedDecimal<M, NumDecimals>,
    pub asset_decimals: usize,
}

impl<M: ManagedTypeApi> AssetConfig<M> {
    pub fn can_flash_loan(&self) -> bool {
        self.is_active
    }

    pub fn can_deposit(&self) -> bool {
        self.is_active
    }
}

/// Immutable parameters of a deployed share pool.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone)]
pub struct SharePoolParams<M: ManagedTypeApi> {
    pub asset_id: EgldOrEsdtTokenIdentifier<M>,
    pub asset_decimals: usize,
}
