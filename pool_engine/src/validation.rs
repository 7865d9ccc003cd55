multiversx_sc::imports!();

use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ASSET_NOT_ALLOWED,
    ERROR_INVALID_ENDPOINT, ERROR_INVALID_SHARD,
};

use crate::storage;

/// Built-in VM functions can never serve as flash loan callbacks.
pub static FORBIDDEN_FLASH_LOAN_ENDPOINTS: &[&[u8]] = &[
    b"ChangeOwnerAddress",
    b"SetUserName",
    b"ESDTTransfer",
    b"ESDTLocalBurn",
    b"ESDTLocalMint",
    b"ESDTNFTTransfer",
    b"ESDTNFTCreate",
    b"ESDTNFTAddQuantity",
    b"ESDTNFTBurn",
    b"ESDTNFTAddURI",
    b"ESDTNFTUpdateAttributes",
    b"MultiESDTNFTTransfer",
];

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Ensures an asset has a deployed share pool.
    ///
    /// # Returns
    /// - `ManagedAddress`: The pool address if the asset is supported.
    fn require_asset_supported(&self, asset: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let map = self.pools_map(asset);
        require!(!map.is_empty(), ERROR_ASSET_NOT_ALLOWED);
        map.get()
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ADDRESS_IS_ZERO);
    }

    /// Rejects empty callbacks and built-in VM functions.
    fn validate_flash_loan_endpoint(&self, endpoint: &ManagedBuffer) {
        require!(!endpoint.is_empty(), ERROR_INVALID_ENDPOINT);

        for forbidden in FORBIDDEN_FLASH_LOAN_ENDPOINTS {
            require!(
                endpoint != &ManagedBuffer::from(*forbidden),
                ERROR_INVALID_ENDPOINT
            );
        }
    }

    /// Validates shard compatibility for flash loans.
    fn validate_flash_loan_shard(&self, contract_address: &ManagedAddress) {
        let destination_shard_id = self.blockchain().get_shard_of_address(contract_address);
        let current_shard_id = self
            .blockchain()
            .get_shard_of_address(&self.blockchain().get_sc_address());

        require!(
            destination_shard_id == current_shard_id,
            ERROR_INVALID_SHARD
        );
    }
}
