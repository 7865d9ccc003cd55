#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod shares;
pub mod storage;
pub mod utils;
pub mod view;
pub use common_events::*;

/// Per-asset share account. One instance is deployed per supported asset
/// and is owned exclusively by the pool engine, which is the only caller
/// of the mutating endpoints.
#[multiversx_sc::contract]
pub trait SharePool:
    storage::Storage
    + common_events::EventsModule
    + shares::SharesModule
    + utils::UtilsModule
    + common_math::SharedMathModule
    + view::ViewModule
{
    /// Initializes the share pool for a specific asset.
    ///
    /// The exchange rate starts at 1.0 RAY and can only grow from there,
    /// through `accrueFee`. Total shares start at zero in the asset's own
    /// decimal precision.
    #[init]
    fn init(&self, asset: &EgldOrEsdtTokenIdentifier, asset_decimals: usize) {
        self.params().set(SharePoolParams {
            asset_id: asset.clone(),
            asset_decimals,
        });

        self.exchange_rate().set(self.ray());

        self.total_shares()
            .set(ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals));
    }

    #[upgrade]
    fn upgrade(&self) {}
}
