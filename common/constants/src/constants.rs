#![no_std]

/// Exchange rates are tracked at RAY precision (27 decimals).
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Fee rates are expressed at WAD precision (18 decimals), 1 WAD = 100%.
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;
