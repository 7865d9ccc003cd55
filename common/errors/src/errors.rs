#![no_std]

pub static ERROR_ASSET_NOT_ALLOWED: &[u8] = b"Asset not allowed.";

pub static ERROR_ASSET_ALREADY_SUPPORTED: &[u8] = b"Asset already supported.";

pub static ERROR_INVALID_TICKER: &[u8] = b"Invalid ticker provided.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_FLASH_LOAN_IN_PROGRESS: &[u8] = b"Flash loan in progress for this asset.";

pub static ERROR_FLASH_LOAN_NOT_REPAID: &[u8] = b"Flash loan was not repaid.";

pub static ERROR_NO_ACTIVE_FLASH_LOAN: &[u8] = b"No active flash loan for this asset.";

pub static ERROR_DEGENERATE_SUPPLY: &[u8] = b"No shares exist to attribute the fee to.";

pub static ERROR_RATE_MUST_INCREASE: &[u8] = b"Exchange rate must increase.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Not enough shares for this account.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_INVALID_FLASH_LOAN_FEE: &[u8] = b"Invalid flash loan fee.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Share pool contract template is empty.";

pub static ERROR_INVALID_ENDPOINT: &[u8] = b"Invalid endpoint for flash loan.";

pub static ERROR_INVALID_SHARD: &[u8] = b"Invalid shard for flash loan.";

pub static ERROR_PRICE_FEED_NOT_SET: &[u8] = b"Price feed not set.";

pub static ERROR_NO_PRICE_FOUND: &[u8] = b"No price found for asset.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";
