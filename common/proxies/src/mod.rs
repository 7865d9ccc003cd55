#![no_std]

pub mod proxy_flash_mock;
pub mod proxy_pool_engine;
pub mod proxy_price_feed;
pub mod proxy_share_pool;
