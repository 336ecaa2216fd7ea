#![no_std]

pub mod proxy_nft_floor_oracle;
pub mod proxy_price_router;
