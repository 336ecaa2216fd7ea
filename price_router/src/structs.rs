use multiversx_sc::derive_imports::*;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceSource {
    Unavailable,
    FloorOracle,
    Fallback,
}
