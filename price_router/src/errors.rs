pub static FLOOR_ORACLE_NOT_SET_ERROR: &[u8] = b"Floor oracle not set";

pub static NO_PRICE_AVAILABLE_ERROR: &[u8] = b"No price available for asset";

pub static ADDRESS_IS_ZERO_ERROR: &[u8] = b"Address is zero";
