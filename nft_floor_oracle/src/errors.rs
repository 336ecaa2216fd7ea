pub static UNAUTHORIZED_ERROR: &[u8] = b"Unauthorized";

pub static ASSET_NOT_REGISTERED_ERROR: &[u8] = b"Asset not registered";

pub static FEED_PAUSED_ERROR: &[u8] = b"Price feed paused";

pub static PRICE_MUST_BE_POSITIVE_ERROR: &[u8] = b"Price must be positive";

pub static INVALID_PRICE_DEVIATION_ERROR: &[u8] = b"Invalid price deviation";

pub static INVALID_MIN_COUNT_ERROR: &[u8] = b"Invalid min count to aggregate";

pub static INVALID_MAX_DEVIATION_ERROR: &[u8] = b"Invalid max price deviation";
