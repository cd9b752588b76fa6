pub static API_VERSION: &str = "2023-06-01-preview";
pub static OPERATION_LOCATION_HEADER: &str = "operation-location";

pub static IMAGE_COUNT: u8 = 2;
pub static IMAGE_SIZE: &str = "512x512";

pub static DEFAULT_POLL_INTERVAL_MS: u64 = 3000;
pub static DEFAULT_POLL_TIMEOUT_MS: u64 = 300_000;
