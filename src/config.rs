use std::time::Duration;

/// Configuration constants for the client
pub struct Config;

impl Config {
    /// Base URL of the spot-hinta.fi API
    pub const BASE_URL: &'static str = "https://api.spot-hinta.fi";

    /// Endpoint returning today's prices and, once published, tomorrow's
    pub const PRICES_PATH: &'static str = "/TodayAndDayForward";

    /// Request timeout applied when none is configured (10 seconds)
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub const USER_AGENT: &'static str = concat!("spothinta-rs/", env!("CARGO_PKG_VERSION"));
}
