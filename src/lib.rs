//! Async client for the [spot-hinta.fi](https://spot-hinta.fi) electricity spot price API.
//!
//! ```rust,ignore
//! let prices = spothinta::fetch_prices().await?;
//! if let Some(point) = prices.today().lowest() {
//!     println!("Cheapest hour today starts at {}", point.timestamp);
//! }
//! ```

pub mod config;
pub mod models;
pub mod services;

pub use models::error::SpotHintaError;
pub use models::prices::{PriceList, PricePoint, PriceStats};
pub use models::region::{Region, Resolution};
pub use services::api::{
    ApiConfig, ApiConfigBuilder, SpotHintaClient, fetch_prices, fetch_prices_for_region,
};
