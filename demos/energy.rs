//! Prints today's spot price summary for a couple of regions.
//!
//! Run with `cargo run --example energy`.

use chrono::{TimeDelta, Utc};
use spothinta::{Region, SpotHintaClient, SpotHintaError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), SpotHintaError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = SpotHintaClient::new()?;
    for region in [Region::FI, Region::SE2] {
        print_prices(&client, region).await?;
    }

    Ok(())
}

async fn print_prices(client: &SpotHintaClient, region: Region) -> Result<(), SpotHintaError> {
    let prices = client
        .energy_prices_for(region, client.config().resolution())
        .await?;
    let now = Utc::now();
    let today = prices.today_at(now);

    println!("--- ENERGY TODAY FOR REGION {region} ---");
    match today.stats() {
        Some(stats) => {
            println!("Lowest price today: {:.5}", stats.lowest.price);
            println!("Highest price today: {:.5}", stats.highest.price);
            println!("Average price: {:.5}", stats.average);
            println!();
            println!("Highest price time: {}", stats.highest.timestamp);
            println!("Lowest price time: {}", stats.lowest.timestamp);
        }
        None => println!("No prices published for today"),
    }
    println!();
    println!("Current price: {:?}", prices.price_at(now));
    println!(
        "Next hour price: {:?}",
        prices.price_at(now + TimeDelta::hours(1))
    );
    println!(
        "Lower hours: {}",
        prices.intervals_at_or_below_current_at(now)
    );
    println!(
        "Tomorrow published: {}",
        !prices.tomorrow_at(now).is_empty()
    );
    println!();

    Ok(())
}
