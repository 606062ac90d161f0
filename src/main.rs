use anyhow::Context;
use housing_track::sources::{FeedSource, FileFeedSource, RunConfig};
use housing_track::{normalize_feed, TracingSink};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Housing Track - Listing Feed Normalizer");
    info!("==========================================");

    let config = RunConfig::from_env().with_feed_path(std::env::args().nth(1));
    let source = FileFeedSource::new(&config.feed_path);

    info!(
        "Loading feed from {} ({} source)",
        config.feed_path.display(),
        source.source_name()
    );
    let payload = source.fetch().await?;

    let batch = normalize_feed(&payload, &TracingSink).context("Feed envelope is malformed")?;

    info!("✅ Normalized {} listings", batch.len());

    let mut listings: Vec<_> = batch.listings.iter().collect();
    listings.sort_by(|a, b| a.id().cmp(b.id()));

    for (i, listing) in listings.iter().enumerate() {
        let street = if listing.street().is_empty() {
            "-"
        } else {
            listing.street()
        };
        println!(
            "{}. {}, {}, {} ({} ₪)",
            i + 1,
            street,
            listing.neighborhood(),
            listing.city(),
            listing.price()
        );
        println!(
            "   {} rooms, {} m², floor {}",
            listing.rooms(),
            listing.square_meters(),
            listing.floor()
        );
        println!(
            "   Seller: {:?}, added {}",
            listing.seller_type(),
            listing.date_added()
        );
        println!("   ID: {}", listing.id());
        println!();
    }

    if !batch.is_clean() {
        warn!("{} feed entries could not be normalized", batch.failures.len());
        for failure in &batch.failures {
            warn!("  {}", failure);
        }
    }

    let json = serde_json::to_string_pretty(&listings)?;
    tokio::fs::write(&config.output_path, json)
        .await
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    info!(
        "💾 Saved {} listings to {}",
        listings.len(),
        config.output_path.display()
    );

    Ok(())
}
