pub mod diagnostics;
pub mod envelope;
pub mod node;
pub mod normalize;

pub use diagnostics::{DiagnosticSink, TracingSink};
pub use envelope::listing_entries;
pub use normalize::normalize_entry;

use crate::error::{EntryError, Result};
use crate::models::NormalizedListing;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info};

/// Outcome of one feed fetch: the listings that normalized cleanly and a
/// descriptor for every listing entry that did not
#[derive(Debug, Default)]
pub struct FeedBatch {
    pub listings: HashSet<NormalizedListing>,
    pub failures: Vec<EntryError>,
}

impl FeedBatch {
    /// True when no listing entry was rejected
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Parse raw response text into a feed tree
pub fn parse_payload(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Normalize every listing entry in a feed payload.
///
/// Only a malformed envelope fails the call. Entries that cannot be
/// normalized end up in [`FeedBatch::failures`] and the rest of the batch
/// carries on.
pub fn normalize_feed(payload: &Value, sink: &dyn DiagnosticSink) -> Result<FeedBatch> {
    let mut batch = FeedBatch::default();

    for (position, entry) in listing_entries(payload)? {
        match normalize_entry(position, entry, sink) {
            Ok(listing) => {
                batch.listings.insert(listing);
            }
            Err(err) => {
                debug!("Skipping feed entry: {}", err);
                batch.failures.push(err);
            }
        }
    }

    info!(
        listings = batch.listings.len(),
        failures = batch.failures.len(),
        "Normalized feed"
    );

    Ok(batch)
}
