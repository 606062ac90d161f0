//! Normalization of an aggregator's real-estate listing feed into typed,
//! deduplicated listings.

pub mod error;
pub mod feed;
pub mod models;
pub mod sources;

pub use error::{EntryError, EntryFailure, EntryMarker, FeedError};
pub use feed::{normalize_feed, parse_payload, DiagnosticSink, FeedBatch, TracingSink};
pub use models::{NormalizedListing, SellerType};
