use crate::error::{FeedError, Result};
use crate::feed::node::NodeExt;
use serde_json::Value;

/// Entry type carried by real listings; everything else is promo filler
pub const LISTING_TYPE: &str = "ad";

/// Locate `feed.feed_items` and yield the listing entries with their index
/// in the unfiltered array.
///
/// A missing path is an error rather than an empty feed, so a format change
/// upstream cannot pass for "no listings today".
pub fn listing_entries(payload: &Value) -> Result<impl Iterator<Item = (usize, &Value)>> {
    let feed = payload
        .field("feed")
        .ok_or_else(|| FeedError::EnvelopeMalformed("missing `feed`".to_string()))?;

    let items = feed
        .field("feed_items")
        .ok_or_else(|| FeedError::EnvelopeMalformed("missing `feed.feed_items`".to_string()))?
        .as_array()
        .ok_or_else(|| {
            FeedError::EnvelopeMalformed("`feed.feed_items` is not an array".to_string())
        })?;

    Ok(items
        .iter()
        .enumerate()
        .filter(|(_, entry)| is_listing(entry)))
}

fn is_listing(entry: &Value) -> bool {
    entry.text("type").as_deref() == Some(LISTING_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_only_ad_entries_with_unfiltered_positions() {
        let payload = json!({
            "feed": {
                "feed_items": [
                    {"type": "banner"},
                    {"type": "ad", "id": "a"},
                    {"id": "untyped"},
                    {"type": "ad", "id": "b"}
                ]
            }
        });

        let entries: Vec<_> = listing_entries(&payload)
            .unwrap()
            .map(|(position, entry)| (position, entry["id"].clone()))
            .collect();

        assert_eq!(entries, vec![(1, json!("a")), (3, json!("b"))]);
    }

    #[test]
    fn empty_item_list_is_not_an_error() {
        let payload = json!({"feed": {"feed_items": []}});
        assert_eq!(listing_entries(&payload).unwrap().count(), 0);
    }

    #[test]
    fn missing_feed_is_malformed() {
        let err = listing_entries(&json!({"data": {}})).err().unwrap();
        assert!(matches!(err, FeedError::EnvelopeMalformed(_)));
    }

    #[test]
    fn missing_feed_items_is_malformed() {
        let err = listing_entries(&json!({"feed": {"items": []}})).err().unwrap();
        assert!(matches!(err, FeedError::EnvelopeMalformed(_)));
    }

    #[test]
    fn non_array_feed_items_is_malformed() {
        let err = listing_entries(&json!({"feed": {"feed_items": "nope"}}))
            .err()
            .unwrap();
        assert!(matches!(err, FeedError::EnvelopeMalformed(_)));
    }
}
