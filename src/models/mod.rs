use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who posted the listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SellerType {
    Private,
    Agency,
}

impl SellerType {
    /// Merchant flag from the feed: set means an agency posted it
    pub fn from_merchant(merchant: bool) -> Self {
        if merchant {
            SellerType::Agency
        } else {
            SellerType::Private
        }
    }
}

/// One normalized real-estate listing.
///
/// Only built through [`NormalizedListing::new`] once every field has been
/// extracted, so there is no half-filled listing anywhere in the crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedListing {
    id: String,
    price: u64,
    rooms: i64,
    square_meters: i64,
    floor: i64,
    city: String,
    neighborhood: String,
    street: String,
    seller_type: SellerType,
    date_added: NaiveDate,
}

impl NormalizedListing {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        price: u64,
        rooms: i64,
        square_meters: i64,
        floor: i64,
        city: String,
        neighborhood: String,
        street: String,
        seller_type: SellerType,
        date_added: NaiveDate,
    ) -> Self {
        Self {
            id,
            price,
            rooms,
            square_meters,
            floor,
            city,
            neighborhood,
            street,
            seller_type,
            date_added,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn rooms(&self) -> i64 {
        self.rooms
    }

    pub fn square_meters(&self) -> i64 {
        self.square_meters
    }

    pub fn floor(&self) -> i64 {
        self.floor
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    /// Empty when the feed had no street
    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn seller_type(&self) -> SellerType {
        self.seller_type
    }

    pub fn date_added(&self) -> NaiveDate {
        self.date_added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merchant_flag_maps_to_seller_type() {
        assert_eq!(SellerType::from_merchant(true), SellerType::Agency);
        assert_eq!(SellerType::from_merchant(false), SellerType::Private);
    }

    #[test]
    fn listing_serializes_with_feed_facing_names() {
        let listing = NormalizedListing::new(
            "abc123".to_string(),
            1_250_000,
            4,
            95,
            3,
            "Tel Aviv".to_string(),
            "Florentin".to_string(),
            String::new(),
            SellerType::Agency,
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        );

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["squareMeters"], 95);
        assert_eq!(value["sellerType"], "AGENCY");
        assert_eq!(value["dateAdded"], "2023-05-01");
        assert_eq!(value["street"], "");
    }
}
