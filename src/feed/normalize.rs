use crate::error::{EntryError, EntryFailure, EntryMarker};
use crate::feed::diagnostics::DiagnosticSink;
use crate::feed::node::{scalar_integer, scalar_text, NodeExt};
use crate::models::{NormalizedListing, SellerType};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

// Upstream field names
const ID: &str = "id";
const CITY: &str = "city";
const NEIGHBORHOOD: &str = "neighborhood";
const STREET: &str = "street";
const ROOMS: &str = "Rooms_text";
const SQUARE_METERS: &str = "square_meters";
const PRICE: &str = "price";
const ATTRIBUTE_ROWS: &str = "row_4";
const FLOOR_ROW: usize = 1;
const MERCHANT: &str = "merchant";
const DATE_ADDED: &str = "date_added";

/// Turn one `ad` entry into a listing.
///
/// Every field is extracted before any failure is reported, so a bad price
/// still gets its warning even when the entry is rejected for another field.
/// `position` is the entry's index in `feed_items`, used when the id itself
/// is unreadable.
pub fn normalize_entry(
    position: usize,
    entry: &Value,
    sink: &dyn DiagnosticSink,
) -> Result<NormalizedListing, EntryError> {
    let id = entry
        .text(ID)
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| {
            EntryError::new(
                EntryMarker::Position(position),
                EntryFailure::MissingField { field: ID },
            )
        })?;

    let city = required_text(entry, CITY);
    let neighborhood = required_text(entry, NEIGHBORHOOD);
    let street = entry.text(STREET).unwrap_or_default();
    let rooms = required_integer(entry, ROOMS);
    let square_meters = required_integer(entry, SQUARE_METERS);
    let price = price(entry, &id, sink);
    let floor = floor(entry);
    let seller_type = SellerType::from_merchant(entry.flag(MERCHANT).unwrap_or(false));
    let date_added = date_added(entry);

    let reject = |reason| EntryError::new(EntryMarker::Id(id.clone()), reason);
    let city = city.map_err(reject)?;
    let neighborhood = neighborhood.map_err(reject)?;
    let rooms = rooms.map_err(reject)?;
    let square_meters = square_meters.map_err(reject)?;
    let date_added = date_added.map_err(reject)?;

    Ok(NormalizedListing::new(
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
    ))
}

fn required_text(entry: &Value, field: &'static str) -> Result<String, EntryFailure> {
    entry
        .text(field)
        .ok_or(EntryFailure::MissingField { field })
}

fn required_integer(entry: &Value, field: &'static str) -> Result<i64, EntryFailure> {
    let value = entry
        .field(field)
        .ok_or(EntryFailure::MissingField { field })?;

    scalar_integer(value).ok_or_else(|| EntryFailure::NotAnInteger {
        field,
        raw: scalar_text(value).unwrap_or_else(|| value.to_string()),
    })
}

fn price(entry: &Value, id: &str, sink: &dyn DiagnosticSink) -> u64 {
    let raw = entry.text(PRICE);
    match raw.as_deref().and_then(sanitize_price) {
        Some(price) => price,
        None => {
            sink.price_fallback(id, raw.as_deref());
            0
        }
    }
}

/// Keep only digits and decimal points, then read what is left as a whole
/// number. `"₪1,250,000"` reads as 1250000; any decimal point, no digits at
/// all, or overflow give `None`.
pub fn sanitize_price(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned.parse().ok()
}

/// `row_4[1].value`; the second attribute row is the floor by upstream
/// convention. Anything missing or unreadable on the way means ground level.
fn floor(entry: &Value) -> i64 {
    entry
        .field(ATTRIBUTE_ROWS)
        .and_then(|rows| rows.item(FLOOR_ROW))
        .and_then(|row| row.field("value"))
        .and_then(truncated_integer)
        .unwrap_or(0)
}

/// Integer, or a decimal cut toward zero (`"3.5"` -> 3)
fn truncated_integer(value: &Value) -> Option<i64> {
    scalar_integer(value).or_else(|| {
        let number = match value {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        number.is_finite().then(|| number.trunc() as i64)
    })
}

fn date_added(entry: &Value) -> Result<NaiveDate, EntryFailure> {
    let raw = entry.text(DATE_ADDED).ok_or(EntryFailure::MissingField { field: DATE_ADDED })?;

    parse_date_added(&raw).ok_or(EntryFailure::BadTimestamp {
        field: DATE_ADDED,
        raw,
    })
}

/// `"2023-05-01 14:22:00"` -> 2023-05-01. The feed separates date and time
/// with a space; the first one becomes `T` before parsing.
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let iso = raw.trim().replacen(' ', "T", 1);

    iso.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(&iso, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|timestamp| timestamp.date())
}
