//! Bidirectional mapping between [`RestaurantFilters`] and the flat
//! query-string representation used in the page address.
//!
//! The encoding has to stay byte-compatible with previously shared and
//! bookmarked links, so the rules are fixed:
//!
//! - `search` travels as `q` and is dropped when empty
//! - the set-valued filters repeat their key once per member
//! - `rating` is dropped at 0, `veg` only ever appears as `veg=true`
//! - `sortOrder` is dropped when it equals the implicit default `desc`
//! - `page` appears only above 1 and is cleared by any filter change
//!
//! Decoding never fails: every missing or unparsable value falls back to
//! the field default.

use crate::listing_query::{RestaurantFilters, SortBy, SortOrder};


/// Encode filters plus a page number into a query string (no leading `?`).
/// A default filter set on page 1 still encodes `sortBy`, which always
/// carries a value; everything else is omitted at its default.
pub fn encode_listing_query(filters: &RestaurantFilters, page: u64) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if !filters.search.is_empty() {
        query.append_pair("q", &filters.search);
    }
    for cuisine in &filters.cuisine {
        if !cuisine.is_empty() {
            query.append_pair("cuisine", cuisine);
        }
    }
    for price_range in &filters.price_range {
        if !price_range.is_empty() {
            query.append_pair("priceRange", price_range);
        }
    }
    for location in &filters.location {
        if !location.is_empty() {
            query.append_pair("location", location);
        }
    }
    if filters.rating > 0.0 {
        query.append_pair("rating", &filters.rating.to_string());
    }
    if filters.is_veg {
        query.append_pair("veg", "true");
    }
    if !filters.delivery_time.is_empty() {
        query.append_pair("deliveryTime", &filters.delivery_time);
    }
    query.append_pair("sortBy", filters.sort_by.as_str());
    if filters.sort_order != SortOrder::Desc {
        query.append_pair("sortOrder", filters.sort_order.as_str());
    }
    if page > 1 {
        query.append_pair("page", &page.to_string());
    }

    query.finish()
}

/// Decode a query string (without the leading `?`) into filters and a page
/// number. Absent and malformed values default, so this is total.
pub fn decode_listing_query(query: &str) -> (RestaurantFilters, u64) {
    let mut filters = RestaurantFilters::default();
    let mut page: u64 = 1;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "q" => filters.search = value.into_owned(),
            "cuisine" => filters.cuisine.push(value.into_owned()),
            "priceRange" => filters.price_range.push(value.into_owned()),
            "location" => filters.location.push(value.into_owned()),
            "rating" => filters.rating = value.parse().unwrap_or(0.0),
            "veg" => filters.is_veg = value == "true",
            "deliveryTime" => filters.delivery_time = value.into_owned(),
            "sortBy" => filters.sort_by = SortBy::parse_or_default(&value),
            "sortOrder" => filters.sort_order = SortOrder::parse_or_default(&value),
            "page" => page = value.parse().unwrap_or(1).max(1),
            _ => {}
        }
    }

    (filters, page)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample_filters() -> RestaurantFilters {
        RestaurantFilters {
            search: "pizza place".to_string(),
            cuisine: vec!["Italian".to_string(), "Mexican".to_string()],
            price_range: vec!["mid-range".to_string()],
            location: vec!["Downtown".to_string()],
            rating: 4.5,
            is_veg: true,
            delivery_time: "30".to_string(),
            sort_by: SortBy::DeliveryFee,
            sort_order: SortOrder::Asc,
        }
    }

    #[test]
    fn round_trip_preserves_filters() {
        let filters = sample_filters();
        let encoded = encode_listing_query(&filters, 1);
        let (decoded, page) = decode_listing_query(&encoded);
        assert_eq!(decoded, filters);
        assert_eq!(page, 1);
    }

    #[test]
    fn round_trip_default_equivalence() {
        // false veg and desc order are omitted on encode but must still
        // round-trip back to their defaults.
        let filters = RestaurantFilters {
            search: "sushi".to_string(),
            ..Default::default()
        };
        let encoded = encode_listing_query(&filters, 1);
        let (decoded, _) = decode_listing_query(&encoded);
        assert_eq!(decoded, filters);
        assert!(!decoded.is_veg);
        assert_eq!(decoded.sort_order, SortOrder::Desc);
    }

    #[test]
    fn veg_is_only_ever_true() {
        let mut filters = RestaurantFilters::default();
        filters.is_veg = true;
        let encoded = encode_listing_query(&filters, 1);
        assert!(encoded.contains("veg=true"));
        assert!(!encoded.contains("veg=false"));

        filters.is_veg = false;
        let encoded = encode_listing_query(&filters, 1);
        assert!(!encoded.contains("veg"));
    }

    #[test]
    fn default_sort_order_is_omitted() {
        let encoded = encode_listing_query(&RestaurantFilters::default(), 1);
        assert_eq!(encoded, "sortBy=rating");

        let ascending = RestaurantFilters {
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        let encoded = encode_listing_query(&ascending, 1);
        assert_eq!(encoded, "sortBy=rating&sortOrder=asc");
    }

    #[test]
    fn zero_rating_is_omitted() {
        let filters = RestaurantFilters {
            rating: 0.0,
            ..Default::default()
        };
        assert!(!encode_listing_query(&filters, 1).contains("rating="));
    }

    #[test]
    fn whole_ratings_encode_without_decimal_point() {
        let filters = RestaurantFilters {
            rating: 4.0,
            ..Default::default()
        };
        assert!(encode_listing_query(&filters, 1).contains("rating=4&"));
    }

    #[test]
    fn repeated_keys_preserve_member_order() {
        let filters = RestaurantFilters {
            cuisine: vec!["Thai".to_string(), "Indian".to_string()],
            ..Default::default()
        };
        let encoded = encode_listing_query(&filters, 1);
        assert_eq!(encoded, "cuisine=Thai&cuisine=Indian&sortBy=rating");
    }

    #[test]
    fn page_only_appears_above_one() {
        let filters = RestaurantFilters::default();
        assert!(!encode_listing_query(&filters, 1).contains("page="));
        assert!(encode_listing_query(&filters, 3).ends_with("page=3"));
    }

    #[test]
    fn empty_query_decodes_to_defaults() {
        let (filters, page) = decode_listing_query("");
        assert_eq!(filters, RestaurantFilters::default());
        assert_eq!(page, 1);
    }

    #[test]
    fn malformed_values_decode_to_defaults() {
        let (filters, page) = decode_listing_query("rating=high&page=zero&sortBy=price&veg=yes");
        assert_eq!(filters.rating, 0.0);
        assert_eq!(filters.sort_by, SortBy::Rating);
        assert!(!filters.is_veg);
        assert_eq!(page, 1);
    }

    #[test]
    fn percent_encoded_values_round_trip() {
        let filters = RestaurantFilters {
            search: "tacos & more".to_string(),
            location: vec!["São Paulo".to_string()],
            ..Default::default()
        };
        let encoded = encode_listing_query(&filters, 1);
        let (decoded, _) = decode_listing_query(&encoded);
        assert_eq!(decoded, filters);
    }
}
