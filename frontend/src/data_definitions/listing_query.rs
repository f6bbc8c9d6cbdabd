//! Address-resident listing state.
//!
//! The router re-derives a [`ListingQuery`] from the query string on every
//! render, so the address bar is the single source of truth for filter
//! state. `Display` and `FromQuery` delegate to the shared codec in
//! `common::filter_query`, which keeps the format stable for bookmarked
//! and shared links.

use std::fmt::Display;

use dioxus::router::FromQuery;

use common::filter_query::{decode_listing_query, encode_listing_query};
use common::listing_query::RestaurantFilters;


#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingQuery {
    pub filters: RestaurantFilters,
    pub page: u64,
}

impl ListingQuery {
    /// Fresh filter set on page 1.
    pub fn from_filters(filters: RestaurantFilters) -> Self {
        Self { filters, page: 1 }
    }

    /// Replace the filters. Any filter change returns the view to page 1,
    /// so an existing `page` key is always cleared.
    pub fn with_filters(&self, filters: RestaurantFilters) -> Self {
        Self { filters, page: 1 }
    }

    /// Keep the filters, move to the given page. Page numbers below 1 are
    /// clamped; page 1 drops the key from the address.
    pub fn with_page(&self, page: u64) -> Self {
        Self {
            filters: self.filters.clone(),
            page: page.max(1),
        }
    }

    pub fn page(&self) -> u64 {
        self.page.max(1)
    }
}

// Serialize into the address query string (no leading '?').
impl Display for ListingQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", encode_listing_query(&self.filters, self.page))
    }
}

// Derive state from the address query string; never fails, malformed
// values fall back to the defaults.
impl FromQuery for ListingQuery {
    fn from_query(query: &str) -> Self {
        let (filters, page) = decode_listing_query(query);
        Self { filters, page }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::listing_query::SortBy;

    #[test]
    fn filter_update_clears_page() {
        let current = ListingQuery::from_query("page=5&rating=0");
        assert_eq!(current.page(), 5);

        let mut filters = current.filters.clone();
        filters.rating = 4.0;
        let updated = current.with_filters(filters);

        let encoded = updated.to_string();
        assert!(encoded.contains("rating=4"));
        assert!(!encoded.contains("page="));
    }

    #[test]
    fn page_one_removes_the_key() {
        let current = ListingQuery::from_query("q=pizza&page=3");
        assert!(!current.with_page(1).to_string().contains("page="));
        assert!(current.with_page(3).to_string().contains("page=3"));
    }

    #[test]
    fn page_change_leaves_filters_untouched() {
        let current = ListingQuery::from_query("q=pizza&cuisine=Italian&sortBy=name");
        let moved = current.with_page(3);
        assert_eq!(moved.filters, current.filters);
        assert_eq!(moved.filters.sort_by, SortBy::Name);
    }

    #[test]
    fn bare_address_derives_the_default_filter_set() {
        let derived = ListingQuery::from_query("");
        assert_eq!(derived.filters, RestaurantFilters::default());
        assert_eq!(derived.page(), 1);
    }

    #[test]
    fn unparsable_page_defaults_to_one() {
        assert_eq!(ListingQuery::from_query("page=abc").page(), 1);
        assert_eq!(ListingQuery::from_query("page=0").page(), 1);
    }
}
