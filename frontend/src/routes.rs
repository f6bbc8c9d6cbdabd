use dioxus::prelude::*;

use common::listing_query::RestaurantFilters;

use crate::components::header::Header;
use crate::data_definitions::listing_query::ListingQuery;
use crate::pages::listing_page::ListingPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Header)]


    #[route("/?:..listing")]
    ListingPage {
        listing: ListingQuery,
    },

}

impl Route {
    /// Address for a fresh filter set. Filter changes land on page 1.
    pub fn listing_from_filters(filters: RestaurantFilters) -> Self {
        Self::ListingPage {
            listing: ListingQuery::from_filters(filters),
        }
    }
}
