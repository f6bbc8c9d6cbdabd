//! Listing fetch state: restaurants, pagination, facet options.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::listing_const::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use common::listing_query::RestaurantFilters;
use common::listing_result::{FilterOptions, PaginationInfo, Restaurant};
use common::request_seq::RequestSequence;

use crate::api::restaurant_api;
use crate::hooks::use_debounced::use_debounced_value;


/// Transient result state for the current view. Shared through context the
/// same way the filter controls are.
#[derive(Clone, Copy)]
pub struct RestaurantsState {
    pub restaurants: ReadSignal<Vec<Restaurant>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    pub pagination: ReadSignal<Option<PaginationInfo>>,
    pub filter_options: ReadSignal<Option<FilterOptions>>,
}

/// Fetches one page of listing results whenever the effective filter set
/// (with the debounced search value substituted) or the page changes.
pub fn use_restaurants(
    filters: ReadSignal<RestaurantFilters>,
    current_page: ReadSignal<u64>,
) -> RestaurantsState {
    let mut restaurants = use_signal(Vec::<Restaurant>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut pagination = use_signal(|| None::<PaginationInfo>);
    let mut filter_options = use_signal(|| None::<FilterOptions>);

    // Facet vocabulary is fetched once at mount and kept sticky, so the
    // filter controls stay populated even when a filtered query returns
    // nothing. A failure here is logged and never blanks the view.
    use_future(move || async move {
        match restaurant_api::get_restaurant_filters().await {
            Ok(response) => filter_options.set(Some(response.data)),
            Err(err) => tracing::error!("failed to fetch filter options: {err:#}"),
        }
    });

    // Only the free-text search is debounced; every other filter change
    // takes effect immediately.
    let search = use_memo(move || filters.read().search.clone());
    let debounced_search = use_debounced_value(search.into(), SEARCH_DEBOUNCE_MS);
    let effective_filters = use_memo(move || {
        let mut effective = filters.read().clone();
        effective.search = debounced_search.read().clone();
        effective
    });

    // Exactly one listing request is authoritative at a time: completions
    // compare the sequence number taken at issuance, so a late stale
    // response cannot overwrite results from a newer request.
    let mut request_seq = use_signal(RequestSequence::new);
    use_effect(move || {
        let filters = effective_filters.read().clone();
        let page = *current_page.read();
        let seq = request_seq.write().issue();
        loading.set(true);
        error.set(None);
        spawn(async move {
            let result = restaurant_api::get_restaurants(&filters, page, PAGE_SIZE).await;
            if !request_seq.peek().is_current(seq) {
                return;
            }
            match result {
                Ok(response) => {
                    restaurants.set(response.data);
                    pagination.set(response.pagination);
                    // facets are only overwritten when the listing
                    // response actually carries them
                    if let Some(options) = response.filters {
                        filter_options.set(Some(options));
                    }
                }
                Err(err) => {
                    // prior results and pagination stay untouched
                    error.set(Some(format!("{err:#}")));
                }
            }
            loading.set(false);
        });
    });

    RestaurantsState {
        restaurants: restaurants.into(),
        loading: loading.into(),
        error: error.into(),
        pagination: pagination.into(),
        filter_options: filter_options.into(),
    }
}
