use dioxus::prelude::*;

use common::listing_query::RestaurantFilters;

use crate::api::restaurant_api;
use crate::components::error_boundary::FetchErrorNotice;
use crate::components::listing_components::filter_sidebar::FilterSidebar;
use crate::components::listing_components::pagination_controls::PaginationControls;
use crate::components::listing_components::restaurant_grid::RestaurantGrid;
use crate::components::listing_components::search_bar::SearchBar;
use crate::components::listing_components::sort_options::SortOptions;
use crate::data_definitions::listing_query::ListingQuery;
use crate::hooks::use_restaurants::{RestaurantsState, use_restaurants};
use crate::routes::Route;


/// Address mutation callbacks shared with every filter control. The address
/// bar holds the only copy of the filter state; these callbacks rewrite it
/// and the next render derives everything fresh.
#[derive(Clone, Copy)]
pub struct FilterControls {
    pub filters: ReadSignal<RestaurantFilters>,
    pub current_page: ReadSignal<u64>,
    pub apply_filters: Callback<RestaurantFilters>,
    pub apply_page: Callback<u64>,
    pub clear_filters: Callback<()>,
}

/// Restaurant directory page
#[component]
pub fn ListingPage(listing: ListingQuery) -> Element {
    rsx! {
        Title { "FoodieHub - Discover Amazing Food" }
        ListingPageRootComponent { listing: listing.clone() }
    }
}

#[component]
fn ListingPageRootComponent(listing: ReadSignal<ListingQuery>) -> Element {
    let filters = use_memo(move || listing.read().filters.clone());
    let current_page = use_memo(move || listing.read().page());

    // Filter updates replace the current history entry (no new entry, no
    // scroll reset) and return the view to page 1; page changes push so
    // the browser's Back button walks pages.
    let apply_filters = Callback::new(move |new_filters: RestaurantFilters| {
        navigator().replace(Route::ListingPage {
            listing: listing.read().with_filters(new_filters),
        });
    });
    let apply_page = Callback::new(move |page: u64| {
        navigator().push(Route::ListingPage {
            listing: listing.read().with_page(page),
        });
    });
    // Bare path, no query string: the next derived filter set is the default.
    let clear_filters = Callback::new(move |_: ()| {
        navigator().replace("/");
    });

    use_context_provider(move || FilterControls {
        filters: filters.into(),
        current_page: current_page.into(),
        apply_filters,
        apply_page,
        clear_filters,
    });

    let restaurants_state = use_restaurants(filters.into(), current_page.into());
    use_context_provider(move || restaurants_state);

    rsx! {
        div {
            id: "x-listing-page-root",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",
            HeroSection {}

            div {
                id: "x-listing-content",
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 32px;
                    width: 100%;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 32px 16px;
                ",
                aside {
                    id: "x-listing-sidebar",
                    style: "flex-shrink: 0;",
                    FilterSidebar {}
                }

                div {
                    id: "x-listing-results",
                    style: "
                        display: flex;
                        flex-direction: column;
                        gap: 24px;
                        flex-grow: 1;
                        min-width: 0;
                    ",
                    ListingErrorNotice {}
                    ResultsHeaderRow {}
                    RestaurantGrid {}
                    PaginationControls {}
                }
            }
        }
    }
}

#[component]
fn HeroSection() -> Element {
    rsx! {
        div {
            id: "x-listing-hero",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                width: 100%;
                padding: 48px 16px;
                background-color: #E5E7EB;
            ",
            h1 {
                style: "
                    margin: 0;
                    font-size: 44px;
                    font-weight: 700;
                    color: #111827;
                    text-align: center;
                ",
                "Discover Amazing Food"
            }
            p {
                style: "
                    margin: 0;
                    font-size: 20px;
                    color: #374151;
                    max-width: 640px;
                    text-align: center;
                ",
                "Filter through hundreds of restaurants and find exactly what you're craving"
            }
            SearchBar {}
        }
    }
}

/// Fetch failures show a retry-less notice; whatever was on screen before
/// the failure stays on screen below it.
#[component]
fn ListingErrorNotice() -> Element {
    let restaurants_state = use_context::<RestaurantsState>();
    let error = restaurants_state.error;

    match error.read().clone() {
        Some(message) => rsx! {
            FetchErrorNotice {
                message: format!(
                    "{message}. Please make sure the backend server is running on {}",
                    restaurant_api::api_base_url(),
                ),
            }
        },
        None => rsx! {},
    }
}

#[component]
fn ResultsHeaderRow() -> Element {
    let restaurants_state = use_context::<RestaurantsState>();
    let loading = restaurants_state.loading;
    let pagination = restaurants_state.pagination;

    let total_label = use_memo(move || {
        if loading() {
            return String::new();
        }
        match *pagination.read() {
            Some(info) if info.total == 1 => "Found 1 restaurant".to_string(),
            Some(info) => format!("Found {} restaurants", info.total),
            None => String::new(),
        }
    });

    rsx! {
        div {
            id: "x-listing-results-header",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                width: 100%;
            ",
            div {
                style: "font-size: 16px; color: #6B7280;",
                "{total_label}"
            }
            SortOptions {}
        }
    }
}
