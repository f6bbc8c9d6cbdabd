use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_content_icons::MdSort;

use common::listing_query::{SortBy, SortOrder};

use crate::pages::listing_page::FilterControls;


const SORT_OPTIONS: [(&str, &str); 8] = [
    ("rating-desc", "Rating: High to Low"),
    ("rating-asc", "Rating: Low to High"),
    ("deliveryTime-asc", "Delivery Time: Fastest"),
    ("deliveryTime-desc", "Delivery Time: Slowest"),
    ("deliveryFee-asc", "Delivery Fee: Lowest"),
    ("deliveryFee-desc", "Delivery Fee: Highest"),
    ("name-asc", "Name: A to Z"),
    ("name-desc", "Name: Z to A"),
];

/// Combined `sortBy-sortOrder` select.
#[component]
pub fn SortOptions() -> Element {
    let filter_controls = use_context::<FilterControls>();
    let filters = filter_controls.filters;
    let apply_filters = filter_controls.apply_filters;

    let current_value = use_memo(move || {
        let filters = filters.read();
        format!("{}-{}", filters.sort_by.as_str(), filters.sort_order.as_str())
    });

    let sort_onchange = move |event: Event<FormData>| {
        let value = event.value();
        // values are "sortBy-sortOrder"; sort fields never contain a dash
        let Some((sort_by, sort_order)) = value.split_once('-') else {
            return;
        };
        let mut new_filters = filters.read().clone();
        new_filters.sort_by = SortBy::parse_or_default(sort_by);
        new_filters.sort_order = SortOrder::parse_or_default(sort_order);
        apply_filters(new_filters);
    };

    rsx! {
        div {
            id: "x-listing-sort-options",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
            ",
            Icon { icon: MdSort, style: "width: 18px; height: 18px; color: #6B7280;" }
            select {
                style: "
                    height: 36px;
                    min-width: 200px;
                    padding: 0 10px;
                    border: 1px solid #D1D5DB;
                    border-radius: 8px;
                    background-color: white;
                    color: #111827;
                    font-size: 14px;
                    cursor: pointer;
                ",
                value: "{current_value}",
                onchange: sort_onchange,
                for (value, label) in SORT_OPTIONS {
                    option {
                        value: "{value}",
                        selected: *current_value.read() == value,
                        "{label}"
                    }
                }
            }
        }
    }
}
