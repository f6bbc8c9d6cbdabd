use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use crate::pages::listing_page::FilterControls;


/// Free-text search input. Every keystroke rewrites the address, so the
/// search term is always shareable; the listing fetch itself is gated
/// behind the debounce downstream.
#[component]
pub fn SearchBar() -> Element {
    let filter_controls = use_context::<FilterControls>();
    let filters = filter_controls.filters;
    let apply_filters = filter_controls.apply_filters;

    let search_oninput = move |event: Event<FormData>| {
        let mut new_filters = filters.read().clone();
        new_filters.search = event.value();
        apply_filters(new_filters);
    };

    rsx! {
        div {
            id: "x-listing-search-box",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                background-color: white;
                border: 1px solid rgba(101, 101, 101, 0.5);
                border-radius: 9999px;
                padding: 10px 18px;
                height: 48px;
                width: 100%;
                max-width: 640px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280; flex-shrink: 0;" }
            input {
                r#type: "text",
                placeholder: "Search restaurants, cuisines, or dishes...",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 18px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{filters.read().search}",
                oninput: search_oninput,
            }
        }
    }
}
