//! Sidebar filter controls, populated from the backend facet vocabulary.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_communication_icons::MdLocationOn;
use dioxus_free_icons::icons::md_content_icons::{MdClear, MdFilterList};
use dioxus_free_icons::icons::md_editor_icons::MdAttachMoney;
use dioxus_free_icons::icons::md_image_icons::MdNature;
use dioxus_free_icons::icons::md_maps_icons::MdRestaurant;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdStar};

use crate::hooks::use_restaurants::RestaurantsState;
use crate::pages::listing_page::FilterControls;


/// Which set-valued filter dimension a checkbox group edits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FacetField {
    Cuisine,
    PriceRange,
    Location,
}

#[component]
pub fn FilterSidebar() -> Element {
    let filter_controls = use_context::<FilterControls>();
    let restaurants_state = use_context::<RestaurantsState>();
    let filters = filter_controls.filters;
    let filter_options = restaurants_state.filter_options;

    let active_count = use_memo(move || filters.read().active_count());

    let cuisines = use_memo(move || {
        filter_options.read().as_ref().map(|options| options.cuisines.clone()).unwrap_or_default()
    });
    let price_ranges = use_memo(move || {
        filter_options.read().as_ref().map(|options| options.price_ranges.clone()).unwrap_or_default()
    });
    let locations = use_memo(move || {
        filter_options.read().as_ref().map(|options| options.locations.clone()).unwrap_or_default()
    });

    rsx! {
        div {
            id: "x-filter-sidebar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 300px;
                padding: 18px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                position: sticky;
                top: 16px;
                height: fit-content;
            ",

            SidebarHeaderRow { active_count: active_count() }

            RatingSlider {}
            SectionDivider {}
            VegetarianCheckbox {}

            if !cuisines().is_empty() {
                SectionDivider {}
                FacetSection {
                    field: FacetField::Cuisine,
                    title: "Cuisine".to_string(),
                    values: cuisines(),
                }
            }
            if !price_ranges().is_empty() {
                SectionDivider {}
                FacetSection {
                    field: FacetField::PriceRange,
                    title: "Price Range".to_string(),
                    values: price_ranges(),
                }
            }
            if !locations().is_empty() {
                SectionDivider {}
                FacetSection {
                    field: FacetField::Location,
                    title: "Location".to_string(),
                    values: locations(),
                }
            }
        }
    }
}

#[component]
fn SidebarHeaderRow(active_count: ReadSignal<usize>) -> Element {
    let filter_controls = use_context::<FilterControls>();
    let clear_filters = filter_controls.clear_filters;

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                width: 100%;
            ",
            Icon { icon: MdFilterList, style: "width: 20px; height: 20px; color: #111827;" }
            h3 { style: "margin: 0; font-size: 18px; font-weight: 600; color: #111827;", "Filters" }
            if active_count() > 0 {
                span {
                    style: "
                        font-size: 12px;
                        font-weight: 600;
                        color: #374151;
                        background-color: #F3F4F6;
                        border-radius: 9999px;
                        padding: 2px 8px;
                    ",
                    "{active_count()}"
                }
            }
            div { style: "flex-grow: 1;" }
            if active_count() > 0 {
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        border: none;
                        background: none;
                        color: #6B7280;
                        font-size: 14px;
                        cursor: pointer;
                        padding: 4px;
                    ",
                    onclick: move |_| {
                        clear_filters(());
                    },
                    Icon { icon: MdClear, style: "width: 16px; height: 16px;" }
                    "Clear"
                }
            }
        }
    }
}

#[component]
fn SectionDivider() -> Element {
    rsx! {
        div { style: "border-top: 1px solid #E5E7EB; width: 100%;" }
    }
}

#[component]
fn RatingSlider() -> Element {
    let filter_controls = use_context::<FilterControls>();
    let filters = filter_controls.filters;
    let apply_filters = filter_controls.apply_filters;

    let rating = use_memo(move || filters.read().rating);

    let rating_oninput = move |event: Event<FormData>| {
        let mut new_filters = filters.read().clone();
        new_filters.rating = event.value().parse().unwrap_or(0.0);
        apply_filters(new_filters);
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                Icon { icon: MdStar, style: "width: 16px; height: 16px; color: #111827;" }
                h4 { style: "margin: 0; font-size: 15px; font-weight: 500; color: #111827;", "Minimum Rating" }
            }
            input {
                r#type: "range",
                min: "0",
                max: "5",
                step: "0.5",
                value: "{rating}",
                style: "width: 100%;",
                oninput: rating_oninput,
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    justify-content: space-between;
                    font-size: 13px;
                    color: #6B7280;
                ",
                span { "0" }
                span { style: "font-weight: 500; color: #111827;", "{rating} stars" }
                span { "5" }
            }
        }
    }
}

#[component]
fn VegetarianCheckbox() -> Element {
    let filter_controls = use_context::<FilterControls>();
    let filters = filter_controls.filters;
    let apply_filters = filter_controls.apply_filters;

    let is_veg = use_memo(move || filters.read().is_veg);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                Icon { icon: MdNature, style: "width: 16px; height: 16px; color: #15803D;" }
                h4 { style: "margin: 0; font-size: 15px; font-weight: 500; color: #111827;", "Dietary" }
            }
            div {
                class: "x-facet-list-item",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    let mut new_filters = filters.read().clone();
                    new_filters.is_veg = !is_veg();
                    apply_filters(new_filters);
                },
                if is_veg() {
                    Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
                } else {
                    Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
                }
                span { style: "font-size: 14px; color: #111827;", "Vegetarian Only" }
            }
        }
    }
}

/// One checkbox group over a backend-supplied facet vocabulary. The values
/// shown here are the only values this group can ever write into the
/// address; the client never invents entries.
#[component]
fn FacetSection(field: FacetField, title: String, values: Vec<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                {facet_icon(field)}
                h4 { style: "margin: 0; font-size: 15px; font-weight: 500; color: #111827;", "{title}" }
            }
            ul {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 2px;
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    max-height: 180px;
                    overflow-y: auto;
                ",
                for value in values.iter().cloned() {
                    li {
                        key: "{value}",
                        FacetCheckbox { field, value }
                    }
                }
            }
        }
    }
}

fn facet_icon(field: FacetField) -> Element {
    match field {
        FacetField::Cuisine => rsx! {
            Icon { icon: MdRestaurant, style: "width: 16px; height: 16px; color: #111827;" }
        },
        FacetField::PriceRange => rsx! {
            Icon { icon: MdAttachMoney, style: "width: 16px; height: 16px; color: #111827;" }
        },
        FacetField::Location => rsx! {
            Icon { icon: MdLocationOn, style: "width: 16px; height: 16px; color: #111827;" }
        },
    }
}

#[component]
fn FacetCheckbox(field: FacetField, value: ReadSignal<String>) -> Element {
    let filter_controls = use_context::<FilterControls>();
    let filters = filter_controls.filters;
    let apply_filters = filter_controls.apply_filters;

    let is_checked = use_memo(move || {
        let filters = filters.read();
        let selected = match field {
            FacetField::Cuisine => &filters.cuisine,
            FacetField::PriceRange => &filters.price_range,
            FacetField::Location => &filters.location,
        };
        selected.contains(&*value.read())
    });

    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                cursor: pointer;
                padding: 2px 0;
            ",
            onclick: move |_| {
                let value = value.read().clone();
                let mut new_filters = filters.read().clone();
                let selected = match field {
                    FacetField::Cuisine => &mut new_filters.cuisine,
                    FacetField::PriceRange => &mut new_filters.price_range,
                    FacetField::Location => &mut new_filters.location,
                };
                if is_checked() {
                    selected.retain(|existing| existing != &value);
                } else {
                    selected.push(value);
                }
                apply_filters(new_filters);
            },
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            span {
                style: "
                    font-size: 14px;
                    color: #111827;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{value}"
            }
        }
    }
}
