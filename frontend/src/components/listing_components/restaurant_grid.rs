use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_maps_icons::MdRestaurant;

use crate::components::listing_components::restaurant_card::RestaurantCard;
use crate::hooks::use_restaurants::RestaurantsState;


const GRID_STYLE: &str = "
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 24px;
    width: 100%;
";

#[component]
pub fn RestaurantGrid() -> Element {
    let restaurants_state = use_context::<RestaurantsState>();
    let restaurants = restaurants_state.restaurants;
    let loading = restaurants_state.loading;

    if loading() {
        return rsx! { SkeletonGrid {} };
    }
    if restaurants.read().is_empty() {
        return rsx! { EmptyState {} };
    }

    rsx! {
        div {
            id: "x-restaurant-grid-wrapper",
            style: "display: flex; flex-direction: column; gap: 16px; width: 100%;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; color: #6B7280;",
                Icon { icon: MdRestaurant, style: "width: 18px; height: 18px;" }
                if restaurants.read().len() == 1 {
                    span { "1 restaurant found" }
                } else {
                    span { "{restaurants.read().len()} restaurants found" }
                }
            }
            div {
                id: "x-restaurant-grid",
                style: GRID_STYLE,
                for restaurant in restaurants.read().iter().cloned() {
                    RestaurantCard {
                        key: "{restaurant.id}",
                        restaurant: restaurant.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn SkeletonGrid() -> Element {
    rsx! {
        div {
            id: "x-restaurant-grid-skeleton",
            style: GRID_STYLE,
            for index in 0..6 {
                div {
                    key: "{index}",
                    style: "
                        height: 320px;
                        border-radius: 12px;
                        border: 1px solid #E5E7EB;
                        background: linear-gradient(90deg, #F3F4F6 25%, #E5E7EB 50%, #F3F4F6 75%);
                        background-size: 200% 100%;
                    ",
                }
            }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    rsx! {
        div {
            id: "x-restaurant-grid-empty",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                padding: 64px 16px;
                text-align: center;
            ",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 64px;
                    height: 64px;
                    border-radius: 9999px;
                    background-color: #F3F4F6;
                    color: #6B7280;
                ",
                Icon { icon: MdSearch, style: "width: 32px; height: 32px;" }
            }
            h3 { style: "margin: 0; font-size: 18px; font-weight: 600; color: #111827;", "No restaurants found" }
            p {
                style: "margin: 0; font-size: 15px; color: #6B7280; max-width: 420px;",
                "Try adjusting your filters or search terms to find more restaurants."
            }
        }
    }
}
