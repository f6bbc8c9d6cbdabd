//! Top header bar, used as the router layout.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_maps_icons::MdRestaurant;

use common::listing_query::RestaurantFilters;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


#[component]
pub fn Header() -> Element {
    rsx! {
        div {
            id: "x-header-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",

            header {
                id: "x-header-bar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 64px;
                    width: 100%;
                    padding: 0 24px;
                    background-color: white;
                    border-bottom: 1px solid #E5E7EB;
                    flex-shrink: 0;
                ",
                HeaderLogo {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Header".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn HeaderLogo() -> Element {
    rsx! {
        Link {
            to: Route::listing_from_filters(RestaurantFilters::default()),
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                text-decoration: none;
            ",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 40px;
                    height: 40px;
                    border-radius: 10px;
                    background-color: #EA580C;
                    color: white;
                ",
                Icon { icon: MdRestaurant, style: "width: 24px; height: 24px;" }
            }
            div {
                h1 {
                    style: "margin: 0; font-size: 20px; font-weight: 700; color: #111827;",
                    "FoodieHub"
                }
                p {
                    style: "margin: 0; font-size: 12px; color: #6B7280;",
                    "Delicious food delivered"
                }
            }
        }
    }
}
