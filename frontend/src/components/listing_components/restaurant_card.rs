use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSchedule;
use dioxus_free_icons::icons::md_image_icons::MdNature;
use dioxus_free_icons::icons::md_maps_icons::MdLocalShipping;
use dioxus_free_icons::icons::md_toggle_icons::MdStar;

use common::listing_result::Restaurant;


#[component]
pub fn RestaurantCard(restaurant: ReadSignal<Restaurant>) -> Element {
    let Restaurant {
        name,
        image,
        description,
        rating,
        delivery_time,
        delivery_fee,
        cuisine,
        is_veg,
        is_open,
        price_range,
        ..
    } = restaurant.read().clone();

    let shown_cuisines = cuisine.iter().take(3).cloned().collect::<Vec<_>>();
    let hidden_cuisines = cuisine.len().saturating_sub(3);
    let price_badge_colors = price_range_style(&price_range);

    rsx! {
        div {
            class: "x-restaurant-card",
            style: "
                display: flex;
                flex-direction: column;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                overflow: hidden;
                height: 100%;
            ",

            // Image with status overlays
            div {
                style: "position: relative; height: 180px; flex-shrink: 0;",
                img {
                    src: "{image}",
                    alt: "{name}",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                if !is_open {
                    div {
                        style: "
                            position: absolute;
                            inset: 0;
                            background-color: rgba(0, 0, 0, 0.5);
                            display: flex;
                            align-items: center;
                            justify-content: center;
                        ",
                        span {
                            style: "
                                background-color: #DC2626;
                                color: white;
                                font-size: 13px;
                                font-weight: 600;
                                border-radius: 9999px;
                                padding: 4px 12px;
                            ",
                            "Closed"
                        }
                    }
                }
                if is_veg {
                    div {
                        style: "position: absolute; top: 8px; right: 8px;",
                        span {
                            style: "
                                display: flex;
                                align-items: center;
                                gap: 4px;
                                background-color: #22C55E;
                                color: white;
                                font-size: 12px;
                                font-weight: 600;
                                border-radius: 9999px;
                                padding: 4px 10px;
                            ",
                            Icon { icon: MdNature, style: "width: 12px; height: 12px;" }
                            "Veg"
                        }
                    }
                }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 16px;
                    flex-grow: 1;
                ",
                // Row 1: NAME - RATING
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: flex-start;
                        justify-content: space-between;
                        gap: 8px;
                    ",
                    h3 {
                        style: "
                            margin: 0;
                            font-size: 18px;
                            font-weight: 600;
                            color: #111827;
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                            min-width: 0;
                        ",
                        "{name}"
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 4px; flex-shrink: 0;",
                        Icon { icon: MdStar, style: "width: 16px; height: 16px; color: #FACC15;" }
                        span { style: "font-size: 14px; font-weight: 500; color: #111827;", "{rating:.1}" }
                    }
                }

                p {
                    style: "
                        margin: 0;
                        font-size: 14px;
                        color: #6B7280;
                        overflow: hidden;
                        display: -webkit-box;
                        -webkit-line-clamp: 2;
                        -webkit-box-orient: vertical;
                    ",
                    "{description}"
                }

                // Cuisine chips, first three with an overflow counter
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 4px;",
                    for cuisine_name in shown_cuisines.iter().cloned() {
                        span {
                            key: "{cuisine_name}",
                            style: "
                                font-size: 12px;
                                color: #1D4ED8;
                                background-color: #DBEAFE;
                                border-radius: 9999px;
                                padding: 2px 10px;
                            ",
                            "{cuisine_name}"
                        }
                    }
                    if hidden_cuisines > 0 {
                        span {
                            style: "
                                font-size: 12px;
                                color: #6B7280;
                                border: 1px solid #E5E7EB;
                                border-radius: 9999px;
                                padding: 2px 10px;
                            ",
                            "+{hidden_cuisines}"
                        }
                    }
                }

                div { style: "flex-grow: 1;" }

                // Row: DELIVERY TIME - FEE - PRICE RANGE
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                        gap: 8px;
                        font-size: 13px;
                        color: #6B7280;
                    ",
                    div {
                        style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                        div {
                            style: "display: flex; align-items: center; gap: 4px;",
                            Icon { icon: MdSchedule, style: "width: 15px; height: 15px;" }
                            span { "{delivery_time}" }
                        }
                        div {
                            style: "display: flex; align-items: center; gap: 4px;",
                            Icon { icon: MdLocalShipping, style: "width: 15px; height: 15px;" }
                            span { "${delivery_fee:.2}" }
                        }
                    }
                    span {
                        style: "
                            font-size: 12px;
                            font-weight: 500;
                            border-radius: 9999px;
                            padding: 2px 10px;
                            {price_badge_colors}
                        ",
                        "{price_range}"
                    }
                }
            }
        }
    }
}

/// Badge colors per price tier; unknown tiers fall back to gray.
fn price_range_style(price_range: &str) -> &'static str {
    match price_range {
        "budget" => "color: #166534; background-color: #DCFCE7;",
        "mid-range" => "color: #854D0E; background-color: #FEF9C3;",
        "premium" => "color: #991B1B; background-color: #FEE2E2;",
        _ => "color: #374151; background-color: #F3F4F6;",
    }
}
