//! Page controls for the listing view.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight, MdMoreHoriz};

use common::listing_result::PageControl;

use crate::hooks::use_restaurants::RestaurantsState;
use crate::pages::listing_page::FilterControls;


#[component]
pub fn PaginationControls() -> Element {
    let restaurants_state = use_context::<RestaurantsState>();
    let filter_controls = use_context::<FilterControls>();
    let pagination = restaurants_state.pagination;
    let apply_page = filter_controls.apply_page;

    let Some(info) = *pagination.read() else {
        return rsx! {};
    };
    if info.total_pages <= 1 {
        return rsx! {};
    }

    // Display math only; page/limit/total all come from the server.
    let (start_item, end_item) = info.item_range();
    let controls = info.visible_pages();

    rsx! {
        div {
            id: "x-pagination-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                width: 100%;
                margin-top: 8px;
            ",
            div {
                style: "font-size: 14px; color: #6B7280;",
                "Showing {start_item} to {end_item} of {info.total} results"
            }

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 4px;",

                PageStepButton {
                    disabled: info.page == 1,
                    target_page: info.page.saturating_sub(1),
                    forward: false,
                }

                for (index, control) in controls.iter().copied().enumerate() {
                    {page_control_button(index, control, info.page, apply_page)}
                }

                PageStepButton {
                    disabled: info.page == info.total_pages,
                    target_page: info.page + 1,
                    forward: true,
                }
            }
        }
    }
}

fn page_control_button(
    index: usize,
    control: PageControl,
    current_page: u64,
    apply_page: Callback<u64>,
) -> Element {
    match control {
        PageControl::Ellipsis => rsx! {
            div {
                key: "gap-{index}",
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 36px;
                    height: 36px;
                    color: #9CA3AF;
                ",
                Icon { icon: MdMoreHoriz, style: "width: 16px; height: 16px;" }
            }
        },
        PageControl::Page(page) => {
            let selected = page == current_page;
            let background = if selected { "#111827" } else { "white" };
            let color = if selected { "white" } else { "#111827" };
            rsx! {
                button {
                    key: "page-{page}",
                    style: "
                        width: 36px;
                        height: 36px;
                        border: 1px solid #D1D5DB;
                        border-radius: 8px;
                        background-color: {background};
                        color: {color};
                        font-size: 14px;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        apply_page(page);
                    },
                    "{page}"
                }
            }
        }
    }
}

#[component]
fn PageStepButton(disabled: ReadSignal<bool>, target_page: ReadSignal<u64>, forward: bool) -> Element {
    let filter_controls = use_context::<FilterControls>();
    let apply_page = filter_controls.apply_page;

    let color = use_memo(move || if disabled() { "#9CA3AF" } else { "#111827" });
    let cursor = use_memo(move || if disabled() { "not-allowed" } else { "pointer" });

    rsx! {
        button {
            disabled: disabled(),
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 36px;
                height: 36px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background-color: white;
                color: {color};
                cursor: {cursor};
            ",
            onclick: move |_| {
                if !disabled() {
                    apply_page(target_page());
                }
            },
            if forward {
                Icon { icon: MdChevronRight, style: "width: 18px; height: 18px;" }
            } else {
                Icon { icon: MdChevronLeft, style: "width: 18px; height: 18px;" }
            }
        }
    }
}
