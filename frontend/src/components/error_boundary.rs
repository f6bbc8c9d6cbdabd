//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:red; font-size: 54px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Error",
                    }
                    p {
                        style: "color:darkred; font-size: 26px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:blue; font-size: 26px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Return to Home Page"
                    }
                    pre {
                        style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Notice for a failed listing fetch. No retry button: the user is told to
/// check the backend, and whatever was already on screen stays there.
#[component]
pub fn FetchErrorNotice(message: ReadSignal<String>) -> Element {
    rsx! {
        div {
            id: "x-fetch-error-notice",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                width: 100%;
                padding: 14px 16px;
                border: 1px solid #FCA5A5;
                border-radius: 8px;
                background-color: #FEF2F2;
                color: #991B1B;
                font-size: 15px;
            ",
            span {
                style: "font-weight: 700; flex-shrink: 0;",
                "Request failed:"
            }
            span { "{message}" }
        }
    }
}
