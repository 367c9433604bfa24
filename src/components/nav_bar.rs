//! Navigation Bar Component
//!
//! Top bar with the logo mark and buttons for every page.

use dioxus::prelude::*;

use crate::app::Route;

const NAV_ROUTES: [Route; 4] = [
    Route::Home {},
    Route::About {},
    Route::Events {},
    Route::Signup {},
];

/// Navigation bar
///
/// Shows: Home | About | Events | Sign Up, highlighting the current page.
#[component]
pub fn NavBar() -> Element {
    let navigator = use_navigator();
    let current = use_route::<Route>();

    rsx! {
        nav { class: "nav-bar",
            span { class: "nav-logo", "aria-label": "E-Cell", "E" }

            div { class: "nav-items",
                for route in NAV_ROUTES {
                    button {
                        key: "{route.label()}",
                        class: if route == current { "nav-item active" } else { "nav-item" },
                        onclick: {
                            let route = route.clone();
                            move |_| {
                                navigator.push(route.clone());
                            }
                        },
                        "{route.label()}"
                    }
                }
            }
        }
    }
}
