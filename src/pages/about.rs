//! About page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavBar;
use crate::context::use_event_config;

#[component]
pub fn About() -> Element {
    let navigator = use_navigator();
    let config = use_event_config();
    let date_line = config.date_line();

    rsx! {
        NavBar {}

        main { class: "page about",
            h1 { class: "page-title", "About" }

            section { class: "info-card",
                h2 { class: "section-title", "{config.title}" }
                p { class: "event-date", "{date_line}" }
                p {
                    "The Entrepreneurship Cell welcomes new members with an afternoon of "
                    "talks, founder stories and team activities. Come meet the people "
                    "building things on campus."
                }
            }

            section { class: "info-card",
                h2 { class: "section-title", "What to expect" }
                ul { class: "info-list",
                    li { "An introduction to the cell and its teams" }
                    li { "Short talks from alumni founders" }
                    li { "A hands-on ideation session" }
                }
            }

            button {
                class: "btn-primary",
                onclick: move |_| {
                    navigator.push(Route::Events {});
                },
                "See Events"
            }
        }
    }
}
