//! Sign-up page - how to register for the orientation.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavBar, RegistrationQr};
use crate::context::use_event_config;

/// Payload of the sample code shown on this page.
const SAMPLE_REGISTRATION: &str = "ecell-orientation:register";

#[component]
pub fn Signup() -> Element {
    let navigator = use_navigator();
    let config = use_event_config();

    rsx! {
        NavBar {}

        main { class: "page signup",
            h1 { class: "page-title", "Sign Up" }

            section { class: "info-card",
                h2 { class: "section-title", "Register for {config.title}" }
                ol { class: "info-list",
                    li { "Pick up a registration card at the help desk." }
                    li { "Open the Events page." }
                    li { "Scan the QR code printed on your card." }
                }
            }

            section { class: "info-card qr-card",
                p { class: "qr-caption", "Codes look like this:" }
                RegistrationQr { data: SAMPLE_REGISTRATION.to_string(), size: 180 }
            }

            button {
                class: "btn-primary",
                onclick: move |_| {
                    navigator.push(Route::Events {});
                },
                "Scan to Register"
            }
        }
    }
}
