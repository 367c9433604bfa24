use dioxus::prelude::*;

use crate::context::{get_device_class, get_event_config};
use crate::pages::{About, Events, Home, Signup};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Countdown to the event with "Register Now"
/// - `/about` - What the orientation is
/// - `/events` - Scan-to-register flow
/// - `/signup` - Registration instructions and sample code
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/events")]
    Events {},
    #[route("/signup")]
    Signup {},
}

impl Route {
    /// Label used in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::About {} => "About",
            Route::Events {} => "Events",
            Route::Signup {} => "Sign Up",
        }
    }
}

/// Root application component.
///
/// Provides global styles, startup context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_event_config);
    use_context_provider(get_device_class);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
