//! Page components for Orientation.
//!
//! Each page corresponds to a route in the application.

mod about;
mod events;
mod home;
mod signup;

pub use about::About;
pub use events::Events;
pub use home::Home;
pub use signup::Signup;
