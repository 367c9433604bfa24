//! Reusable UI components for Orientation.

mod countdown_display;
mod nav_bar;
mod notice_banner;
mod registration_qr;
mod upload_modal;

pub use countdown_display::CountdownDisplay;
pub use nav_bar::NavBar;
pub use notice_banner::NoticeBanner;
pub use registration_qr::RegistrationQr;
pub use upload_modal::UploadModal;
