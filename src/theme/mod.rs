//! Theme: global CSS and palette.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
