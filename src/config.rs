use log::Level;

use crate::motion::ease::Ease;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose pin/scrub tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const PAGE_TITLE: &str = "ItzFizz Premium Scroll Hero";
pub const PAGE_DESCRIPTION: &str = "Scroll-driven hero animation demo with a pinned, scrubbed scroll timeline";

pub const CAR_IMAGE_PATH: &str = "/car.png.jpg";
pub const CAR_IMAGE_WIDTH: u32 = 800;
pub const CAR_IMAGE_HEIGHT: u32 = 400;

/// Scroll distance the hero stays pinned for, in viewport heights.
pub const PIN_LENGTH_VIEWPORTS: f64 = 2.0;

/// Seconds the applied playhead takes to catch up with the scroll position.
pub const SCRUB_LAG_SECS: f64 = 1.0;

pub const RESIZE_DEBOUNCE_MS: u32 = 100;

pub const ENTRANCE_EASE: Ease = Ease::Power3Out;
pub const ENTRANCE_DURATION_SECS: f64 = 0.8;
pub const SCROLL_EASE: Ease = Ease::Power2Out;

/// Inline style for the block that reserves scroll room for the pinned hero.
pub fn pin_spacer_style() -> String {
    format!("height: {}vh;", ((1.0 + PIN_LENGTH_VIEWPORTS) * 100.0).round())
}
