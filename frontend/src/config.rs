use log::Level;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Simulated round trip for the contact form.
pub const SUBMIT_DELAY_MS: u32 = 1500;

pub const TOAST_DURATION_MS: u32 = 5000;

/// Scroll offset (px) after which the navigation bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: i32 = 50;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://ashwanisingh.com"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
