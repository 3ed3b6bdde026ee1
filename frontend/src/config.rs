
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Booking page the intro-call wizard hands off to.
pub const SCHEDULING_URL: &str = "https://calendly.com/carlos-looperlogic/consultation-call";

/// Delay between clicking a single-choice answer and moving on.
pub const AUTO_ADVANCE_DELAY_MS: u32 = 300;

/// Height of the fixed top nav, subtracted when scrolling to a section.
pub const NAVBAR_HEIGHT_PX: f64 = 80.0;
