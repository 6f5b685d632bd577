use log::Level;

pub const AGE_STORAGE_KEY: &str = "ageVerified";
pub const AGE_EXPIRY_DAYS: i64 = 30;
pub const AGE_EXIT_URL: &str = "https://www.google.com";
pub const GATE_FOCUS_DELAY_MS: u32 = 100;

pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const FORM_MESSAGE_DISPLAY_MS: u32 = 5_000;
pub const PORTFOLIO_PRESS_MS: u32 = 200;

/// Where contact submissions are posted. Set `CONTACT_ENDPOINT` when building
/// to enable delivery; without it submissions are only logged.
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_ENDPOINT").filter(|s| !s.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
