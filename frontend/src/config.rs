use log::Level;

pub const BRAND_NAME: &str = "ComplySphere";
pub const LOGO_PATH: &str = "/complysphere-logo.png";

pub const MESSAGING_DOMAIN: &str = "wa.me";
pub const CONTACT_PHONE: &str = "9896225019";
pub const CONTACT_GREETING: &str = "Hello, I'm interested in ComplySphere's services.";

// Nav bar turns opaque strictly above this many pixels of vertical scroll.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
