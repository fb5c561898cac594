use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Splash screen timing. The gate holds for LOADING_GATE_MS, then fades out.
pub const LOADING_GATE_MS: u32 = 2000;
pub const LOADING_FADE_MS: u32 = 500;

// Height of the fixed navigation bar, added to scroll_y by the scroll-spy.
pub const NAV_OFFSET_PX: f64 = 100.0;
pub const NAV_SOLID_THRESHOLD_PX: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 600.0;

pub const COUNT_UP_MS: u32 = 2000;

pub const CAROUSEL_AUTOPLAY_MS: u32 = 5000;
pub const CAROUSEL_RESUME_MS: u32 = 4000;

pub const TOAST_DISMISS_MS: u32 = 4000;

pub const PRACTICE_NAME: &str = "AO Facial Plastics";
pub const LEGAL_NAME: &str = "AO Facial Plastics and Reconstructive Surgery, PLLC";
pub const PHONE: &str = "(555) 123-4567";
pub const EMAIL: &str = "info@aofacialplastics.com";
pub const ADDRESS_LINES: [&str; 3] = ["123 Medical Plaza Drive", "Suite 400", "City, State 12345"];
pub const OFFICE_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 5:00 PM",
    "Saturday: By Appointment Only",
    "Sunday: Closed",
];

pub const LOGO: &str = "/assets/logo.png";
