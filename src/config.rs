use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/supreme-group-company/";

pub const LOGO_IMAGE: &str = "/assets/images/Supreme_logo.png";
pub const FOOTER_BACKGROUND: &str = "/assets/images/footer.jpg";
pub const HERO_VIDEO: &str = "/assets/videos/automotive-hero.mp4";
pub const VIDEO_DIR: &str = "/assets/videos";
pub const IMAGE_DIR: &str = "/assets/images";

/// Wait before asking the hero video to start, so the first paint is not blocked on media.
pub const HERO_AUTOPLAY_DELAY_MS: u32 = 1_000;

/// Simulated round trip for the contact form until a real endpoint exists.
pub const SUBMIT_LATENCY_MS: u32 = 2_000;

/// Scroll samples inside this window are coalesced into one trailing sample.
pub const SCROLL_THROTTLE_MS: u32 = 16;

pub const COMPANY_ADDRESS: &str = "110, 16th Road, Chembur, Mumbai - 400071";
pub const COMPANY_PHONE: &str = "+91 22 25208822";
pub const COMPANY_EMAIL: &str = "info@supremegroup.co.in";
