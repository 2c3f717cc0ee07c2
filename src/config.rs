
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Intake service when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

/// Set `BYSAM_INTAKE_OFFLINE` at build time for deployments with no intake
/// service behind them; forms then finish without a network request.
pub const INTAKE_OFFLINE: bool = option_env!("BYSAM_INTAKE_OFFLINE").is_some();

pub const NEWSLETTER_PATH: &str = "/api/newsletter";
pub const CONTACT_PATH: &str = "/api/contact";

/// Upper bound for a single intake request before it is reported as failed.
pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;

pub const ASSET_BASE: &str = "/assets";

pub fn endpoint(path: &str) -> String {
    format!("{}{}", get_backend_url(), path)
}
