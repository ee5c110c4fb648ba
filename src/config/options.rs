// src/config/options.rs
use clap::Args;

use super::consts::*;

/// Connection flags shared by the GUI and CLI binaries.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct ConnectionArgs {
    /// Base URL of the Mercado Scrape backend.
    #[arg(long, value_name = "URL", env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub api_url: String,
    pub window_w: f32,
    pub window_h: f32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api_url: s!(DEFAULT_API_URL),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

impl From<ConnectionArgs> for AppOptions {
    fn from(args: ConnectionArgs) -> Self {
        Self { api_url: normalize_base_url(&args.api_url), ..Self::default() }
    }
}

/// Trim whitespace and trailing slashes so paths can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { s!(DEFAULT_API_URL) } else { s!(trimmed) }
}
