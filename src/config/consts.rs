// src/config/consts.rs

// Backend
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "API_URL";
pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Forms
pub const DEFAULT_PAGES_TO_SCRAPE: &str = "1";

// Rendering
pub const PLACEHOLDER_IMG_URL: &str = "https://via.placeholder.com/120x120?text=Sin+Imagen";
pub const PRICE_NOT_AVAILABLE: &str = "N/A";
pub const STORE_LABEL: &str = "MercadoLibre";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
