// src/log.rs
//
// File logging. Call sites use the logf!/logd!/logw!/loge! macros; they
// forward to `tracing`, and `init` points the subscriber at the store dir.

use std::{error::Error, fs, path::Path, sync::Mutex};

use tracing::Level;
use tracing_subscriber::fmt::time::Uptime;

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Install the file subscriber. Fails if one is already installed.
pub fn init() -> Result<(), Box<dyn Error + Send + Sync>> {
    init_at(&Path::new(STORE_DIR).join(LOG_FILE))
}

pub fn init_at(path: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_timer(Uptime::default())
        .with_max_level(Level::DEBUG)
        .try_init()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
