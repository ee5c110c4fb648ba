// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod gui;
pub mod present;
pub mod runner;
pub mod state;
pub mod update;
