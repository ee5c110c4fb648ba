// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use clap::Parser;
use eframe::egui::ViewportBuilder;
use mercado_scrape::{
    config::options::{AppOptions, ConnectionArgs},
    gui, log,
};

/// Mercado Scrape dashboard.
#[derive(Parser, Debug)]
#[command(version, about)]
struct GuiArgs {
    #[command(flatten)]
    conn: ConnectionArgs,
}

fn main() {
    let args = GuiArgs::parse();
    if let Err(e) = log::init() {
        eprintln!("Logging disabled: {e}");
    }

    let app_options = AppOptions::from(args.conn);
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Mercado Scrape Dashboard")
            .with_inner_size([app_options.window_w, app_options.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
