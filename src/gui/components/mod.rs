// src/gui/components/mod.rs
pub mod header;
pub mod status_bar;
pub mod tabs;
