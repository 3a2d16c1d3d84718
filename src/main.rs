#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

mod app;
mod catalog;
mod fonts;
mod theme;
mod ui;

use anyhow::{Context, Result};
use eframe::egui;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::app::FontPreviewApp;

const WINDOW_SIZE: [f32; 2] = [850.0, 600.0];
const MIN_WINDOW_SIZE: [f32; 2] = [750.0, 550.0];
const MAX_WINDOW_SIZE: [f32; 2] = [950.0, 620.0];

fn main() -> eframe::Result<()> {
    init_tracing();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(WINDOW_SIZE)
        .with_min_inner_size(MIN_WINDOW_SIZE)
        .with_max_inner_size(MAX_WINDOW_SIZE)
        .with_resizable(true)
        .with_title("Font Preview");
    match load_window_icon() {
        Ok(icon) => viewport = viewport.with_icon(icon),
        Err(err) => warn!("window icon unavailable: {:#}", err),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Font Preview",
        options,
        Box::new(|cc| Ok(Box::new(FontPreviewApp::new(cc)))),
    )
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive("font_preview=debug".parse().expect("valid filter directive"))
        .from_env()
        .expect("invalid trace filter specified");

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting tracing subscriber failed");
}

fn load_window_icon() -> Result<egui::IconData> {
    let image = image::load_from_memory(include_bytes!("../assets/icon.png"))
        .context("decoding embedded icon")?
        .into_rgba8();
    let (width, height) = image.dimensions();
    Ok(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}
