mod app;
mod ui;

use eframe::egui;

use treemap_explorer::config::ChartConfig;
use treemap_explorer::page::{HostPage, DEFAULT_TEMPLATE};

use app::ChartApp;

fn main() {
    env_logger::init();

    let host_page = match HostPage::bind(DEFAULT_TEMPLATE) {
        Ok(page) => page,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    let config = ChartConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32 + 40.0, config.height as f32 + 140.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Treemap Explorer",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(ChartApp::new(host_page, config)))
        }),
    )
    .expect("Failed to run eframe");
}
