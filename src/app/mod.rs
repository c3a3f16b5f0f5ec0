//! `ChartApp`: the top-level egui application state.
//!
//! Methods are split across the sibling sub-modules:
//!
//! - `navigation`: background dataset load and dataset switching
//! - `toolbar`: header, navigation links and export
//! - `content`: chart canvas, legend and tooltip

pub mod content;
pub mod navigation;
pub mod toolbar;

use std::sync::mpsc;

use eframe::egui;

use treemap_explorer::config::ChartConfig;
use treemap_explorer::data::DatasetSet;
use treemap_explorer::engine::ChartController;
use treemap_explorer::net::loader::DatasetUrls;
use treemap_explorer::page::HostPage;

/// Where the Export action writes the page.
pub const EXPORT_PATH: &str = "treemap.html";

pub struct ChartApp {
    pub config: ChartConfig,
    pub urls: DatasetUrls,
    pub host_page: HostPage,
    pub controller: Option<ChartController>,
    pub error: Option<String>,
    pub loading: bool,
    pub load_rx: Option<mpsc::Receiver<Result<DatasetSet, String>>>,
    /// Result of the last export, shown in the header
    pub status: Option<String>,
}

impl ChartApp {
    pub fn new(host_page: HostPage, config: ChartConfig) -> Self {
        Self {
            config,
            urls: DatasetUrls::default(),
            host_page,
            controller: None,
            error: None,
            loading: false,
            load_rx: None,
            status: None,
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.is_none() && !self.loading && self.error.is_none() {
            self.start_load(ctx);
        }
        self.check_load();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.draw_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui, ctx);
        });
    }
}
