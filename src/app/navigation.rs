//! Dataset loading and switching for `ChartApp`.
//!
//! The three datasets are fetched once, on a background thread, before the
//! first render (`start_load`, `check_load`).

use std::sync::mpsc;

use eframe::egui;

use treemap_explorer::data::DatasetKind;
use treemap_explorer::engine::ChartController;
use treemap_explorer::net::loader::{load_all, HttpSource};

use super::ChartApp;

impl ChartApp {
    /// Spawn the loader thread.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.error = None;

        let (tx, rx) = mpsc::channel();
        self.load_rx = Some(rx);

        let urls = self.urls.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = match HttpSource::new() {
                Ok(source) => load_all(&source, &urls).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the loader channel; on success build the controller.
    pub fn check_load(&mut self) {
        if let Some(rx) = &self.load_rx {
            if let Ok(result) = rx.try_recv() {
                match result {
                    Ok(datasets) => {
                        self.controller = Some(ChartController::new(datasets, self.config.clone()));
                        self.error = None;
                    }
                    Err(e) => {
                        log::error!("Dataset load failed: {}", e);
                        self.error = Some(e);
                        self.controller = None;
                    }
                }
                self.loading = false;
                self.load_rx = None;
            }
        }
    }

    /// Navigation link clicked.
    pub fn select_dataset(&mut self, kind: DatasetKind) {
        if let Some(controller) = self.controller.as_mut() {
            controller.select(kind);
            self.status = None;
        }
    }
}
