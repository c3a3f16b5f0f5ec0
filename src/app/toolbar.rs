//! Header panel for `ChartApp`: title, description, dataset links and the
//! Export action.

use eframe::egui;

use treemap_explorer::data::DatasetKind;
use treemap_explorer::page::write_page;

use super::{ChartApp, EXPORT_PATH};

impl ChartApp {
    /// Render the header strip.
    pub fn draw_header(&mut self, ui: &mut egui::Ui) {
        let mut clicked: Option<DatasetKind> = None;
        let mut export = false;

        ui.vertical_centered(|ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                for kind in self.host_page.nav_order() {
                    let active = self
                        .controller
                        .as_ref()
                        .map_or(false, |c| c.header().is_active(kind.info().link_id));
                    let link = ui.add_enabled(
                        self.controller.is_some(),
                        egui::SelectableLabel::new(active, kind.label()),
                    );
                    if link.clicked() {
                        clicked = Some(kind);
                    }
                }

                ui.separator();
                if ui
                    .add_enabled(self.controller.is_some(), egui::Button::new("Export"))
                    .on_hover_text(EXPORT_PATH)
                    .clicked()
                {
                    export = true;
                }
                if let Some(ref status) = self.status {
                    ui.label(status);
                }
            });

            if let Some(ref controller) = self.controller {
                let header = controller.header();
                ui.heading(egui::RichText::new(header.title).size(28.0).strong());
                ui.label(header.description);
            }
            ui.add_space(4.0);
        });

        if let Some(kind) = clicked {
            self.select_dataset(kind);
        }
        if export {
            self.export();
        }
    }

    /// Write the current chart into the host page.
    pub fn export(&mut self) {
        let Some(ref controller) = self.controller else {
            return;
        };
        let html = controller.export_page(&self.host_page);
        self.status = Some(match write_page(EXPORT_PATH, &html) {
            Ok(()) => format!("Saved {}", EXPORT_PATH),
            Err(e) => {
                log::warn!("{}", e);
                e.to_string()
            }
        });
    }
}
