//! Chart canvas for `ChartApp`: tiles, labels, legend and the hover tooltip.

use eframe::egui;

use treemap_explorer::engine::ChartController;
use treemap_explorer::render::tooltip::TooltipState;

use crate::ui::{to_color32, ChartTransform};

use super::ChartApp;

impl ChartApp {
    /// Render the central panel.
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.loading {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
            return;
        }

        if let Some(ref error) = self.error {
            ui.colored_label(egui::Color32::RED, error);
            return;
        }

        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let transform = ChartTransform::fit(response.rect, controller.config());

        match response.hover_pos() {
            Some(pos) => {
                let chart = transform.to_chart(pos);
                controller.pointer_moved(chart, (pos.x as f64, pos.y as f64));
            }
            None => controller.pointer_left(),
        }

        paint_tiles(&painter, controller, &transform);
        paint_legend(&painter, controller, &transform, ui.visuals().text_color());
        show_tooltip(ctx, controller);
    }
}

fn paint_tiles(painter: &egui::Painter, controller: &ChartController, transform: &ChartTransform) {
    let hovered = controller.tooltip().target();
    let font = egui::FontId::proportional(8.0 * transform.scale);

    for (i, tile) in controller.scene().tiles.iter().enumerate() {
        let rect = transform.rect(&tile.bounds);
        painter.rect_filled(rect, 0.0, to_color32(tile.fill));
        if hovered == Some(i) {
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.5, egui::Color32::from_gray(30)));
        }

        let clipped = painter.with_clip_rect(rect);
        for line in &tile.label {
            clipped.text(
                transform.to_screen(tile.bounds.x0 + line.x, tile.bounds.y0 + line.y),
                egui::Align2::LEFT_BOTTOM,
                &line.text,
                font.clone(),
                egui::Color32::WHITE,
            );
        }
    }
}

fn paint_legend(
    painter: &egui::Painter,
    controller: &ChartController,
    transform: &ChartTransform,
    text_color: egui::Color32,
) {
    let legend = &controller.config().legend;
    let (ox, oy) = legend.origin;
    let font = egui::FontId::proportional(12.0 * transform.scale);

    for entry in &controller.scene().legend {
        let (x, y) = (ox + entry.x, oy + entry.y);
        let swatch = egui::Rect::from_min_max(
            transform.to_screen(x, y),
            transform.to_screen(x + legend.box_size, y + legend.box_size),
        );
        painter.rect_filled(swatch, 0.0, to_color32(entry.color));
        painter.text(
            transform.to_screen(x + legend.box_size + legend.padding, y + legend.text_height),
            egui::Align2::LEFT_BOTTOM,
            &entry.category,
            font.clone(),
            text_color,
        );
    }
}

fn show_tooltip(ctx: &egui::Context, controller: &ChartController) {
    let tooltip = controller.tooltip();
    let TooltipState::Visible { content, position, .. } = tooltip.state() else {
        return;
    };

    egui::Area::new(egui::Id::new("tile_tooltip"))
        .order(egui::Order::Tooltip)
        .fixed_pos(egui::pos2(position.0 as f32, position.1 as f32))
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_opacity(tooltip.opacity());
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                for line in content.lines() {
                    ui.label(line);
                }
            });
        });
}
