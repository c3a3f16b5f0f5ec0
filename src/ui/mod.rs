//! egui helpers shared by the chart views: color conversion and the mapping
//! between chart coordinates and screen space.

use eframe::egui;

use treemap_explorer::config::ChartConfig;
use treemap_explorer::layout::Bounds;
use treemap_explorer::render::color::Rgba;

pub fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Uniform scale of the whole chart (margins included) into a screen rect.
///
/// Chart coordinates are those of the canvas group, i.e. already inside the
/// left/top margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTransform {
    /// Screen position of the canvas origin
    pub origin: egui::Pos2,
    pub scale: f32,
}

impl ChartTransform {
    pub fn fit(available: egui::Rect, config: &ChartConfig) -> Self {
        let sx = available.width() / config.width as f32;
        let sy = available.height() / config.height as f32;
        let scale = sx.min(sy).max(0.0);
        let used = egui::vec2(config.width as f32, config.height as f32) * scale;
        // Center horizontally, pin to the top.
        let left = available.min.x + (available.width() - used.x).max(0.0) / 2.0;
        let origin = egui::pos2(
            left + config.margins.left as f32 * scale,
            available.min.y + config.margins.top as f32 * scale,
        );
        Self { origin, scale }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> egui::Pos2 {
        self.origin + egui::vec2(x as f32, y as f32) * self.scale
    }

    pub fn to_chart(&self, pos: egui::Pos2) -> (f64, f64) {
        if self.scale <= 0.0 {
            return (f64::NAN, f64::NAN);
        }
        let v = (pos - self.origin) / self.scale;
        (v.x as f64, v.y as f64)
    }

    pub fn rect(&self, b: &Bounds) -> egui::Rect {
        egui::Rect::from_min_max(self.to_screen(b.x0, b.y0), self.to_screen(b.x1, b.y1))
    }
}
