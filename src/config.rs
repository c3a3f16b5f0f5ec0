//! Hard-coded chart configuration.
//!
//! Every dimension the chart uses lives here so the renderers, the SVG
//! exporter and the egui canvas agree on one geometry.

/// Fill colors, assigned to categories in domain order.
pub const PALETTE: [&str; 14] = [
    "#316395", "#dc3912", "#ff9900", "#109618", "#990099", "#0099c6", "#8b0707",
    "#3b3eac", "#b82e2e", "#994499", "#22aa99", "#aaaa11", "#6633cc", "#e67300",
];

/// Outer margins of the chart canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Geometry of the category legend grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendConfig {
    /// Horizontal distance between legend columns
    pub entry_width: f64,
    /// Side of the color swatch
    pub box_size: f64,
    /// Gap between swatch and label, and between rows
    pub padding: f64,
    /// Number of rows before wrapping to the next column
    pub rows: usize,
    /// Baseline of the label text inside an entry
    pub text_height: f64,
    /// Translation of the legend group inside the canvas
    pub origin: (f64, f64),
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            entry_width: 150.0,
            box_size: 20.0,
            padding: 5.0,
            rows: 4,
            text_height: 16.0,
            origin: (150.0, 580.0),
        }
    }
}

/// Where the category color domain comes from on each render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDomainPolicy {
    /// Always seed from the videogames top-level categories.
    Fixed,
    /// Seed from the top-level categories of the active dataset.
    PerDataset,
}

impl Default for ColorDomainPolicy {
    fn default() -> Self {
        if cfg!(feature = "recompute-color-domain") {
            Self::PerDataset
        } else {
            Self::Fixed
        }
    }
}

/// Tiling strategy used by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TilingKind {
    #[default]
    Squarify,
    SliceDice,
}

/// Complete chart configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Band at the bottom of the canvas reserved for the legend
    pub legend_height: f64,
    pub margins: Margins,
    /// Gap between sibling tiles
    pub padding_inner: f64,
    pub palette: Vec<String>,
    pub legend: LegendConfig,
    /// Tooltip offset from the pointer position
    pub tooltip_offset: (f64, f64),
    pub tooltip_opacity: f32,
    /// First label line baseline and the distance between lines
    pub label_top: f64,
    pub label_line_height: f64,
    pub label_inset: f64,
    pub tiling: TilingKind,
    pub color_domain: ColorDomainPolicy,
}

impl ChartConfig {
    /// Width and height available to the treemap itself.
    pub fn treemap_size(&self) -> (f64, f64) {
        (self.width, (self.height - self.legend_height).max(0.0))
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 700.0,
            legend_height: 150.0,
            margins: Margins {
                top: 10.0,
                right: 10.0,
                bottom: 100.0,
                left: 10.0,
            },
            padding_inner: 1.0,
            palette: PALETTE.iter().map(|c| c.to_string()).collect(),
            legend: LegendConfig::default(),
            tooltip_offset: (10.0, -28.0),
            tooltip_opacity: 0.9,
            label_top: 13.0,
            label_line_height: 10.0,
            label_inset: 4.0,
            tiling: TilingKind::default(),
            color_domain: ColorDomainPolicy::default(),
        }
    }
}
