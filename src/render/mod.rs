pub mod color;
pub mod legend;
pub mod svg;
pub mod tiles;
pub mod tooltip;

use crate::data::DatasetKind;

use self::legend::LegendEntry;
use self::tiles::Tile;

/// Everything one render pass produces for the active dataset.
///
/// Coordinates are relative to the chart canvas (inside the margins).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub dataset: DatasetKind,
    pub tiles: Vec<Tile>,
    pub legend: Vec<LegendEntry>,
}

impl ChartScene {
    /// Index of the topmost tile containing the canvas point.
    pub fn tile_at(&self, x: f64, y: f64) -> Option<usize> {
        self.tiles
            .iter()
            .enumerate()
            .rev()
            .find(|(_, tile)| tile.bounds.contains(x, y))
            .map(|(i, _)| i)
    }
}
