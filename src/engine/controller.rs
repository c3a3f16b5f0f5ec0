//! `ChartController`: owns the loaded datasets and the current scene.
//!
//! A render pass runs layout, coloring, tiles and legend in sequence and
//! replaces the previous scene wholesale. Pointer events drive the shared
//! tooltip against the current scene.

use crate::config::{ChartConfig, ColorDomainPolicy};
use crate::data::{DatasetKind, DatasetSet};
use crate::layout::compute_layout;
use crate::page::HostPage;
use crate::render::color::CategoryScale;
use crate::render::legend::build_legend;
use crate::render::svg::scene_to_svg;
use crate::render::tiles::build_tiles;
use crate::render::tooltip::{Tooltip, TooltipContent};
use crate::render::ChartScene;

use super::switcher::{DatasetSwitcher, HeaderState};

pub struct ChartController {
    config: ChartConfig,
    datasets: DatasetSet,
    switcher: DatasetSwitcher,
    colors: CategoryScale,
    scene: ChartScene,
    tooltip: Tooltip,
}

impl ChartController {
    /// Take ownership of the loaded datasets and render the default one.
    pub fn new(datasets: DatasetSet, config: ChartConfig) -> Self {
        let tooltip = Tooltip::new(config.tooltip_offset, config.tooltip_opacity);
        let switcher = DatasetSwitcher::default();
        let mut controller = Self {
            colors: CategoryScale::new(&config.palette, Vec::new()),
            scene: ChartScene {
                dataset: switcher.active(),
                tiles: Vec::new(),
                legend: Vec::new(),
            },
            config,
            datasets,
            switcher,
            tooltip,
        };
        controller.render();
        controller
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn active(&self) -> DatasetKind {
        self.switcher.active()
    }

    pub fn header(&self) -> &HeaderState {
        self.switcher.header()
    }

    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn colors(&self) -> &CategoryScale {
        &self.colors
    }

    /// Switch to `kind` and re-render, even if it is already active.
    pub fn select(&mut self, kind: DatasetKind) {
        if self.switcher.activate(kind) {
            log::info!("Switched to {}", kind.label());
        }
        self.render();
    }

    /// Re-run the whole pipeline for the active dataset.
    pub fn render(&mut self) {
        let kind = self.switcher.active();
        let data = self.datasets.get(kind);
        let (width, height) = self.config.treemap_size();

        let tiling = self.config.tiling.strategy();
        let root = compute_layout(data, width, height, self.config.padding_inner, tiling.as_ref());

        let domain = match self.config.color_domain {
            ColorDomainPolicy::Fixed => self.datasets.videogames.top_level_names(),
            ColorDomainPolicy::PerDataset => data.top_level_names(),
        };
        self.colors = CategoryScale::new(&self.config.palette, domain);

        let leaves = root.leaves();
        let tiles = build_tiles(&leaves, &mut self.colors, &self.config);
        let legend = build_legend(&tiles, &mut self.colors, &self.config.legend);
        log::debug!(
            "Rendered {}: {} tiles, {} legend entries",
            kind.label(),
            tiles.len(),
            legend.len()
        );

        self.scene = ChartScene {
            dataset: kind,
            tiles,
            legend,
        };
        self.tooltip.reset();
    }

    /// Pointer at `canvas` (chart coordinates) and `page` (screen
    /// coordinates, used to place the tooltip).
    pub fn pointer_moved(&mut self, canvas: (f64, f64), page: (f64, f64)) {
        let hit = self.scene.tile_at(canvas.0, canvas.1);
        let previous = self.tooltip.target();

        match hit {
            Some(index) => {
                if let Some(prev) = previous.filter(|&p| p != index) {
                    self.tooltip.leave(prev);
                }
                let tile = &self.scene.tiles[index];
                let content = TooltipContent {
                    name: tile.name.clone(),
                    category: tile.category.clone(),
                    value: tile.value_text().to_string(),
                };
                self.tooltip.enter(index, content, page);
            }
            None => {
                if let Some(prev) = previous {
                    self.tooltip.leave(prev);
                }
            }
        }
    }

    pub fn pointer_left(&mut self) {
        if let Some(prev) = self.tooltip.target() {
            self.tooltip.leave(prev);
        }
    }

    /// Host page filled with the current header and chart.
    pub fn export_page(&self, host: &HostPage) -> String {
        let svg = scene_to_svg(&self.scene, &self.config);
        host.render(self.header(), &svg)
    }
}
