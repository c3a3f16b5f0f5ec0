use crate::config::LegendConfig;

use super::color::{CategoryScale, Rgba};
use super::tiles::Tile;

/// One swatch + label of the category legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub category: String,
    pub color: Rgba,
    /// Offset of the entry inside the legend group
    pub x: f64,
    pub y: f64,
}

/// Distinct categories in first-seen order.
pub fn distinct_categories<'a>(categories: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    categories
        .into_iter()
        .filter(|c| seen.insert(*c))
        .map(str::to_string)
        .collect()
}

/// Grid cell of the `index`-th entry: column-major over `rows` rows.
pub fn grid_position(index: usize, config: &LegendConfig) -> (f64, f64) {
    let rows = config.rows.max(1);
    let column = index / rows;
    let row = index % rows;
    (
        config.entry_width * column as f64,
        (config.box_size + config.padding) * row as f64,
    )
}

pub fn build_legend(tiles: &[Tile], colors: &mut CategoryScale, config: &LegendConfig) -> Vec<LegendEntry> {
    distinct_categories(tiles.iter().map(|t| t.category.as_str()))
        .into_iter()
        .enumerate()
        .map(|(i, category)| {
            let (x, y) = grid_position(i, config);
            LegendEntry {
                color: colors.color(&category),
                category,
                x,
                y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupes_preserving_first_seen_order() {
        let cats = distinct_categories(["Wii", "NES", "Wii", "GB", "NES"]);
        assert_eq!(cats, ["Wii", "NES", "GB"]);
    }

    #[test]
    fn fills_four_rows_column_major() {
        let config = LegendConfig::default();
        assert_eq!(grid_position(0, &config), (0.0, 0.0));
        assert_eq!(grid_position(3, &config), (0.0, 75.0));
        assert_eq!(grid_position(4, &config), (150.0, 0.0));
        assert_eq!(grid_position(9, &config), (300.0, 25.0));
    }
}
