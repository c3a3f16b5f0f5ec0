use crate::config::ChartConfig;
use crate::layout::{Bounds, HierarchyNode};

use super::color::{CategoryScale, Rgba};

/// One line of a tile label, relative to the tile's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// The rendered rectangle for one leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: String,
    pub name: String,
    pub category: String,
    pub value: f64,
    /// Value as written in the dataset
    pub raw_value: String,
    pub bounds: Bounds,
    pub fill: Rgba,
    pub label: Vec<LabelLine>,
}

impl Tile {
    /// Offset the tile group is translated by.
    pub fn translate(&self) -> (f64, f64) {
        (self.bounds.x0, self.bounds.y0)
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    pub fn value_text(&self) -> &str {
        &self.raw_value
    }
}

/// Fallback text for a leaf without a written value: integers without a
/// fractional part.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Split a name into label fragments.
///
/// A fragment starts before every ASCII uppercase letter that is followed by
/// a character other than an ASCII uppercase letter, except at the start.
pub fn split_label(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut fragments = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let starts_word = i > 0
            && c.is_ascii_uppercase()
            && chars.get(i + 1).map_or(false, |next| !next.is_ascii_uppercase());
        if starts_word && !current.is_empty() {
            fragments.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() || fragments.is_empty() {
        fragments.push(current);
    }
    fragments
}

/// Stack the label fragments of `name` as lines.
pub fn label_lines(name: &str, config: &ChartConfig) -> Vec<LabelLine> {
    split_label(name)
        .into_iter()
        .enumerate()
        .map(|(i, text)| LabelLine {
            text,
            x: config.label_inset,
            y: config.label_top + config.label_line_height * i as f64,
        })
        .collect()
}

/// One tile per leaf, in leaf order, filled by category.
pub fn build_tiles(leaves: &[&HierarchyNode], colors: &mut CategoryScale, config: &ChartConfig) -> Vec<Tile> {
    leaves
        .iter()
        .map(|leaf| Tile {
            id: leaf.id.clone(),
            name: leaf.name.clone(),
            category: leaf.category.clone(),
            value: leaf.value,
            raw_value: leaf.raw_value.clone().unwrap_or_else(|| format_value(leaf.value)),
            bounds: leaf.bounds,
            fill: colors.color(&leaf.category),
            label: label_lines(&leaf.name, config),
        })
        .collect()
}
