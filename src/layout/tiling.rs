//! Tiling strategies: how one parent's rectangle is divided among its
//! children, proportionally to their values.

use super::hierarchy::{Bounds, HierarchyNode};

/// Golden ratio, the target aspect ratio of squarified rows.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Divides `area` among `children` in order.
pub trait Tiling {
    /// `value` is the parent's aggregate value, `depth` the parent's depth.
    fn tile(&self, depth: usize, value: f64, children: &mut [HierarchyNode], area: Bounds);
}

/// Squarified treemap (Bruls, Huizing, van Wijk): rows keep growing while
/// the worst aspect ratio in the row does not get worse.
#[derive(Debug, Clone, Copy)]
pub struct Squarify {
    pub ratio: f64,
}

impl Default for Squarify {
    fn default() -> Self {
        Self { ratio: PHI }
    }
}

impl Tiling for Squarify {
    fn tile(&self, _depth: usize, value: f64, nodes: &mut [HierarchyNode], area: Bounds) {
        let Bounds { mut x0, mut y0, x1, y1 } = area;
        let n = nodes.len();
        let mut remaining = value;
        let mut i0 = 0;
        let mut i1 = 0;

        while i0 < n {
            let dx = x1 - x0;
            let dy = y1 - y0;

            // Find the next non-empty node.
            let mut sum_value;
            loop {
                sum_value = nodes[i1].value;
                i1 += 1;
                if sum_value != 0.0 || i1 >= n {
                    break;
                }
            }
            let mut min_value = sum_value;
            let mut max_value = sum_value;
            let alpha = (dy / dx).max(dx / dy) / (remaining * self.ratio);
            let mut beta = sum_value * sum_value * alpha;
            let mut min_ratio = (max_value / beta).max(beta / min_value);

            while i1 < n {
                let node_value = nodes[i1].value;
                sum_value += node_value;
                min_value = min_value.min(node_value);
                max_value = max_value.max(node_value);
                beta = sum_value * sum_value * alpha;
                let new_ratio = (max_value / beta).max(beta / min_value);
                if new_ratio > min_ratio {
                    sum_value -= node_value;
                    break;
                }
                min_ratio = new_ratio;
                i1 += 1;
            }

            let row = &mut nodes[i0..i1];
            if dx < dy {
                let y = if remaining != 0.0 { y0 + dy * sum_value / remaining } else { y1 };
                dice(row, sum_value, Bounds::new(x0, y0, x1, y));
                if remaining != 0.0 {
                    y0 = y;
                }
            } else {
                let x = if remaining != 0.0 { x0 + dx * sum_value / remaining } else { x1 };
                slice(row, sum_value, Bounds::new(x0, y0, x, y1));
                if remaining != 0.0 {
                    x0 = x;
                }
            }
            remaining -= sum_value;
            i0 = i1;
        }
    }
}

/// Alternates horizontal and vertical division by depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliceDice;

impl Tiling for SliceDice {
    fn tile(&self, depth: usize, value: f64, children: &mut [HierarchyNode], area: Bounds) {
        if depth % 2 == 1 {
            slice(children, value, area);
        } else {
            dice(children, value, area);
        }
    }
}

/// Lay nodes out left to right, each spanning the full height.
fn dice(nodes: &mut [HierarchyNode], value: f64, area: Bounds) {
    let k = if value != 0.0 { area.width() / value } else { 0.0 };
    let mut x = area.x0;
    for node in nodes {
        let x_next = x + node.value * k;
        node.bounds = Bounds::new(x, area.y0, x_next, area.y1);
        x = x_next;
    }
}

/// Lay nodes out top to bottom, each spanning the full width.
fn slice(nodes: &mut [HierarchyNode], value: f64, area: Bounds) {
    let k = if value != 0.0 { area.height() / value } else { 0.0 };
    let mut y = area.y0;
    for node in nodes {
        let y_next = y + node.value * k;
        node.bounds = Bounds::new(area.x0, y, area.x1, y_next);
        y = y_next;
    }
}
