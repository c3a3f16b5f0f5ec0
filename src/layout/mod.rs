//! Treemap layout engine.
//!
//! `compute_layout` builds the annotated hierarchy of a dataset and assigns
//! every node its rectangle. The division of a parent among its children is
//! delegated to a `Tiling` strategy.

pub mod hierarchy;
pub mod tiling;

pub use hierarchy::{Bounds, HierarchyNode};
pub use tiling::{SliceDice, Squarify, Tiling};

use crate::config::TilingKind;
use crate::data::Dataset;

impl TilingKind {
    pub fn strategy(self) -> Box<dyn Tiling> {
        match self {
            TilingKind::Squarify => Box::new(Squarify::default()),
            TilingKind::SliceDice => Box::new(SliceDice),
        }
    }
}

/// Build and lay out a dataset inside `(0, 0, width, height)`.
pub fn compute_layout(
    data: &Dataset,
    width: f64,
    height: f64,
    padding_inner: f64,
    tiling: &dyn Tiling,
) -> HierarchyNode {
    let mut root = HierarchyNode::build(data);
    root.bounds = Bounds::new(0.0, 0.0, width, height);
    position_node(&mut root, 0.0, padding_inner, tiling);
    log::debug!(
        "Laid out '{}' ({} leaves, value {:.2}) in {:.0}x{:.0}",
        root.name,
        root.leaves().len(),
        root.value,
        width,
        height
    );
    root
}

/// Shrink `node` by the padding of its level, then tile its children in the
/// node's rect grown by half the inner padding, so that after each child is
/// shrunk in turn, siblings sit `padding_inner` apart and the outer children
/// touch the parent's edges.
fn position_node(node: &mut HierarchyNode, pad: f64, padding_inner: f64, tiling: &dyn Tiling) {
    node.bounds = node.bounds.inset(pad);
    if node.children.is_empty() {
        return;
    }

    let child_pad = padding_inner / 2.0;
    let area = node.bounds.inset(-child_pad);
    tiling.tile(node.depth, node.value, &mut node.children, area);

    for child in &mut node.children {
        position_node(child, child_pad, padding_inner, tiling);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    const EPS: f64 = 1e-6;

    fn check_children(node: &HierarchyNode) {
        for (i, a) in node.children.iter().enumerate() {
            assert!(a.bounds.x0 >= node.bounds.x0 - EPS, "{}", a.id);
            assert!(a.bounds.y0 >= node.bounds.y0 - EPS, "{}", a.id);
            assert!(a.bounds.x1 <= node.bounds.x1 + EPS, "{}", a.id);
            assert!(a.bounds.y1 <= node.bounds.y1 + EPS, "{}", a.id);
            for b in &node.children[i + 1..] {
                assert!(!a.bounds.overlaps(&b.bounds), "{} overlaps {}", a.id, b.id);
            }
            check_children(a);
        }
    }

    #[test]
    fn root_value_is_leaf_sum_for_every_dataset() {
        for data in [fixtures::videogames(), fixtures::kickstarter(), fixtures::movies()] {
            let root = compute_layout(&data, 960.0, 550.0, 1.0, &Squarify::default());
            let sum: f64 = root.leaves().iter().map(|l| l.value).sum();
            assert!((root.value - sum).abs() < 1e-6);
        }
    }

    #[test]
    fn children_stay_inside_parent_and_never_overlap() {
        for tiling in [TilingKind::Squarify, TilingKind::SliceDice] {
            let strategy = tiling.strategy();
            let root = compute_layout(&fixtures::videogames(), 960.0, 550.0, 1.0, strategy.as_ref());
            check_children(&root);
        }
    }

    #[test]
    fn without_padding_children_cover_parent() {
        let root = compute_layout(&fixtures::videogames(), 960.0, 550.0, 0.0, &Squarify::default());
        root.each_before(&mut |node| {
            if !node.is_leaf() {
                let covered: f64 = node.children.iter().map(|c| c.bounds.area()).sum();
                assert!((covered - node.bounds.area()).abs() < 1e-9 * node.bounds.area().max(1.0), "{}", node.id);
            }
        });
        assert_eq!(root.bounds, Bounds::new(0.0, 0.0, 960.0, 550.0));
    }

    #[test]
    fn padding_separates_siblings() {
        let root = compute_layout(&fixtures::videogames(), 960.0, 550.0, 1.0, &Squarify::default());
        let covered: f64 = root.children.iter().map(|c| c.bounds.area()).sum();
        assert!(covered < root.bounds.area());
        // Outer children still touch the canvas edges.
        let min_x = root.children.iter().map(|c| c.bounds.x0).fold(f64::INFINITY, f64::min);
        let min_y = root.children.iter().map(|c| c.bounds.y0).fold(f64::INFINITY, f64::min);
        assert!(min_x.abs() < EPS);
        assert!(min_y.abs() < EPS);
    }

    #[test]
    fn with_padding_children_cover_parent_minus_gaps() {
        let p = 1.0;
        for data in [fixtures::videogames(), fixtures::kickstarter(), fixtures::movies()] {
            for tiling in [TilingKind::Squarify, TilingKind::SliceDice] {
                let strategy = tiling.strategy();
                let root = compute_layout(&data, 960.0, 550.0, p, strategy.as_ref());
                root.each_before(&mut |node| {
                    if node.is_leaf() {
                        return;
                    }
                    // Growing each child back by half the gap restores the tiled area.
                    let covered: f64 = node.children.iter().map(|c| c.bounds.inset(-p / 2.0).area()).sum();
                    let parent = node.bounds.inset(-p / 2.0).area();
                    assert!((covered - parent).abs() < 1e-9 * parent.max(1.0), "{}", node.id);
                });
            }
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let a = compute_layout(&fixtures::movies(), 960.0, 550.0, 1.0, &Squarify::default());
        let b = compute_layout(&fixtures::movies(), 960.0, 550.0, 1.0, &Squarify::default());
        assert_eq!(a, b);
    }
}
