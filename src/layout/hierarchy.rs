use crate::data::Dataset;

/// Rectangle bounds of a laid-out node
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Shrink every side by `pad`, collapsing inverted extents to their midpoint.
    pub fn inset(&self, pad: f64) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) = (self.x0 + pad, self.y0 + pad, self.x1 - pad, self.y1 - pad);
        if x1 < x0 {
            x0 = (x0 + x1) / 2.0;
            x1 = x0;
        }
        if y1 < y0 {
            y0 = (y0 + y1) / 2.0;
            y1 = y0;
        }
        Self { x0, y0, x1, y1 }
    }

    /// Interiors intersect (shared edges do not count).
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}

/// A dataset node annotated for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    /// Dot-joined names from the root down to this node
    pub id: String,
    pub name: String,
    pub category: String,
    /// Leaf input value, or the sum of descendant leaves
    pub value: f64,
    /// Leaf value as written in the dataset
    pub raw_value: Option<String>,
    pub depth: usize,
    /// Longest distance to a descendant leaf (0 for leaves)
    pub height: usize,
    pub bounds: Bounds,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Build the annotated tree: ids, depths, heights and leaf sums.
    ///
    /// Siblings are ordered by descending height, then descending value.
    pub fn build(data: &Dataset) -> Self {
        build_node(data, None, 0)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Leaves in pre-order.
    pub fn leaves(&self) -> Vec<&HierarchyNode> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    /// Visit every node in pre-order.
    pub fn each_before<'a>(&'a self, f: &mut impl FnMut(&'a HierarchyNode)) {
        f(self);
        for child in &self.children {
            child.each_before(f);
        }
    }
}

fn build_node(data: &Dataset, parent_id: Option<&str>, depth: usize) -> HierarchyNode {
    let id = match parent_id {
        Some(parent) => format!("{}.{}", parent, data.name),
        None => data.name.clone(),
    };

    let mut children: Vec<HierarchyNode> = data
        .children
        .iter()
        .map(|child| build_node(child, Some(&id), depth + 1))
        .collect();

    // Stable: equal keys keep input order.
    children.sort_by(|a, b| {
        b.height
            .cmp(&a.height)
            .then_with(|| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal))
    });

    let raw_value = if children.is_empty() {
        data.raw_value.clone()
    } else {
        None
    };
    let (value, height) = if children.is_empty() {
        (data.value.unwrap_or(0.0), 0)
    } else {
        (
            children.iter().map(|c| c.value).sum(),
            children.iter().map(|c| c.height).max().unwrap_or(0) + 1,
        )
    };

    HierarchyNode {
        id,
        name: data.name.clone(),
        category: data.category.clone(),
        value,
        raw_value,
        depth,
        height,
        bounds: Bounds::default(),
        children,
    }
}

fn collect_leaves<'a>(node: &'a HierarchyNode, out: &mut Vec<&'a HierarchyNode>) {
    if node.is_leaf() {
        out.push(node);
        return;
    }
    for child in &node.children {
        collect_leaves(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn ids_join_ancestor_names() {
        let root = HierarchyNode::build(&fixtures::videogames());
        let leaves = root.leaves();
        assert!(leaves
            .iter()
            .any(|l| l.id == "Video Game Sales Data Top 100.Wii.Wii Sports"));
        assert_eq!(root.id, "Video Game Sales Data Top 100");
    }

    #[test]
    fn internal_values_sum_their_leaves() {
        let root = HierarchyNode::build(&fixtures::videogames());
        let mut checked = 0;
        root.each_before(&mut |node| {
            if !node.is_leaf() {
                let sum: f64 = node.leaves().iter().map(|l| l.value).sum();
                assert!((node.value - sum).abs() < 1e-9, "{}", node.id);
                checked += 1;
            }
        });
        assert_eq!(checked, 5);
        assert_eq!(root.height, 2);
        assert_eq!(root.children[0].depth, 1);
    }

    #[test]
    fn siblings_sorted_by_height_then_value() {
        let root = HierarchyNode::build(&fixtures::videogames());
        let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
        // Wii 150.82, NES 68.55, GB 61.63, DS 30.01
        assert_eq!(names, ["Wii", "NES", "GB", "DS"]);

        let mixed = Dataset {
            name: "root".into(),
            children: vec![
                Dataset { name: "big-leaf".into(), children: vec![], category: "x".into(), value: Some(100.0), raw_value: None },
                Dataset {
                    name: "small-group".into(),
                    children: vec![Dataset { name: "a".into(), children: vec![], category: "x".into(), value: Some(1.0), raw_value: None }],
                    category: String::new(),
                    value: None,
                    raw_value: None,
                },
            ],
            category: String::new(),
            value: None,
            raw_value: None,
        };
        let root = HierarchyNode::build(&mixed);
        assert_eq!(root.children[0].name, "small-group");
    }

    #[test]
    fn inset_collapses_to_midpoint() {
        let b = Bounds::new(0.0, 0.0, 1.0, 10.0).inset(0.75);
        assert_eq!(b.x0, 0.5);
        assert_eq!(b.x1, 0.5);
        assert_eq!(b.y0, 0.75);
        assert_eq!(b.y1, 9.25);
    }
}
