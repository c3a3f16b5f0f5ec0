//! Hover tooltip state machine.
//!
//! A single tooltip is shared by every tile. Entering a tile replaces the
//! content and position wholesale; leaving only hides the tooltip when the
//! tile being left is still the current target, so a late leave from the
//! previous tile never hides the tile the pointer is on now.

/// What the tooltip shows for one tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub name: String,
    pub category: String,
    /// Raw value, also exposed as the tooltip's `data-value`
    pub value: String,
}

impl TooltipContent {
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Name: {}", self.name),
            format!("Category: {}", self.category),
            format!("Value: {}", self.value),
        ]
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipState {
    Hidden,
    Visible {
        /// Index of the tile under the pointer
        target: usize,
        content: TooltipContent,
        /// Top-left corner of the tooltip, in page coordinates
        position: (f64, f64),
    },
}

#[derive(Debug, Clone)]
pub struct Tooltip {
    state: TooltipState,
    offset: (f64, f64),
    visible_opacity: f32,
}

impl Tooltip {
    pub fn new(offset: (f64, f64), visible_opacity: f32) -> Self {
        Self {
            state: TooltipState::Hidden,
            offset,
            visible_opacity,
        }
    }

    /// Pointer entered or moved over `target`.
    pub fn enter(&mut self, target: usize, content: TooltipContent, pointer: (f64, f64)) {
        self.state = TooltipState::Visible {
            target,
            content,
            position: (pointer.0 + self.offset.0, pointer.1 + self.offset.1),
        };
    }

    /// Pointer left `target`.
    pub fn leave(&mut self, target: usize) {
        if self.target() == Some(target) {
            self.state = TooltipState::Hidden;
        }
    }

    pub fn reset(&mut self) {
        self.state = TooltipState::Hidden;
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn target(&self) -> Option<usize> {
        match self.state {
            TooltipState::Visible { target, .. } => Some(target),
            TooltipState::Hidden => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    pub fn opacity(&self) -> f32 {
        if self.is_visible() {
            self.visible_opacity
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(name: &str) -> TooltipContent {
        TooltipContent {
            name: name.into(),
            category: "Wii".into(),
            value: "1".into(),
        }
    }

    #[test]
    fn enter_shows_at_offset() {
        let mut tooltip = Tooltip::new((10.0, -28.0), 0.9);
        assert_eq!(tooltip.opacity(), 0.0);
        tooltip.enter(0, content("A"), (100.0, 100.0));
        assert_eq!(tooltip.opacity(), 0.9);
        match tooltip.state() {
            TooltipState::Visible { position, .. } => assert_eq!(*position, (110.0, 72.0)),
            TooltipState::Hidden => panic!("tooltip should be visible"),
        }
    }

    #[test]
    fn most_recent_target_wins() {
        let mut tooltip = Tooltip::new((10.0, -28.0), 0.9);
        tooltip.enter(0, content("A"), (1.0, 1.0));
        tooltip.enter(1, content("B"), (2.0, 2.0));
        // Late leave from A must not hide B.
        tooltip.leave(0);
        match tooltip.state() {
            TooltipState::Visible { target, content, .. } => {
                assert_eq!(*target, 1);
                assert_eq!(content.name, "B");
                assert!(!content.text().contains("Name: A"));
            }
            TooltipState::Hidden => panic!("tooltip should show B"),
        }
        tooltip.leave(1);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn content_has_three_lines() {
        assert_eq!(content("A").text(), "Name: A\nCategory: Wii\nValue: 1");
    }
}
