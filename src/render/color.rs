//! Category colors.
//!
//! Palette entries are CSS hex strings; `CategoryScale` maps category names
//! onto them in domain order, wrapping around when the domain outgrows the
//! palette.

use std::collections::HashMap;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };

    /// `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a `#rrggbb` palette entry. Anything else is black.
pub fn parse_hex_color(s: &str) -> Rgba {
    let hex = match s.trim().strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) => hex,
        _ => return Rgba::BLACK,
    };
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Rgba { r, g, b, a: 255 },
        _ => Rgba::BLACK,
    }
}

/// Ordinal scale from category name to palette color.
///
/// Categories outside the seeded domain are appended on first lookup, so the
/// color of a category never changes for the lifetime of the scale.
#[derive(Debug, Clone)]
pub struct CategoryScale {
    range: Vec<Rgba>,
    domain: Vec<String>,
    index: HashMap<String, usize>,
}

impl CategoryScale {
    pub fn new<P, D>(palette: P, domain: D) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        D: IntoIterator<Item = String>,
    {
        let range: Vec<Rgba> = palette.into_iter().map(|c| parse_hex_color(c.as_ref())).collect();
        let mut scale = Self {
            range,
            domain: Vec::new(),
            index: HashMap::new(),
        };
        for category in domain {
            scale.position(&category);
        }
        scale
    }

    /// Color of `category`, extending the domain if needed.
    pub fn color(&mut self, category: &str) -> Rgba {
        if self.range.is_empty() {
            return Rgba::BLACK;
        }
        let i = self.position(category);
        self.range[i % self.range.len()]
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    fn position(&mut self, category: &str) -> usize {
        if let Some(&i) = self.index.get(category) {
            return i;
        }
        let i = self.domain.len();
        self.domain.push(category.to_string());
        self.index.insert(category.to_string(), i);
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PALETTE;

    #[test]
    fn parses_palette_entries() {
        assert_eq!(parse_hex_color("#316395"), Rgba { r: 0x31, g: 0x63, b: 0x95, a: 255 });
        assert_eq!(parse_hex_color("#FF9900"), parse_hex_color("#ff9900"));
        assert_eq!(parse_hex_color("#e67300").to_hex(), "#e67300");
        for bad in ["red", "#F80", "#ff880080", "#gg0000", "#+10000", "#é1234"] {
            assert_eq!(parse_hex_color(bad), Rgba::BLACK, "{}", bad);
        }
    }

    #[test]
    fn fifteenth_category_wraps_to_first_color() {
        let categories: Vec<String> = (0..20).map(|i| format!("cat{}", i)).collect();
        let mut scale = CategoryScale::new(PALETTE, categories.clone());
        let first = scale.color(&categories[0]);
        assert_eq!(scale.color(&categories[14]), first);
        assert_ne!(scale.color(&categories[13]), first);
    }

    #[test]
    fn unknown_categories_are_appended_in_lookup_order() {
        let mut scale = CategoryScale::new(PALETTE, vec!["Wii".to_string(), "DS".to_string()]);
        let action = scale.color("Action");
        assert_eq!(action, parse_hex_color(PALETTE[2]));
        assert_eq!(scale.color("Action"), action);
        assert_eq!(scale.color("Wii"), parse_hex_color(PALETTE[0]));
        assert_eq!(scale.domain(), ["Wii", "DS", "Action"]);
    }

    #[test]
    fn duplicate_domain_entries_collapse() {
        let mut scale = CategoryScale::new(PALETTE, vec!["a".to_string(), "a".to_string(), "b".to_string()]);
        assert_eq!(scale.color("b"), parse_hex_color(PALETTE[1]));
    }
}
