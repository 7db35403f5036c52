use std::collections::HashMap;

use egui::Color32;

use crate::config::ChartColors;

/// Hands out one palette color per category and remembers it.
///
/// Owned by the host for the whole session and passed by `&mut` into each
/// render, so assignments stay stable across renders and mutation is
/// serialized by the borrow. Once the palette is exhausted colors repeat.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    palette: Vec<Color32>,
    assigned: HashMap<String, Color32>,
}

impl ColorAssigner {
    pub fn new(palette: Vec<Color32>) -> Self {
        let palette = if palette.is_empty() {
            ChartColors::default().palette
        } else {
            palette
        };
        Self {
            palette,
            assigned: HashMap::new(),
        }
    }

    /// Color for `category`, allocating the next palette entry on first use.
    pub fn color_for(&mut self, category: &str) -> Color32 {
        if let Some(color) = self.assigned.get(category) {
            return *color;
        }
        let color = self.palette[self.assigned.len() % self.palette.len()];
        self.assigned.insert(category.to_string(), color);
        color
    }

    /// Color already given to `category`, if any.
    pub fn peek(&self, category: &str) -> Option<Color32> {
        self.assigned.get(category).copied()
    }

    /// Number of categories seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(ChartColors::default().palette)
    }
}

/// Scale every channel by `factor`, saturating at white.
pub fn lighten(color: Color32, factor: f32) -> Color32 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgba_unmultiplied(scale(r), scale(g), scale(b), a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn palette() -> Vec<Color32> {
        vec![Color32::RED, Color32::GREEN, Color32::BLUE]
    }

    #[test]
    fn new_categories_take_the_next_color() {
        let mut colors = ColorAssigner::new(palette());
        assert_eq!(colors.color_for("Thermal"), Color32::RED);
        assert_eq!(colors.color_for("Drop"), Color32::GREEN);
        assert_eq!(colors.color_for("Thermal"), Color32::RED);
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn palette_wraps() {
        let mut colors = ColorAssigner::new(palette());
        for c in ["a", "b", "c"] {
            colors.color_for(c);
        }
        assert_eq!(colors.color_for("d"), Color32::RED);
        assert_eq!(colors.peek("d"), Some(Color32::RED));
        assert_eq!(colors.peek("e"), None);
    }

    #[test]
    fn empty_palette_falls_back_to_defaults() {
        let mut colors = ColorAssigner::new(Vec::new());
        assert_eq!(colors.color_for("x"), ChartColors::default().palette[0]);
    }

    #[test]
    fn lighten_scales_and_saturates() {
        assert_eq!(lighten(Color32::from_rgb(100, 200, 0), 1.15), Color32::from_rgb(115, 230, 0));
        assert_eq!(lighten(Color32::from_rgb(250, 250, 250), 1.15), Color32::from_rgb(255, 255, 255));
    }

    proptest! {
        #[test]
        fn colors_are_stable(names in prop::collection::vec("[a-e]{1,2}", 1..50)) {
            let mut colors = ColorAssigner::default();
            let first = colors.color_for("X");
            for name in &names {
                colors.color_for(name);
                prop_assert_eq!(colors.color_for("X"), first);
            }
        }
    }
}
