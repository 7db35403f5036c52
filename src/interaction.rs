//! Pointer handling over a rendered scene: hover highlight and
//! click-to-inspect. Purely read-only; events are never modified.

use egui::{Color32, Pos2};

use crate::render::{lighten, PrimitiveId, RenderModel, RenderPrimitive};

/// Receives the info string of a clicked bar.
pub trait InfoSink {
    fn show_info(&mut self, text: &str);
}

impl<F: FnMut(&str)> InfoSink for F {
    fn show_info(&mut self, text: &str) {
        self(text)
    }
}

/// Tracks which bar, if any, is under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionController {
    hovered: Option<PrimitiveId>,
    brightness: f32,
}

impl InteractionController {
    pub fn new(brightness: f32) -> Self {
        Self {
            hovered: None,
            brightness,
        }
    }

    pub fn hovered(&self) -> Option<PrimitiveId> {
        self.hovered
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    /// Forget hover state, e.g. when a new scene replaces the old one.
    pub fn reset(&mut self) {
        self.hovered = None;
    }

    /// Topmost bar containing `pos`. Later primitives paint over earlier
    /// ones, so the search runs back to front.
    pub fn hit_test(&self, model: &RenderModel, pos: Pos2) -> Option<PrimitiveId> {
        model
            .bars()
            .filter(|(_, rect, _, _)| rect.contains(pos))
            .map(|(id, ..)| id)
            .last()
    }

    pub fn on_hover(&mut self, id: PrimitiveId) {
        self.hovered = Some(id);
    }

    pub fn on_leave(&mut self) {
        self.hovered = None;
    }

    /// Update hover from a pointer position (`None` when the pointer left
    /// the chart). Returns true when the hovered bar changed.
    pub fn pointer_moved(&mut self, model: &RenderModel, pos: Option<Pos2>) -> bool {
        let hit = pos.and_then(|p| self.hit_test(model, p));
        let changed = hit != self.hovered;
        self.hovered = hit;
        changed
    }

    /// Fill color to paint for bar `id`: brightened while hovered.
    pub fn fill_for(&self, id: PrimitiveId, base: Color32) -> Color32 {
        if self.hovered == Some(id) {
            lighten(base, self.brightness)
        } else {
            base
        }
    }

    /// Send the clicked bar's info string to `sink`. Returns false when `id`
    /// is not a bar of `model`.
    pub fn on_click(&self, model: &RenderModel, id: PrimitiveId, sink: &mut impl InfoSink) -> bool {
        match model.get(id) {
            Some(RenderPrimitive::Bar { tooltip, .. }) => {
                sink.show_info(tooltip);
                true
            }
            _ => false,
        }
    }

    /// Hit-test `pos` and forward the bar's info, if any, to `sink`.
    pub fn click_at(&self, model: &RenderModel, pos: Pos2, sink: &mut impl InfoSink) -> Option<PrimitiveId> {
        let id = self.hit_test(model, pos)?;
        self.on_click(model, id, sink).then_some(id)
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(1.15)
    }
}
