use egui::{Color32, Pos2, Rect, Vec2};

use crate::model::TimeWindow;

/// Index of a primitive within its [`RenderModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub usize);

/// Index of an event within the snapshot the scene was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventRef(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    DateHeader,
    /// Header label of the current day.
    Today,
    ResourceName,
    ResourceCode,
    /// Category text drawn on top of a bar.
    BarText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    RowTop,
    RowBottom,
}

/// A drawing instruction in scene coordinates, independent of the surface
/// that paints it.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPrimitive {
    Bar {
        rect: Rect,
        color: Color32,
        tooltip: String,
        event: EventRef,
    },
    Label {
        pos: Pos2,
        text: String,
        style: LabelStyle,
    },
    GridLine {
        from: Pos2,
        to: Pos2,
        style: LineStyle,
    },
    TodayMarker {
        x: f32,
        top: f32,
        bottom: f32,
    },
    /// Shown alone when there is nothing to chart.
    NoData {
        pos: Pos2,
        text: String,
    },
}

impl RenderPrimitive {
    pub fn is_bar(&self) -> bool {
        matches!(self, RenderPrimitive::Bar { .. })
    }
}

/// The drawable output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub primitives: Vec<RenderPrimitive>,
    /// Full scene extent, including margins.
    pub size: Vec2,
    /// The window actually drawn, after any span cap.
    pub window: TimeWindow,
}

impl RenderModel {
    pub fn get(&self, id: PrimitiveId) -> Option<&RenderPrimitive> {
        self.primitives.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &RenderPrimitive)> {
        self.primitives
            .iter()
            .enumerate()
            .map(|(i, p)| (PrimitiveId(i), p))
    }

    /// Bars with their ids, in drawing order.
    pub fn bars(&self) -> impl Iterator<Item = (PrimitiveId, Rect, &str, EventRef)> {
        self.iter().filter_map(|(id, p)| match p {
            RenderPrimitive::Bar {
                rect, tooltip, event, ..
            } => Some((id, *rect, tooltip.as_str(), *event)),
            _ => None,
        })
    }

    /// The event a bar was drawn for. `None` for anything but a bar.
    pub fn event_ref(&self, id: PrimitiveId) -> Option<EventRef> {
        match self.get(id)? {
            RenderPrimitive::Bar { event, .. } => Some(*event),
            _ => None,
        }
    }

    pub fn bar_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.is_bar()).count()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.primitives.as_slice(), [RenderPrimitive::NoData { .. }])
    }
}
