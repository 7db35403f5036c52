use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::lanes::assign_lanes;
use crate::config::ChartConfig;
use crate::model::{Event, ResourceCatalog};

/// An event placed in a lane, with its position in the input snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowEvent<'e> {
    pub index: usize,
    pub event: &'e Event,
    pub lane: usize,
}

/// One equipment row, rebuilt on every layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRow<'e> {
    pub resource_id: &'e str,
    pub label: String,
    pub lanes: usize,
    /// Events in lane-assignment order: by start, ties in input order.
    pub events: Vec<RowEvent<'e>>,
    pub top: f32,
    pub height: f32,
}

impl ResourceRow<'_> {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowLayout<'e> {
    /// Rows sorted by resource id, stacked top to bottom.
    pub rows: Vec<ResourceRow<'e>>,
    /// Bottom edge of the last row, or the header height when empty.
    pub bottom: f32,
}

/// Height of a row holding `lanes` lanes. A row always reserves one lane.
pub fn row_height(lanes: usize, config: &ChartConfig) -> f32 {
    lanes.max(1) as f32 * config.lane_pitch() + config.sizing.row_padding
}

/// Group events by resource, pack each group into lanes and stack the rows
/// below the header.
///
/// Lanes are computed on the events' full intervals, before any clipping to
/// a view window, so events scrolled out of view still hold their lane.
pub fn layout_rows<'e>(events: &'e [Event], catalog: &ResourceCatalog, config: &ChartConfig) -> RowLayout<'e> {
    let mut groups: BTreeMap<&'e str, Vec<usize>> = BTreeMap::new();
    for (index, event) in events.iter().enumerate() {
        if event.is_degenerate() {
            warn!(
                resource = %event.resource_id,
                label = %event.label,
                start = %event.start,
                "event ends before it starts; treating it as a point event"
            );
        }
        groups.entry(event.resource_id.as_str()).or_default().push(index);
    }

    let mut top = config.sizing.header_height;
    let mut rows = Vec::with_capacity(groups.len());

    for (resource_id, indices) in groups {
        let assignment = assign_lanes(&indices, |&i| (events[i].start, events[i].effective_end()));
        let placed: Vec<RowEvent<'e>> = assignment
            .placements
            .iter()
            .map(|p| {
                let index = indices[p.index];
                RowEvent {
                    index,
                    event: &events[index],
                    lane: p.lane,
                }
            })
            .collect();

        let height = row_height(assignment.lane_count, config);
        debug!(resource = resource_id, events = placed.len(), lanes = assignment.lane_count, "laid out row");

        rows.push(ResourceRow {
            resource_id,
            label: catalog.display_name(resource_id).to_string(),
            lanes: assignment.lane_count,
            events: placed,
            top,
            height,
        });
        top += height;
    }

    RowLayout { rows, bottom: top }
}
