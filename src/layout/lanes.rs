//! Packs overlapping intervals into the fewest parallel lanes.
//!
//! Items are visited in ascending start order (ties keep input order) and
//! each goes into the lowest-numbered lane whose last occupant has already
//! ended. Visiting by start makes this greedy colouring optimal: the lane
//! count equals the largest number of intervals open at one instant.

/// Where one input item landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position of the item in the slice passed to [`assign_lanes`].
    pub index: usize,
    pub lane: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneAssignment {
    /// One entry per input item, in visiting order (by start, then input order).
    pub placements: Vec<Placement>,
    pub lane_count: usize,
}

impl LaneAssignment {
    /// Lane of the item at `index` in the original input.
    pub fn lane_of(&self, index: usize) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| p.index == index)
            .map(|p| p.lane)
    }
}

/// Assign a lane to every item. `interval` yields `(start, end)`; an end
/// before its start is treated as equal to the start.
///
/// A lane is free for an item when the lane's last end is at or before the
/// item's start, so back-to-back intervals share a lane.
pub fn assign_lanes<T, K, F>(items: &[T], interval: F) -> LaneAssignment
where
    K: Ord + Copy,
    F: Fn(&T) -> (K, K),
{
    let mut order: Vec<(usize, K, K)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let (start, end) = interval(item);
            (index, start, end.max(start))
        })
        .collect();
    // Stable: equal starts stay in input order.
    order.sort_by_key(|&(_, start, _)| start);

    let mut lane_end: Vec<K> = Vec::new();
    let mut placements = Vec::with_capacity(order.len());

    for (index, start, end) in order {
        let lane = match lane_end.iter().position(|&busy_until| busy_until <= start) {
            Some(free) => {
                lane_end[free] = end;
                free
            }
            None => {
                lane_end.push(end);
                lane_end.len() - 1
            }
        };
        placements.push(Placement { index, lane });
    }

    LaneAssignment {
        placements,
        lane_count: lane_end.len(),
    }
}
