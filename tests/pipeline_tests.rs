mod common;

use chrono::NaiveDate;
use common::{dec, event, jan, scene, window};
use egui::Pos2;
use equip_gantt::config::ChartConfig;
use equip_gantt::interaction::InteractionController;
use equip_gantt::layout::layout_rows;
use equip_gantt::model::{Event, ResourceCatalog};
use equip_gantt::render::{EventRef, RenderModel, RenderPrimitive};
use proptest::prelude::*;

fn lanes(events: &[Event]) -> (Vec<usize>, usize) {
    let config = ChartConfig::default();
    let layout = layout_rows(events, &ResourceCatalog::new(), &config);
    assert_eq!(layout.rows.len(), 1);
    let row = &layout.rows[0];
    let mut by_index = vec![usize::MAX; events.len()];
    for placed in &row.events {
        by_index[placed.index] = placed.lane;
    }
    (by_index, row.lanes)
}

fn bar_for(model: &RenderModel, index: usize) -> Option<egui::Rect> {
    model
        .bars()
        .find(|(_, _, _, event)| *event == EventRef(index))
        .map(|(_, rect, ..)| rect)
}

#[test]
fn back_to_back_events_share_a_lane() {
    let events = [
        event("EQ1", "A", jan(1), Some(jan(3))),
        event("EQ1", "B", jan(4), Some(jan(5))),
    ];
    assert_eq!(lanes(&events), (vec![0, 0], 1));
}

#[test]
fn nested_events_take_two_lanes() {
    let events = [
        event("EQ1", "A", jan(1), Some(jan(10))),
        event("EQ1", "B", jan(2), Some(jan(5))),
    ];
    assert_eq!(lanes(&events), (vec![0, 1], 2));
}

#[test]
fn freed_lane_is_reused_first() {
    let events = [
        event("EQ1", "A", jan(1), Some(jan(5))),
        event("EQ1", "B", jan(2), Some(jan(3))),
        event("EQ1", "C", jan(4), Some(jan(6))),
    ];
    assert_eq!(lanes(&events), (vec![0, 1, 1], 2));
}

#[test]
fn bar_starting_before_window_is_clipped() {
    let config = ChartConfig::default();
    let ppd = config.sizing.day_width;
    let events = [event("EQ1", "A", dec(25), Some(jan(3)))];
    let model = scene(&events, &window(jan(1), jan(10)));

    let rect = bar_for(&model, 0).unwrap();
    assert_eq!(rect.min.x, config.sizing.left_margin);
    assert_eq!(rect.width(), 2.0 * ppd);
}

#[test]
fn bar_running_past_window_reaches_the_grid_edge() {
    let config = ChartConfig::default();
    let w = window(jan(1), jan(10));
    let model = scene(&[event("EQ1", "A", jan(5), Some(jan(20)))], &w);

    let rect = bar_for(&model, 0).unwrap();
    assert_eq!(rect.min.x, config.sizing.left_margin + 4.0 * config.sizing.day_width);
    assert_eq!(rect.max.x, config.sizing.left_margin + w.total_width());
}

#[test]
fn open_ended_event_is_one_day_wide() {
    let config = ChartConfig::default();
    let events = [event("EQ1", "A", jan(4), None)];
    let model = scene(&events, &window(jan(1), jan(10)));

    let rect = bar_for(&model, 0).unwrap();
    assert_eq!(rect.min.x, config.sizing.left_margin + 3.0 * config.sizing.day_width);
    assert_eq!(rect.width(), config.sizing.day_width);
}

#[test]
fn empty_input_renders_only_a_placeholder() {
    let model = scene(&[], &window(jan(1), jan(10)));
    assert!(model.is_placeholder());
    assert_eq!(model.bar_count(), 0);
    assert!(matches!(
        &model.primitives[0],
        RenderPrimitive::NoData { text, .. } if text == "No data in the selected time range."
    ));
}

#[test]
fn identical_unsorted_input_gives_identical_scene() {
    let events = vec![
        event("EQ2", "Salt spray", jan(6), Some(jan(9))),
        event("EQ1", "Thermal", jan(3), Some(jan(7))),
        event("EQ1", "Humidity", jan(1), Some(jan(4))),
        event("EQ2", "Thermal", jan(2), None),
        event("EQ1", "Drop", jan(3), Some(jan(3))),
    ];
    let w = window(jan(1), jan(10));
    assert_eq!(scene(&events, &w), scene(&events, &w));
}

#[test]
fn offscreen_event_still_reserves_its_lane() {
    // Only the last event is in view; the first two overlap each other.
    let events = [
        event("EQ1", "A", dec(20), Some(jan(5))),
        event("EQ1", "B", jan(3), Some(jan(4))),
        event("EQ1", "C", jan(12), Some(jan(14))),
    ];
    let config = ChartConfig::default();
    let model = scene(&events, &window(jan(10), jan(20)));

    assert_eq!(model.bar_count(), 1);
    let row_top = config.sizing.header_height;
    let visible = bar_for(&model, 2).unwrap();
    assert_eq!(visible.min.y, row_top + config.sizing.row_padding);

    // Two lanes are still reserved in the row height.
    let bottom = model
        .primitives
        .iter()
        .find_map(|p| match p {
            RenderPrimitive::GridLine { from, style: equip_gantt::render::LineStyle::RowBottom, .. } => Some(from.y),
            _ => None,
        })
        .unwrap();
    assert_eq!(bottom, row_top + 2.0 * config.lane_pitch() + config.sizing.row_padding);
}

#[test]
fn rows_are_sorted_by_resource_id() {
    let events = [
        event("EQ9", "A", jan(2), Some(jan(3))),
        event("EQ1", "B", jan(2), Some(jan(3))),
        event("EQ5", "C", jan(2), Some(jan(3))),
    ];
    let model = scene(&events, &window(jan(1), jan(10)));
    let codes: Vec<&str> = model
        .primitives
        .iter()
        .filter_map(|p| match p {
            RenderPrimitive::Label { text, style: equip_gantt::render::LabelStyle::ResourceCode, .. } => {
                Some(text.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(codes, ["(EQ1)", "(EQ5)", "(EQ9)"]);
}

#[test]
fn hover_and_click_over_a_built_scene() {
    let events = [event("EQ1", "Thermal", jan(2), Some(jan(5)))
        .with_label("R-1")
        .with_meta("factory", "F1")
        .with_meta("request_no", "R-1")];
    let model = scene(&events, &window(jan(1), jan(10)));
    let (id, rect, ..) = model.bars().next().unwrap();

    let mut controller = InteractionController::default();
    assert!(controller.pointer_moved(&model, Some(rect.center())));
    assert_eq!(controller.hovered(), Some(id));
    assert!(!controller.pointer_moved(&model, Some(rect.center())));

    let mut shown = Vec::new();
    let clicked = controller.click_at(&model, rect.center(), &mut |text: &str| shown.push(text.to_string()));
    assert_eq!(clicked, Some(id));
    assert_eq!(shown, ["F1_Thermal_R-1"]);

    assert_eq!(model.event_ref(equip_gantt::render::PrimitiveId(0)), None);
    let clicked_event = clicked.and_then(|id| model.event_ref(id)).unwrap();
    assert_eq!(events[clicked_event.0].summary(), "R-1 on EQ1 (02/01/2024 → 05/01/2024)");

    assert!(controller.pointer_moved(&model, Some(Pos2::new(1.0, 1.0))));
    assert_eq!(controller.hovered(), None);
}

fn day(offset: i64) -> NaiveDate {
    jan(1) + chrono::Duration::days(offset)
}

proptest! {
    #[test]
    fn bars_match_clipped_spans(
        spans in prop::collection::vec((-20i64..40, 0i64..15), 1..20),
    ) {
        let config = ChartConfig::default();
        let ppd = config.sizing.day_width;
        let (from, to) = (jan(1), jan(20));
        let events: Vec<Event> = spans
            .iter()
            .map(|&(s, len)| event("EQ1", "T", day(s), Some(day(s + len))))
            .collect();
        let model = scene(&events, &window(from, to));

        for (index, ev) in events.iter().enumerate() {
            let end = ev.end.unwrap();
            let bar = bar_for(&model, index);
            if end < from || ev.start > to {
                prop_assert!(bar.is_none());
            } else {
                let rect = bar.unwrap();
                let clipped_start = ev.start.max(from);
                let clipped_end = end.min(to + chrono::Duration::days(1));
                let days = (clipped_end - clipped_start).num_days().max(1) as f32;
                prop_assert_eq!(rect.width(), days * ppd);
                prop_assert_eq!(
                    rect.min.x,
                    config.sizing.left_margin + (clipped_start - from).num_days() as f32 * ppd
                );
            }
        }
    }
}
