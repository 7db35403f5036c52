use chrono::NaiveDate;
use egui::{Pos2, Vec2};
use tracing::{debug, warn};

use super::colors::ColorAssigner;
use super::info::{ellipsize, info_text};
use super::primitives::{EventRef, LabelStyle, LineStyle, RenderModel, RenderPrimitive};
use crate::config::ChartConfig;
use crate::layout::{layout_rows, CoordinateMapper, ResourceRow};
use crate::model::{Event, ResourceCatalog, TimeWindow};

/// Lay out `events` and turn them into drawing primitives.
///
/// Primitives come out in painting order: date headers, then per row the
/// resource labels, the top separator, the bars with their text and the
/// bottom separator, and finally the today marker. Identical input always
/// yields an identical list.
pub fn build_scene(
    events: &[Event],
    window: &TimeWindow,
    catalog: &ResourceCatalog,
    config: &ChartConfig,
    colors: &mut ColorAssigner,
    today: NaiveDate,
) -> RenderModel {
    let (window, capped) = window.capped(config.max_day_span);
    if capped {
        warn!(
            max_days = config.max_day_span,
            end = %window.end(),
            "window too wide; rendering only the first days"
        );
    }

    let sizing = &config.sizing;
    let scene_width = sizing.left_margin + window.total_width() + sizing.scene_margin;

    if events.is_empty() {
        debug!("no events to chart");
        return RenderModel {
            primitives: vec![RenderPrimitive::NoData {
                pos: Pos2::ZERO,
                text: config.labels.no_data_text.clone(),
            }],
            size: Vec2::new(scene_width, sizing.header_height + sizing.scene_margin),
            window,
        };
    }

    let mapper = CoordinateMapper::new(&window, config);
    let layout = layout_rows(events, catalog, config);
    let mut out = Vec::new();

    push_date_headers(&mut out, &mapper, config, today);
    for row in &layout.rows {
        push_row(&mut out, row, &mapper, config, colors, scene_width);
    }
    if window.contains(today) {
        out.push(RenderPrimitive::TodayMarker {
            x: mapper.date_x(today),
            top: sizing.header_height,
            bottom: layout.bottom,
        });
    }

    let model = RenderModel {
        primitives: out,
        size: Vec2::new(scene_width, layout.bottom + sizing.scene_margin),
        window,
    };
    debug!(
        rows = layout.rows.len(),
        bars = model.bar_count(),
        primitives = model.primitives.len(),
        "built scene"
    );
    model
}

fn push_date_headers(
    out: &mut Vec<RenderPrimitive>,
    mapper: &CoordinateMapper<'_>,
    config: &ChartConfig,
    today: NaiveDate,
) {
    let window = mapper.window();
    let every_day = window.day_count() < config.labels.dense_header_days;
    for (offset, date) in window.days().enumerate() {
        if !every_day && offset % 2 != 0 {
            continue;
        }
        let style = if date == today {
            LabelStyle::Today
        } else {
            LabelStyle::DateHeader
        };
        out.push(RenderPrimitive::Label {
            pos: Pos2::new(mapper.date_x(date) - 5.0, 0.0),
            text: date.format("%d/%m").to_string(),
            style,
        });
    }
}

fn push_row(
    out: &mut Vec<RenderPrimitive>,
    row: &ResourceRow<'_>,
    mapper: &CoordinateMapper<'_>,
    config: &ChartConfig,
    colors: &mut ColorAssigner,
    scene_width: f32,
) {
    let mid = row.top + row.height / 2.0;
    out.push(RenderPrimitive::Label {
        pos: Pos2::new(5.0, mid - 15.0),
        text: ellipsize(&row.label, config.labels.resource_name_max_chars),
        style: LabelStyle::ResourceName,
    });
    out.push(RenderPrimitive::Label {
        pos: Pos2::new(5.0, mid),
        text: format!("({})", row.resource_id),
        style: LabelStyle::ResourceCode,
    });
    out.push(RenderPrimitive::GridLine {
        from: Pos2::new(0.0, row.top),
        to: Pos2::new(scene_width, row.top),
        style: LineStyle::RowTop,
    });

    let labels = &config.labels;
    for placed in &row.events {
        let event = placed.event;
        let Some(rect) = mapper.bar_rect(event.start, event.end, placed.lane, row.top) else {
            continue;
        };
        out.push(RenderPrimitive::Bar {
            rect,
            color: colors.color_for(&event.category),
            tooltip: info_text(event, &labels.info_fields, &labels.info_separator),
            event: EventRef(placed.index),
        });

        if rect.width() > labels.min_bar_width {
            let max_chars = (rect.width() / labels.px_per_char) as usize;
            let text: String = event.category.chars().take(max_chars).collect();
            if !text.is_empty() {
                out.push(RenderPrimitive::Label {
                    pos: Pos2::new(rect.min.x, rect.min.y - 2.0),
                    text,
                    style: LabelStyle::BarText,
                });
            }
        }
    }

    out.push(RenderPrimitive::GridLine {
        from: Pos2::new(0.0, row.bottom()),
        to: Pos2::new(scene_width, row.bottom()),
        style: LineStyle::RowBottom,
    });
}
