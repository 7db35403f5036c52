use egui::{Align2, Id, Pos2, Rounding, Sense, Stroke, Ui, Vec2};

use crate::ui::theme;
use equip_gantt::config::ChartConfig;
use equip_gantt::interaction::InteractionController;
use equip_gantt::model::TimeWindow;
use equip_gantt::render::{EventRef, RenderModel, RenderPrimitive};

/// What happened in the chart this frame.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    /// The window's scale changed and the scene must be rebuilt.
    pub window_changed: bool,
    /// Info string of a bar clicked this frame.
    pub clicked_info: Option<String>,
    /// Event behind the clicked bar.
    pub clicked_event: Option<EventRef>,
}

/// Paint a built scene and route pointer input through `interaction`.
pub fn show_gantt_chart(
    model: &RenderModel,
    config: &ChartConfig,
    window: &mut TimeWindow,
    interaction: &mut InteractionController,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut result = ChartInteraction::default();
    let available = ui.available_size();

    // Ctrl + wheel zooms the day scale
    let (scroll_delta, zoom_delta) = ui.input(|i| (i.smooth_scroll_delta, i.zoom_delta()));
    if ui.rect_contains_pointer(ui.max_rect()) && ui.input(|i| i.modifiers.ctrl) {
        if scroll_delta.y > 0.0 || zoom_delta > 1.0 {
            window.zoom_in();
            result.window_changed = true;
        } else if scroll_delta.y < 0.0 || zoom_delta < 1.0 {
            window.zoom_out();
            result.window_changed = true;
        }
    }

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let size = Vec2::new(model.size.x.max(available.x), model.size.y.max(available.y));
            let (response, painter) = ui.allocate_painter(size, Sense::click());
            let offset = response.rect.min.to_vec2();
            let to_scene = |p: Pos2| p - offset;

            if interaction.pointer_moved(model, response.hover_pos().map(to_scene)) {
                ui.ctx().request_repaint();
            }

            painter.rect_filled(response.rect, 0.0, theme::BG_CANVAS);
            let colors = &config.colors;

            for (id, primitive) in model.iter() {
                match primitive {
                    RenderPrimitive::Bar { rect, color, .. } => {
                        painter.rect_filled(
                            rect.translate(offset),
                            Rounding::ZERO,
                            interaction.fill_for(id, *color),
                        );
                    }
                    RenderPrimitive::Label { pos, text, style } => {
                        painter.text(
                            *pos + offset,
                            Align2::LEFT_TOP,
                            text,
                            theme::label_font(*style),
                            theme::label_color(*style, colors),
                        );
                    }
                    RenderPrimitive::GridLine { from, to, style } => {
                        painter.line_segment([*from + offset, *to + offset], theme::line_stroke(*style, colors));
                    }
                    RenderPrimitive::TodayMarker { x, top, bottom } => {
                        painter.line_segment(
                            [Pos2::new(*x, *top) + offset, Pos2::new(*x, *bottom) + offset],
                            Stroke::new(theme::TODAY_STROKE, colors.today_marker),
                        );
                    }
                    RenderPrimitive::NoData { pos, text } => {
                        painter.text(
                            *pos + offset + Vec2::splat(8.0),
                            Align2::LEFT_TOP,
                            text,
                            theme::font_placeholder(),
                            colors.placeholder_text,
                        );
                    }
                }
            }

            // Tooltip on hover
            if let Some(RenderPrimitive::Bar { tooltip, .. }) = interaction.hovered().and_then(|id| model.get(id)) {
                if !tooltip.is_empty() {
                    egui::show_tooltip_at_pointer(ui.ctx(), ui.layer_id(), Id::new("bar-tip"), |ui| {
                        ui.label(tooltip.as_str());
                    });
                }
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let mut sink = |text: &str| result.clicked_info = Some(text.to_string());
                    let clicked = interaction.click_at(model, to_scene(pos), &mut sink);
                    result.clicked_event = clicked.and_then(|id| model.event_ref(id));
                }
            }
        });

    result
}
