use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use equip_gantt::config::ChartColors;
use equip_gantt::render::{LabelStyle, LineStyle};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_CANVAS: Color32 = Color32::WHITE;
pub const BG_PANEL: Color32 = Color32::from_rgb(245, 247, 250);
pub const BG_TOOLBAR: Color32 = Color32::from_rgb(227, 242, 253);
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(224, 224, 224);
pub const ACCENT: Color32 = Color32::from_rgb(21, 101, 192);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(33, 33, 33);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(97, 97, 97);

pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const TODAY_STROKE: f32 = 2.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.5)
}

pub fn font_placeholder() -> FontId {
    FontId::proportional(14.0)
}

pub fn label_font(style: LabelStyle) -> FontId {
    match style {
        LabelStyle::DateHeader | LabelStyle::Today => FontId::proportional(10.5),
        LabelStyle::ResourceName => FontId::proportional(12.0),
        LabelStyle::ResourceCode => FontId::proportional(10.5),
        LabelStyle::BarText => FontId::proportional(10.5),
    }
}

pub fn label_color(style: LabelStyle, colors: &ChartColors) -> Color32 {
    match style {
        LabelStyle::DateHeader => colors.header_text,
        LabelStyle::Today => colors.today_text,
        LabelStyle::ResourceName => colors.resource_name,
        LabelStyle::ResourceCode => colors.resource_code,
        LabelStyle::BarText => colors.bar_text,
    }
}

pub fn line_stroke(style: LineStyle, colors: &ChartColors) -> Stroke {
    match style {
        LineStyle::RowTop => Stroke::new(1.0, colors.row_top_line),
        LineStyle::RowBottom => Stroke::new(1.0, colors.row_bottom_line),
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = Color32::WHITE;

    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(207, 216, 220));
    visuals.widgets.inactive.rounding = Rounding::same(6.0);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Color32::from_rgb(144, 202, 249));
    visuals.widgets.hovered.rounding = Rounding::same(6.0);
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, ACCENT);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    ctx.set_style(style);
}
