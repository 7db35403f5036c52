use chrono::{Duration, NaiveDate};
use egui::{Pos2, Rect, Vec2};

use crate::config::ChartConfig;
use crate::model::TimeWindow;

/// Maps dates and lanes onto scene pixels for one window.
///
/// Lanes are assigned on true event intervals elsewhere; this type only
/// clips those intervals to the window when turning them into rectangles.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper<'a> {
    window: &'a TimeWindow,
    config: &'a ChartConfig,
}

impl<'a> CoordinateMapper<'a> {
    pub fn new(window: &'a TimeWindow, config: &'a ChartConfig) -> Self {
        Self { window, config }
    }

    pub fn window(&self) -> &TimeWindow {
        self.window
    }

    /// X coordinate of the left edge of `date`'s day column.
    pub fn date_x(&self, date: NaiveDate) -> f32 {
        self.config.sizing.left_margin + self.window.date_to_x(date)
    }

    /// Top edge of a bar in `lane` of the row starting at `row_top`.
    pub fn lane_y(&self, row_top: f32, lane: usize) -> f32 {
        row_top + self.config.sizing.row_padding + lane as f32 * self.config.lane_pitch()
    }

    /// Clip `[start, end)` to the window. `None` when nothing is visible.
    /// A missing end, or one before `start`, is treated as `start`.
    ///
    /// The window's last day is a full column, so the clipped end may be the
    /// day after `window.end()`, the right edge of the day grid.
    pub fn clamp(&self, start: NaiveDate, end: Option<NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
        let end = end.filter(|e| *e >= start).unwrap_or(start);
        if start > self.window.end() || end < self.window.start() {
            return None;
        }
        let grid_end = self.window.end() + Duration::days(1);
        Some((start.max(self.window.start()), end.min(grid_end)))
    }

    /// Pixel rectangle of a bar, or `None` when the interval lies entirely
    /// outside the window. Bars are at least one day wide.
    pub fn bar_rect(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
        lane: usize,
        row_top: f32,
    ) -> Option<Rect> {
        let (from, to) = self.clamp(start, end)?;
        let days = (to - from).num_days().max(1) as f32;
        let width = days * self.window.pixels_per_day();
        let height = self.config.sizing.bar_height;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Rect::from_min_size(
            Pos2::new(self.date_x(from), self.lane_y(row_top, lane)),
            Vec2::new(width, height),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn window() -> TimeWindow {
        TimeWindow::new(d(1, 1), d(1, 10), 20.0).unwrap()
    }

    #[test]
    fn inside_event_keeps_its_span() {
        let w = window();
        let config = ChartConfig::default();
        let mapper = CoordinateMapper::new(&w, &config);
        let rect = mapper.bar_rect(d(1, 3), Some(d(1, 6)), 0, 30.0).unwrap();
        assert_eq!(rect.min.x, 200.0 + 2.0 * 20.0);
        assert_eq!(rect.width(), 3.0 * 20.0);
        assert_eq!(rect.min.y, 30.0 + 15.0);
        assert_eq!(rect.height(), 20.0);
    }

    #[test]
    fn event_starting_before_window_is_clipped() {
        let w = window();
        let config = ChartConfig::default();
        let mapper = CoordinateMapper::new(&w, &config);
        let rect = mapper
            .bar_rect(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(), Some(d(1, 3)), 0, 0.0)
            .unwrap();
        assert_eq!(rect.min.x, 200.0);
        assert_eq!(rect.width(), 2.0 * 20.0);
    }

    #[test]
    fn point_event_is_one_day_wide() {
        let w = window();
        let config = ChartConfig::default();
        let mapper = CoordinateMapper::new(&w, &config);
        let rect = mapper.bar_rect(d(1, 5), None, 0, 0.0).unwrap();
        assert_eq!(rect.min.x, 200.0 + 4.0 * 20.0);
        assert_eq!(rect.width(), 20.0);
    }

    #[test]
    fn event_past_window_end_fills_the_last_column() {
        let w = window();
        let config = ChartConfig::default();
        let mapper = CoordinateMapper::new(&w, &config);
        let rect = mapper.bar_rect(d(1, 5), Some(d(1, 20)), 0, 0.0).unwrap();
        assert_eq!(rect.min.x, 200.0 + 4.0 * 20.0);
        assert_eq!(rect.max.x, 200.0 + w.total_width());
    }

    #[test]
    fn event_on_last_day_is_drawn() {
        let w = window();
        let config = ChartConfig::default();
        let mapper = CoordinateMapper::new(&w, &config);
        let rect = mapper.bar_rect(d(1, 10), None, 0, 0.0).unwrap();
        assert_eq!(rect.min.x, 200.0 + 9.0 * 20.0);
        assert_eq!(rect.width(), 20.0);
    }

    #[test]
    fn outside_events_are_not_rendered() {
        let w = window();
        let config = ChartConfig::default();
        let mapper = CoordinateMapper::new(&w, &config);
        assert!(mapper.bar_rect(d(1, 11), Some(d(1, 20)), 0, 0.0).is_none());
        let december = |day| NaiveDate::from_ymd_opt(2023, 12, day).unwrap();
        assert!(mapper.bar_rect(december(1), Some(december(31)), 0, 0.0).is_none());
    }

    #[test]
    fn lanes_stack_downwards() {
        let w = window();
        let config = ChartConfig::default();
        let mapper = CoordinateMapper::new(&w, &config);
        assert_eq!(mapper.lane_y(100.0, 0), 115.0);
        assert_eq!(mapper.lane_y(100.0, 2), 115.0 + 2.0 * 25.0);
    }
}
