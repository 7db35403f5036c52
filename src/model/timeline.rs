use chrono::{Duration, NaiveDate};

use crate::error::WindowError;

const MIN_PIXELS_PER_DAY: f32 = 2.0;
const MAX_PIXELS_PER_DAY: f32 = 80.0;
const ZOOM_STEP: f32 = 1.2;

/// The visible date range of the chart and its horizontal scale.
///
/// Both ends are inclusive: a window from Jan 1 to Jan 10 shows ten day
/// columns. The invariants `end >= start` and `pixels_per_day > 0` are
/// checked at construction and kept by every mutator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start: NaiveDate,
    end: NaiveDate,
    pixels_per_day: f32,
}

impl TimeWindow {
    pub fn new(start: NaiveDate, end: NaiveDate, pixels_per_day: f32) -> Result<Self, WindowError> {
        if end < start {
            return Err(WindowError::EndBeforeStart { start, end });
        }
        if !pixels_per_day.is_finite() || pixels_per_day <= 0.0 {
            return Err(WindowError::InvalidScale(pixels_per_day));
        }
        Ok(Self {
            start,
            end,
            pixels_per_day,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn pixels_per_day(&self) -> f32 {
        self.pixels_per_day
    }

    /// Number of day columns, counting both ends.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterate every day column from `start` to `end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.day_count() as usize)
    }

    /// Convert a date to an x-pixel offset from the window's left edge.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        let days = (date - self.start).num_days() as f32;
        days * self.pixels_per_day
    }

    /// Total width in pixels of all day columns.
    pub fn total_width(&self) -> f32 {
        self.day_count() as f32 * self.pixels_per_day
    }

    /// Shorten the window to at most `max_days` columns. Returns the capped
    /// window and whether anything was cut.
    pub fn capped(&self, max_days: u32) -> (Self, bool) {
        let max_days = i64::from(max_days.max(1));
        if self.day_count() <= max_days {
            return (*self, false);
        }
        let capped = Self {
            end: self.start + Duration::days(max_days - 1),
            ..*self
        };
        (capped, true)
    }

    /// Zoom in (increase pixels per day).
    pub fn zoom_in(&mut self) {
        self.pixels_per_day = (self.pixels_per_day * ZOOM_STEP).min(MAX_PIXELS_PER_DAY);
    }

    /// Zoom out (decrease pixels per day).
    pub fn zoom_out(&mut self) {
        self.pixels_per_day = (self.pixels_per_day / ZOOM_STEP).max(MIN_PIXELS_PER_DAY);
    }

    /// Shift the window by a number of days, keeping its length.
    pub fn scroll_days(&mut self, days: i64) {
        self.start += Duration::days(days);
        self.end += Duration::days(days);
    }
}
