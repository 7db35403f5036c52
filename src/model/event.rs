use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single test booked on a piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Equipment the test runs on; events are grouped into rows by this.
    pub resource_id: String,
    pub label: String,
    /// Test type. Drives the bar color and the in-bar text.
    pub category: String,
    pub start: NaiveDate,
    /// `None` for a point event, drawn as a one-day bar at `start`.
    pub end: Option<NaiveDate>,
    /// Free-form request fields (factory, project, requester, ...).
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Event {
    pub fn new(
        resource_id: impl Into<String>,
        category: impl Into<String>,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Self {
        let category = category.into();
        Self {
            resource_id: resource_id.into(),
            label: category.clone(),
            category,
            start,
            end,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// End of the occupied interval. A missing end, or one before `start`,
    /// collapses to `start`.
    pub fn effective_end(&self) -> NaiveDate {
        match self.end {
            Some(end) if end >= self.start => end,
            _ => self.start,
        }
    }

    /// True when the stored end lies before the start.
    pub fn is_degenerate(&self) -> bool {
        matches!(self.end, Some(end) if end < self.start)
    }

    /// One-line identification for a status bar: label, equipment and dates.
    pub fn summary(&self) -> String {
        format!(
            "{} on {} ({} → {})",
            self.label,
            self.resource_id,
            self.start.format("%d/%m/%Y"),
            self.effective_end().format("%d/%m/%Y")
        )
    }

    /// Look up a field by name. `category` and `resource_id` resolve to the
    /// typed fields so info strings can reference them like any column.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "category" => Some(self.category.as_str()),
            "resource_id" | "equip_no" => Some(self.resource_id.as_str()),
            "label" => Some(self.label.as_str()),
            _ => self.metadata.get(name).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn missing_end_is_point_event() {
        let ev = Event::new("EQ1", "Salt spray", d(2024, 1, 5), None);
        assert_eq!(ev.effective_end(), d(2024, 1, 5));
        assert!(!ev.is_degenerate());
    }

    #[test]
    fn end_before_start_collapses() {
        let ev = Event::new("EQ1", "Drop", d(2024, 1, 5), Some(d(2024, 1, 2)));
        assert!(ev.is_degenerate());
        assert_eq!(ev.effective_end(), d(2024, 1, 5));
    }

    #[test]
    fn summary_names_request_and_equipment() {
        let ev = Event::new("EQ3", "Vibration", d(2024, 2, 10), None).with_label("R-0006");
        assert_eq!(ev.summary(), "R-0006 on EQ3 (10/02/2024 → 10/02/2024)");
    }

    #[test]
    fn field_lookup_prefers_typed_fields() {
        let ev = Event::new("EQ7", "Thermal", d(2024, 3, 1), None)
            .with_meta("category", "shadowed")
            .with_meta("project", "P-12");
        assert_eq!(ev.field("category"), Some("Thermal"));
        assert_eq!(ev.field("project"), Some("P-12"));
        assert_eq!(ev.field("equip_no"), Some("EQ7"));
        assert_eq!(ev.field("missing"), None);
    }
}
