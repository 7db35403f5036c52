use chrono::NaiveDate;

use crate::error::SourceError;
use crate::model::{Event, ResourceCatalog};

/// Which equipment a query covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResourceFilter {
    #[default]
    All,
    Only(String),
}

impl ResourceFilter {
    pub fn matches(&self, resource_id: &str) -> bool {
        match self {
            ResourceFilter::All => true,
            ResourceFilter::Only(id) => id == resource_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub resource: ResourceFilter,
    /// Inclusive date range; `None` returns every event of the resource.
    pub window: Option<(NaiveDate, NaiveDate)>,
}

impl EventQuery {
    pub fn new(resource: ResourceFilter, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            resource,
            window: Some((from, to)),
        }
    }

    /// True when the event belongs to the queried equipment and its start or
    /// end falls inside the window.
    pub fn matches(&self, event: &Event) -> bool {
        if event.resource_id.trim().is_empty() || !self.resource.matches(&event.resource_id) {
            return false;
        }
        match self.window {
            None => true,
            Some((from, to)) => {
                let inside = |d: NaiveDate| d >= from && d <= to;
                inside(event.start) || event.end.is_some_and(inside)
            }
        }
    }
}

/// Where the chart gets its events from.
///
/// Implementations only hand out events with a valid start date; rows that
/// cannot be parsed are dropped before they reach the chart.
pub trait EventSource {
    fn query(&self, query: &EventQuery) -> Result<Vec<Event>, SourceError>;

    /// Equipment names for row labels and the resource picker.
    fn catalog(&self) -> ResourceCatalog;
}

/// Events held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    events: Vec<Event>,
    catalog: ResourceCatalog,
}

impl MemorySource {
    pub fn new(events: Vec<Event>, catalog: ResourceCatalog) -> Self {
        Self { events, catalog }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for MemorySource {
    fn query(&self, query: &EventQuery) -> Result<Vec<Event>, SourceError> {
        let mut found: Vec<Event> = self.events.iter().filter(|e| query.matches(e)).cloned().collect();
        found.sort_by(|a, b| a.resource_id.cmp(&b.resource_id).then(a.start.cmp(&b.start)));
        Ok(found)
    }

    fn catalog(&self) -> ResourceCatalog {
        let mut catalog = self.catalog.clone();
        for event in &self.events {
            if !event.resource_id.trim().is_empty() && !catalog.ids().any(|id| id == event.resource_id) {
                catalog.insert(event.resource_id.clone(), String::new());
            }
        }
        catalog
    }
}
