use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use super::source::{EventQuery, EventSource, MemorySource};
use crate::error::SourceError;
use crate::model::{Event, ResourceCatalog};

/// Columns with a fixed meaning. Anything else is kept as event metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Resource,
    ResourceName,
    Start,
    End,
    Category,
    Label,
}

/// Try parsing a date, or a date-time truncated to its date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs && semicolons > 0 {
        b';'
    } else if tabs > commas {
        b'\t'
    } else {
        b','
    }
}

fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Metadata key for a free column: `"Request No"` becomes `request_no`.
fn meta_key(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-'], "_")
}

fn header_to_col(normalized: &str) -> Option<Column> {
    match normalized {
        "equipno" | "equipment" | "equip" | "resource" | "resourceid" | "controlno" | "equipmentno" => {
            Some(Column::Resource)
        }
        "equipname" | "equipmentname" | "resourcename" => Some(Column::ResourceName),
        "planstart" | "start" | "startdate" | "begin" | "from" => Some(Column::Start),
        "planend" | "end" | "enddate" | "finish" | "to" | "due" => Some(Column::End),
        "category" | "testtype" | "type" | "test" => Some(Column::Category),
        "requestno" | "request" | "label" | "name" | "task" => Some(Column::Label),
        _ => None,
    }
}

/// Event snapshot loaded from a CSV export of the request table.
///
/// Delimiter (`;`, `,` or tab) is auto-detected and headers are matched
/// loosely (`Equip No`, `equip_no` and `equipment` all name the resource).
/// Rows without equipment or with an unreadable start date are skipped.
#[derive(Debug, Clone, Default)]
pub struct CsvSource {
    inner: MemorySource,
    skipped: usize,
}

impl CsvSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = Self::from_csv(&content)?;
        info!(
            path = %path.display(),
            events = loaded.inner.len(),
            skipped = loaded.skipped,
            "loaded event snapshot"
        );
        Ok(loaded)
    }

    pub fn from_csv(content: &str) -> Result<Self, SourceError> {
        let content = content.trim_start_matches('\u{feff}');
        let first_line = content.lines().next().unwrap_or("");
        let delimiter = detect_delimiter(first_line);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        let columns: Vec<Option<Column>> = headers
            .iter()
            .map(|h| header_to_col(&normalize_header(h)))
            .collect();

        let has = |c: Column| columns.contains(&Some(c));
        if !has(Column::Resource) || !has(Column::Start) {
            return Err(SourceError::MissingColumns {
                found: headers.iter().map(String::from).collect(),
            });
        }

        let mut events = Vec::new();
        let mut catalog = ResourceCatalog::new();
        let mut skipped = 0usize;

        for (i, result) in reader.records().enumerate() {
            let line = i + 2;
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    warn!(line, error = %e, "skipping unreadable CSV row");
                    skipped += 1;
                    continue;
                }
            };

            let mut resource = None;
            let mut resource_name = None;
            let mut start = None;
            let mut end = None;
            let mut category = None;
            let mut label = None;
            let mut metadata = BTreeMap::new();

            for (field, (header, column)) in record.iter().zip(headers.iter().zip(&columns)) {
                match column {
                    Some(Column::Resource) => resource = Some(field),
                    Some(Column::ResourceName) => resource_name = Some(field),
                    Some(Column::Start) => start = Some(field),
                    Some(Column::End) => end = Some(field),
                    Some(Column::Category) => category = Some(field),
                    Some(Column::Label) => label = Some(field),
                    None => {}
                }
                if !matches!(column, Some(Column::Resource | Column::Start | Column::End | Column::Category)) {
                    metadata.insert(meta_key(header), field.to_string());
                }
            }

            let resource = match resource {
                Some(r) if !r.is_empty() => r,
                _ => {
                    skipped += 1;
                    continue;
                }
            };
            let Some(start_date) = start.and_then(parse_date) else {
                warn!(line, start = start.unwrap_or(""), "skipping row with invalid start date");
                skipped += 1;
                continue;
            };

            let category = category.unwrap_or_default().to_string();
            let label = match label {
                Some(l) if !l.is_empty() => l.to_string(),
                _ => category.clone(),
            };

            match resource_name {
                Some(name) if !name.is_empty() => catalog.insert(resource, name),
                _ if !catalog.ids().any(|id| id == resource) => catalog.insert(resource, ""),
                _ => {}
            }

            events.push(Event {
                resource_id: resource.to_string(),
                label,
                category,
                start: start_date,
                end: end.and_then(parse_date),
                metadata,
            });
        }

        Ok(Self {
            inner: MemorySource::new(events, catalog),
            skipped,
        })
    }

    /// Rows dropped while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl EventSource for CsvSource {
    fn query(&self, query: &EventQuery) -> Result<Vec<Event>, SourceError> {
        self.inner.query(query)
    }

    fn catalog(&self) -> ResourceCatalog {
        self.inner.catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates_and_date_times() {
        let jan5 = NaiveDate::from_ymd_opt(2024, 1, 5);
        assert_eq!(parse_date("2024-01-05"), jan5);
        assert_eq!(parse_date("05/01/2024"), jan5);
        assert_eq!(parse_date("2024-01-05 08:30"), jan5);
        assert_eq!(parse_date("2024-01-05T08:30:00"), jan5);
        assert_eq!(parse_date("2024-01-05 08:30:00.000"), jan5);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn detects_delimiters() {
        assert_eq!(detect_delimiter("a;b;c"), b';');
        assert_eq!(detect_delimiter("a,b,c"), b',');
        assert_eq!(detect_delimiter("a\tb\tc"), b'\t');
        assert_eq!(detect_delimiter("single"), b',');
    }

    #[test]
    fn headers_map_loosely() {
        assert_eq!(header_to_col(&normalize_header("Equip No")), Some(Column::Resource));
        assert_eq!(header_to_col(&normalize_header("plan_start")), Some(Column::Start));
        assert_eq!(header_to_col(&normalize_header("Test Type")), Some(Column::Category));
        assert_eq!(header_to_col(&normalize_header("factory")), None);
        assert_eq!(meta_key("Request No"), "request_no");
    }
}
