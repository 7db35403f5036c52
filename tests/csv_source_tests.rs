mod common;

use common::{jan, SNAPSHOT_CSV};
use equip_gantt::config::ChartConfig;
use equip_gantt::io::{CsvSource, EventQuery, EventSource, ResourceFilter};
use equip_gantt::render::info_text;
use equip_gantt::SourceError;

fn write_snapshot(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("requests.csv");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_snapshot_and_skips_bad_rows() {
    let dir = tempfile::tempdir().unwrap();
    let source = CsvSource::open(&write_snapshot(&dir, SNAPSHOT_CSV)).unwrap();

    assert_eq!(source.len(), 4);
    assert_eq!(source.skipped(), 2);
}

#[test]
fn query_filters_by_window_and_orders_rows() {
    let source = CsvSource::from_csv(SNAPSHOT_CSV).unwrap();
    let events = source
        .query(&EventQuery::new(ResourceFilter::All, jan(1), jan(10)))
        .unwrap();

    let keys: Vec<(&str, u32)> = events
        .iter()
        .map(|e| (e.resource_id.as_str(), chrono::Datelike::day(&e.start)))
        .collect();
    assert_eq!(keys, [("EQ1", 1), ("EQ1", 2), ("EQ2", 3)]);
}

#[test]
fn query_for_one_resource_without_window() {
    let source = CsvSource::from_csv(SNAPSHOT_CSV).unwrap();
    let query = EventQuery {
        resource: ResourceFilter::Only("EQ3".into()),
        window: None,
    };
    let events = source.query(&query).unwrap();

    assert_eq!(events.len(), 1);
    let ev = &events[0];
    assert_eq!(ev.end, None);
    assert_eq!(ev.category, "Vibration");

    let labels = ChartConfig::default().labels;
    assert_eq!(
        info_text(ev, &labels.info_fields, &labels.info_separator),
        "F3_Gamma_Vibration_R-0006"
    );
}

#[test]
fn catalog_names_fall_back_to_ids() {
    let catalog = CsvSource::from_csv(SNAPSHOT_CSV).unwrap().catalog();

    assert_eq!(catalog.ids().collect::<Vec<_>>(), ["EQ1", "EQ2", "EQ3"]);
    assert_eq!(catalog.display_name("EQ1"), "Thermal chamber A");
    assert_eq!(catalog.display_name("EQ3"), "EQ3");
}

#[test]
fn comma_delimited_with_loose_headers() {
    let csv = "equipment,start_date,due,type\nEQ7,05/01/2024,2024-01-09 17:00,Drop\n";
    let source = CsvSource::from_csv(csv).unwrap();
    let events = source
        .query(&EventQuery::new(ResourceFilter::All, jan(1), jan(31)))
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start, jan(5));
    assert_eq!(events[0].end, Some(jan(9)));
    assert_eq!(events[0].label, "Drop");
}

#[test]
fn missing_required_columns_is_an_error() {
    let err = CsvSource::from_csv("Name,When\nx,2024-01-01\n").unwrap_err();
    assert!(matches!(err, SourceError::MissingColumns { found } if found == ["Name", "When"]));
}

#[test]
fn unreadable_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let err = CsvSource::open(&path).unwrap_err();
    assert!(matches!(err, SourceError::Io { path: p, .. } if p == path));
}
