#![allow(dead_code)]

use chrono::NaiveDate;
use equip_gantt::config::ChartConfig;
use equip_gantt::model::{Event, ResourceCatalog, TimeWindow};
use equip_gantt::render::{build_scene, ColorAssigner, RenderModel};

pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

pub fn dec(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, day).unwrap()
}

pub fn event(resource: &str, category: &str, start: NaiveDate, end: Option<NaiveDate>) -> Event {
    Event::new(resource, category, start, end)
}

pub fn window(start: NaiveDate, end: NaiveDate) -> TimeWindow {
    TimeWindow::new(start, end, ChartConfig::default().sizing.day_width).unwrap()
}

/// Build a scene with default config and a fresh color assigner. `today` is
/// put far outside any window so no marker is drawn.
pub fn scene(events: &[Event], window: &TimeWindow) -> RenderModel {
    let config = ChartConfig::default();
    let mut colors = ColorAssigner::new(config.colors.palette.clone());
    build_scene(
        events,
        window,
        &ResourceCatalog::new(),
        &config,
        &mut colors,
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
    )
}

pub const SNAPSHOT_CSV: &str = "\
Equip No;Equip Name;Plan Start;Plan End;Test Type;Request No;Factory;Project;Requester
EQ2;Salt spray chamber;2024-01-03;2024-01-08;Salt spray;R-0002;F1;Alpha;lee
EQ1;Thermal chamber A;2024-01-01;2024-01-05;Thermal cycling;R-0001;F1;Alpha;kim
EQ1;Thermal chamber A;2024-01-02;2024-01-04;Humidity;R-0003;F2;Beta;park
EQ1;Thermal chamber A;not a date;2024-01-04;Humidity;R-0004;F2;Beta;park
;Unknown;2024-01-02;2024-01-04;Drop;R-0005;F2;Beta;park
EQ3;;2024-02-10;;Vibration;R-0006;F3;Gamma;null
";
