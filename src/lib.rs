//! Equipment-utilization timeline for reliability test scheduling.
//!
//! Tests booked on shared equipment are grouped into one row per machine,
//! packed into the fewest parallel lanes, mapped onto a date window and
//! emitted as a flat list of drawing primitives. The desktop host in
//! `main.rs` paints those primitives with egui and routes pointer input back
//! through [`interaction::InteractionController`].
//!
//! ```no_run
//! use chrono::{Local, NaiveDate};
//! use equip_gantt::config::ChartConfig;
//! use equip_gantt::io::{EventQuery, EventSource, MemorySource, ResourceFilter};
//! use equip_gantt::model::{Event, TimeWindow};
//! use equip_gantt::render::{build_scene, ColorAssigner};
//!
//! let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let source = MemorySource::new(
//!     vec![Event::new("EQ1", "Thermal cycling", jan(2), Some(jan(6)))],
//!     Default::default(),
//! );
//! let config = ChartConfig::default();
//! let mut colors = ColorAssigner::new(config.colors.palette.clone());
//! let events = source.query(&EventQuery::new(ResourceFilter::All, jan(1), jan(14))).unwrap();
//! let window = TimeWindow::new(jan(1), jan(14), config.sizing.day_width).unwrap();
//! let scene = build_scene(&events, &window, &source.catalog(), &config, &mut colors, Local::now().date_naive());
//! assert_eq!(scene.bar_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod interaction;
pub mod io;
pub mod layout;
pub mod model;
pub mod render;

pub use error::{ConfigError, SourceError, WindowError};
