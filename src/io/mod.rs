//! Event loading. The chart only consumes [`EventSource`]; the CSV snapshot
//! and in-memory sources are the two implementations shipped here.

pub mod csv_source;
pub mod source;

pub use csv_source::{parse_date, CsvSource};
pub use source::{EventQuery, EventSource, MemorySource, ResourceFilter};
