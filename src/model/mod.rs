pub mod event;
pub mod resource;
pub mod timeline;

pub use event::Event;
pub use resource::ResourceCatalog;
pub use timeline::TimeWindow;
