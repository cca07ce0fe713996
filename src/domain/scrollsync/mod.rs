pub mod model;
pub mod service;

pub use model::{IntersectionEvent, ScrollBehavior, ScrollCommand, SectionBounds, ViewportBand};
pub use service::ScrollSync;
