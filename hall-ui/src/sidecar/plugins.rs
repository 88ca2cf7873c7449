//! Sidecar renderers, one per dedicated payload type plus the raw fallback.
//!
//! Each renderer decodes `payload.data` into its expected shape and shows the
//! raw JSON view when that fails.

pub mod chart;
pub mod citations;
pub mod doc;
pub mod json;
pub mod table;

pub use chart::ChartView;
pub use citations::CitationsView;
pub use doc::DocView;
pub use json::JsonView;
pub use table::TableView;
