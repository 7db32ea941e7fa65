//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod detail_panel;
pub mod document_table;
pub mod header;
pub mod loading;
pub mod stat_card;
pub mod status_badge;

pub use chart::VolumeChart;
pub use detail_panel::DetailPanel;
pub use document_table::DocumentTable;
pub use header::Header;
pub use loading::Loading;
pub use stat_card::StatCards;
pub use status_badge::StatusBadge;
