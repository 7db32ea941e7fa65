//! State Management
//!
//! Global view state and the fetch orchestration that feeds it.

pub mod global;
pub mod refresh;

pub use global::{provide_global_state, DocumentKind, DocumentSummary, GlobalState, StatsSummary, TimelineEvent, VolumePoint};
pub use refresh::{RequestSequencer, RECENT_LIMIT, REFRESH_INTERVAL_MS};
