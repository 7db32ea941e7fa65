//! Fetch Orchestration
//!
//! Polls the dashboard endpoints into [`GlobalState`] and guards against
//! out-of-order responses. Fetch failures are logged to the console and the
//! view keeps the last good data.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;

use super::global::{DocumentSummary, GlobalState};
use crate::api;

/// Overview refresh cadence while the dashboard is mounted
pub const REFRESH_INTERVAL_MS: u32 = 10_000;

/// Size of the recent-emissions window requested from the backend
pub const RECENT_LIMIT: usize = 10;

/// Monotonic request generations for one kind of fetch.
///
/// Requests may overlap freely; a response is applied only while its ticket
/// is still the newest one issued, so completion order can never roll the
/// view back to stale data.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer(Rc<Cell<u64>>);

impl RequestSequencer {
    /// Issue a ticket for a new request, superseding all earlier ones
    pub fn begin(&self) -> u64 {
        let ticket = self.0.get() + 1;
        self.0.set(ticket);
        ticket
    }

    /// Whether a response holding this ticket may still be applied
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }

    /// Supersede every outstanding ticket without starting a new request
    pub fn invalidate(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Refresh the aggregate stats and the recent-emissions list.
///
/// The two requests run concurrently and are applied together: if either
/// fails, the failure is logged and the view keeps the last good snapshot.
/// Responses from a superseded refresh are dropped unapplied.
pub fn refresh_overview(state: GlobalState) {
    let ticket = state.overview_requests.begin();
    spawn_local(async move {
        let (stats, documents) =
            futures::join!(api::fetch_stats(), api::fetch_documents(RECENT_LIMIT));

        if !state.overview_requests.is_current(ticket) {
            return;
        }

        match (stats, documents) {
            (Ok(stats), Ok(documents)) => {
                state.stats.set(stats);
                state.documents.set(documents);
                state.loading.set(false);
            }
            (Err(e), _) | (_, Err(e)) => {
                web_sys::console::error_1(
                    &format!("Failed to refresh dashboard: {}", e).into(),
                );
            }
        }
    });
}

/// Load the event timeline for one document reference
pub fn load_timeline(state: GlobalState, reference: String) {
    let ticket = state.timeline_requests.begin();
    spawn_local(async move {
        match api::fetch_timeline(&reference).await {
            Ok(events) => {
                if state.timeline_requests.is_current(ticket) {
                    state.timeline.set(events);
                }
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to fetch timeline for {}: {}", reference, e).into(),
                );
            }
        }
    });
}

/// Store the selection and fetch its timeline.
///
/// The selection is a detached snapshot: later list refreshes neither clear
/// nor re-resolve it. The previous timeline stays visible until the
/// replacement response lands.
pub fn select_document(state: GlobalState, document: DocumentSummary) {
    let reference = document.reference.clone();
    state.selected.set(Some(document));
    load_timeline(state, reference);
}

/// Start the periodic overview refresh for the lifetime of the current view.
///
/// Runs one refresh on mount, then one per [`REFRESH_INTERVAL_MS`]. Dropping
/// the interval handle on cleanup cancels the schedule; both sequencers are
/// invalidated there so an in-flight response resolving after teardown is
/// discarded instead of touching disposed signals.
pub fn start_polling(state: GlobalState) {
    let state_for_mount = state.clone();
    create_effect(move |_| {
        refresh_overview(state_for_mount.clone());
    });

    let state_for_tick = state.clone();
    let poll = Interval::new(REFRESH_INTERVAL_MS, move || {
        refresh_overview(state_for_tick.clone());
    });

    on_cleanup(move || {
        drop(poll);
        state.overview_requests.invalidate();
        state.timeline_requests.invalidate();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequencer_latest_ticket_wins() {
        let seq = RequestSequencer::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_sequencer_invalidate_discards_in_flight() {
        let seq = RequestSequencer::default();
        let ticket = seq.begin();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn test_sequencer_clones_share_generations() {
        let seq = RequestSequencer::default();
        let handle = seq.clone();
        let ticket = seq.begin();
        handle.invalidate();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn test_sequencer_kinds_are_independent() {
        let overview = RequestSequencer::default();
        let timeline = RequestSequencer::default();
        let ticket = overview.begin();
        timeline.begin();
        timeline.invalidate();
        assert!(overview.is_current(ticket));
    }
}
