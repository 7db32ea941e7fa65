//! Dashboard Page
//!
//! The single monitoring view: aggregate counters, weekly volume chart,
//! recent emissions and the document detail panel.

use leptos::*;

use crate::components::{DetailPanel, DocumentTable, StatCards, VolumeChart};
use crate::state::global::GlobalState;
use crate::state::refresh;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch on mount, then keep polling until the view goes away
    refresh::start_polling(state);

    view! {
        <main class="flex-1 p-8 grid grid-cols-12 gap-8">
            <div class="col-span-12 lg:col-span-8 space-y-8">
                <StatCards />
                <VolumeChart />
                <DocumentTable />
            </div>

            <div class="col-span-12 lg:col-span-4 space-y-8">
                <DetailPanel />
            </div>
        </main>
    }
}
