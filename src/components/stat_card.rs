//! Stat Card Components
//!
//! Aggregate issuance counters shown at the top of the dashboard.

use leptos::*;

use crate::state::global::GlobalState;

/// Row of the three aggregate counters
#[component]
pub fn StatCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let stats = state.stats;

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard
                label="Autorizadas"
                icon="✅"
                accent="bg-emerald-500/10 text-emerald-500"
                value=Signal::derive(move || stats.get().authorized())
            />
            <StatCard
                label="Erro / Rejeitada"
                icon="⚠️"
                accent="bg-rose-500/10 text-rose-500"
                value=Signal::derive(move || stats.get().errors())
            />
            <StatCard
                label="Processando"
                icon="⏳"
                accent="bg-brand-500/10 text-brand-500"
                value=Signal::derive(move || stats.get().processing())
            />
        </div>
    }
}

/// One aggregate counter card
#[component]
fn StatCard(
    /// Card caption
    label: &'static str,
    icon: &'static str,
    /// Theme classes for the icon tile
    accent: &'static str,
    #[prop(into)] value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="glass p-6 rounded-2xl">
            <div class="flex justify-between items-start mb-4">
                <div class=format!("p-2 rounded-lg text-2xl {}", accent)>{icon}</div>
            </div>
            <p class="text-slate-400 text-sm">{label}</p>
            <p class="text-3xl font-bold">{move || value.get()}</p>
        </div>
    }
}
