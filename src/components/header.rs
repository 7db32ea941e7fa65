//! Header Component
//!
//! Brand bar with the reference search input and the live indicator.

use leptos::*;

/// Top navigation header
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="glass-header sticky top-0 z-50 px-8 py-4 flex justify-between items-center">
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 bg-brand-600 rounded-xl flex items-center justify-center shadow-lg shadow-brand-600/20">
                    "🧾"
                </div>
                <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-white to-slate-400">
                    "Contabil IA "
                    <span class="text-brand-400 font-medium">"Fiscal Hub"</span>
                </h1>
            </div>

            <div class="flex items-center gap-4">
                // Search input is not wired to a handler yet
                <input
                    type="text"
                    placeholder="Buscar por referência..."
                    class="bg-white/5 border border-white/10 rounded-full py-2 px-4 text-sm focus:outline-none focus:ring-2 focus:ring-brand-500/50 w-64 transition-all"
                />
                <div class="w-8 h-8 rounded-full bg-slate-800 border border-white/10 flex items-center justify-center overflow-hidden">
                    <div class="w-2 h-2 rounded-full bg-brand-500 animate-pulse" />
                </div>
            </div>
        </header>
    }
}
