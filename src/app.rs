//! App Root Component
//!
//! Application shell with the global state provider.

use leptos::*;

use crate::components::Header;
use crate::pages::Dashboard;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <Dashboard />
            <Footer />
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="p-8 text-center text-slate-600 text-sm">
            "© 2025 Contabil IA - Sistema de Gestão Fiscal v2.0.0"
        </footer>
    }
}
