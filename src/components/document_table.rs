//! Document Table Component
//!
//! Recent emissions list. Clicking a row selects the document and loads
//! its event timeline.

use leptos::*;

use crate::components::loading::Loading;
use crate::components::status_badge::StatusBadge;
use crate::state::global::{DocumentSummary, GlobalState};
use crate::state::refresh;

/// Recent emissions table
#[component]
pub fn DocumentTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let documents = state.documents;
    let loading = state.loading;

    view! {
        <div class="glass rounded-2xl overflow-hidden">
            <div class="px-6 py-4 border-b border-white/5 bg-white/5 flex justify-between items-center">
                <h3 class="font-semibold">"Últimas Emissões"</h3>
                <button class="text-xs text-brand-400 hover:text-brand-300 flex items-center gap-1 transition-colors">
                    "Ver Todas ›"
                </button>
            </div>

            <div class="overflow-x-auto">
                {move || {
                    if loading.get() {
                        return view! { <Loading /> }.into_view();
                    }

                    let documents = documents.get();
                    if documents.is_empty() {
                        return view! {
                            <p class="px-6 py-8 text-sm text-slate-500 text-center">
                                "Nenhuma emissão encontrada."
                            </p>
                        }
                        .into_view();
                    }

                    view! {
                        <table class="w-full text-left">
                            <thead>
                                <tr class="text-slate-500 text-xs uppercase tracking-wider">
                                    <th class="px-6 py-4 font-medium">"Doc"</th>
                                    <th class="px-6 py-4 font-medium">"Referência"</th>
                                    <th class="px-6 py-4 font-medium">"Status"</th>
                                    <th class="px-6 py-4 font-medium">"Data"</th>
                                    <th class="px-6 py-4"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-white/5">
                                {documents
                                    .into_iter()
                                    .map(|document| view! { <DocumentRow document=document /> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }}
            </div>
        </div>
    }
}

/// Single emission row
#[component]
fn DocumentRow(document: DocumentSummary) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let selected = state.selected;

    let row_id = document.id;
    let is_selected = create_memo(move |_| selected.get().map(|doc| doc.id) == Some(row_id));

    let document_for_click = document.clone();
    let on_click = move |_| {
        refresh::select_document(state.clone(), document_for_click.clone());
    };

    view! {
        <tr
            on:click=on_click
            class=move || {
                let base = "hover:bg-brand-500/5 cursor-pointer transition-colors";
                if is_selected.get() {
                    format!("{} bg-brand-500/10", base)
                } else {
                    base.to_string()
                }
            }
        >
            <td class="px-6 py-4">
                <div class="w-8 h-8 rounded-lg bg-slate-800 flex items-center justify-center text-slate-400 border border-white/5">
                    {document.kind().icon()}
                </div>
            </td>
            <td class="px-6 py-4 text-sm font-medium">{document.reference.clone()}</td>
            <td class="px-6 py-4">
                <StatusBadge status=document.status.clone() />
            </td>
            <td class="px-6 py-4 text-xs text-slate-500">{document.created_at_display()}</td>
            <td class="px-6 py-4 text-right text-slate-700">"›"</td>
        </tr>
    }
}
