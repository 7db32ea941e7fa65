//! Detail Panel Component
//!
//! Summary and event timeline of the selected document, or a placeholder
//! when nothing is selected.

use leptos::*;

use crate::api;
use crate::components::status_badge::StatusBadge;
use crate::state::global::{DocumentSummary, GlobalState, TimelineEvent};

/// Right-hand detail panel
#[component]
pub fn DetailPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let selected = state.selected;

    view! {
        {move || match selected.get() {
            Some(document) => view! { <DocumentDetail document=document /> }.into_view(),
            None => view! { <EmptyDetail /> }.into_view(),
        }}
    }
}

/// Summary card plus timeline for the selected document
#[component]
fn DocumentDetail(document: DocumentSummary) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let timeline = state.timeline;

    let external_id = document
        .external_id
        .clone()
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="glass p-6 rounded-2xl sticky top-24">
            <div class="flex justify-between items-start mb-6">
                <div>
                    <h3 class="text-lg font-bold">"Resumo da Nota"</h3>
                    <p class="text-xs text-slate-500 uppercase tracking-widest">
                        {document.doc_type.clone()}
                    </p>
                </div>
                <StatusBadge status=document.status.clone() />
            </div>

            <div class="space-y-4 mb-8">
                <div class="flex justify-between py-2 border-b border-white/5">
                    <span class="text-sm text-slate-500">"Referência"</span>
                    <span class="text-sm font-mono">{document.reference.clone()}</span>
                </div>
                <div class="flex justify-between py-2 border-b border-white/5">
                    <span class="text-sm text-slate-500">"External ID"</span>
                    <span class="text-sm font-mono">{external_id}</span>
                </div>

                {document.pdf_url.clone().map(|pdf| view! {
                    <a
                        href=api::document_pdf_url(&pdf)
                        target="_blank"
                        class="flex items-center justify-center gap-2 w-full py-3 bg-brand-600 hover:bg-brand-500 text-white rounded-xl text-sm font-semibold transition-all shadow-lg shadow-brand-600/20"
                    >
                        "Visualizar PDF ↗"
                    </a>
                })}
            </div>

            <div>
                <h4 class="text-sm font-bold uppercase tracking-widest text-slate-500 mb-6">
                    "Timeline de Eventos"
                </h4>
                <div class="space-y-0">
                    {move || {
                        let events = timeline.get();
                        if events.is_empty() {
                            view! {
                                <p class="text-sm text-slate-600 italic">"Buscando histórico..."</p>
                            }
                            .into_view()
                        } else {
                            events
                                .into_iter()
                                .map(|event| view! { <TimelineItem event=event /> })
                                .collect_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// One timeline entry
#[component]
fn TimelineItem(event: TimelineEvent) -> impl IntoView {
    view! {
        <div class="relative pl-6 pb-6 border-l border-white/10 last:pb-0">
            <div class="absolute left-[-5px] top-0 w-2 h-2 rounded-full bg-brand-500 shadow-[0_0_8px_rgba(92,122,255,0.6)]" />
            <div class="flex justify-between items-start">
                <div>
                    <p class="text-sm font-medium text-slate-200">{event.message.clone()}</p>
                    <p class="text-xs text-slate-500">{event.status.to_uppercase()}</p>
                </div>
                <span class="text-[10px] text-slate-500 font-mono">{event.time_display()}</span>
            </div>
        </div>
    }
}

/// Placeholder card shown before any row is clicked
#[component]
fn EmptyDetail() -> impl IntoView {
    view! {
        <div class="glass p-8 rounded-2xl border-dashed border-white/10 flex flex-col items-center justify-center text-center h-[400px]">
            <div class="w-16 h-16 bg-slate-800/50 rounded-2xl flex items-center justify-center text-3xl mb-4">
                "📄"
            </div>
            <h3 class="text-lg font-semibold text-slate-400">"Nenhuma Nota Selecionada"</h3>
            <p class="text-sm text-slate-600 max-w-[200px]">
                "Clique em uma nota na lista para ver detalhes e timeline."
            </p>
        </div>
    }
}
