//! Fiscal Hub Dashboard
//!
//! Issuance monitoring dashboard for fiscal documents, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Aggregate issuance counters and recent-emissions list, auto-refreshed
//! - Per-document detail panel with event timeline and PDF access
//! - Weekly issuance-volume chart
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It polls the fiscal backend's dashboard endpoints over HTTP;
//! the same backend serves rendered PDFs under its storage mount.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
