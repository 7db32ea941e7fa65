//! Status Badge Component
//!
//! Colored pill showing the issuance status of a document.

use leptos::*;

/// Coarse outcome buckets used for badge styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCategory {
    Authorized,
    Rejected,
    Pending,
}

impl StatusCategory {
    /// Classify a raw backend status. Matching is case-insensitive;
    /// anything outside the known vocabulary, including a missing status,
    /// lands on the pending bucket.
    pub fn classify(status: Option<&str>) -> Self {
        match status.unwrap_or_default().to_lowercase().as_str() {
            "autorizado" | "authorized" => Self::Authorized,
            "error" | "denied" => Self::Rejected,
            _ => Self::Pending,
        }
    }

    /// Theme classes for the badge pill
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Authorized => "bg-emerald-500/10 text-emerald-400 border-emerald-500/20",
            Self::Rejected => "bg-rose-500/10 text-rose-400 border-rose-500/20",
            Self::Pending => "bg-amber-500/10 text-amber-400 border-amber-500/20",
        }
    }
}

/// Status badge pill
#[component]
pub fn StatusBadge(#[prop(into)] status: Option<String>) -> impl IntoView {
    let category = StatusCategory::classify(status.as_deref());
    let label = status.map(|s| s.to_uppercase()).unwrap_or_default();

    view! {
        <span class=format!(
            "px-2 py-1 text-xs font-medium rounded-full border {}",
            category.badge_class()
        )>
            {label}
        </span>
    }
}
