//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the wire types the
//! dashboard reads from the fiscal backend.

use leptos::*;
use std::collections::HashMap;

use super::refresh::RequestSequencer;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Aggregate status counts from the stats endpoint
    pub stats: RwSignal<StatsSummary>,
    /// Most recent emissions, newest first
    pub documents: RwSignal<Vec<DocumentSummary>>,
    /// Currently selected document, kept as a detached snapshot
    pub selected: RwSignal<Option<DocumentSummary>>,
    /// Event timeline of the selected document
    pub timeline: RwSignal<Vec<TimelineEvent>>,
    /// True until the first successful overview fetch
    pub loading: RwSignal<bool>,
    /// Issuance volume series for the chart panel
    pub weekly_volume: RwSignal<Vec<VolumePoint>>,
    /// Request generations for overview fetches
    pub overview_requests: RequestSequencer,
    /// Request generations for timeline fetches
    pub timeline_requests: RequestSequencer,
}

/// Aggregate status counts keyed by backend bucket name.
///
/// The backend reports buckets under either Portuguese or English names
/// depending on the issuing provider, so the accessors resolve each count
/// from the first key present.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct StatsSummary(HashMap<String, u64>);

impl StatsSummary {
    /// Documents accepted by the tax authority
    pub fn authorized(&self) -> u64 {
        self.bucket(&["autorizado", "authorized"])
    }

    /// Documents rejected or failed during issuance
    pub fn errors(&self) -> u64 {
        self.bucket(&["error", "denied"])
    }

    /// Documents still being processed by the provider
    pub fn processing(&self) -> u64 {
        self.bucket(&["processing"])
    }

    fn bucket(&self, keys: &[&str]) -> u64 {
        keys.iter()
            .find_map(|key| self.0.get(*key).copied())
            .unwrap_or(0)
    }
}

/// One issued fiscal document as returned by the dashboard list endpoint
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DocumentSummary {
    pub id: i64,
    /// Document type code: nfse, nfe, nfce, cte or mdfe
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Issuer-facing identifier, also the key for timeline lookups
    #[serde(rename = "referencia")]
    pub reference: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Identifier assigned by the issuing provider once known
    #[serde(default)]
    pub external_id: Option<String>,
    /// Path of the rendered PDF under the storage mount, once available
    #[serde(default)]
    pub pdf_url: Option<String>,
    /// Issuance timestamp as emitted by the backend (ISO-8601 text)
    pub created_at: String,
}

impl DocumentSummary {
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_code(&self.doc_type)
    }

    /// Issuance timestamp formatted for the table, or the raw text when
    /// the backend sent something unparseable
    pub fn created_at_display(&self) -> String {
        format_timestamp(&self.created_at, "%d/%m/%Y %H:%M")
    }
}

/// Fiscal document types known to the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    /// Service invoice
    Nfse,
    /// Goods invoice
    Nfe,
    /// Consumer invoice
    Nfce,
    /// Transport document
    Cte,
    /// Cargo manifest
    Mdfe,
    /// Any code this build does not recognize
    Other,
}

impl DocumentKind {
    /// Classify a backend type code. Matching is exact: the backend stores
    /// these codes lowercased.
    pub fn from_code(code: &str) -> Self {
        match code {
            "nfse" => Self::Nfse,
            "nfe" => Self::Nfe,
            "nfce" => Self::Nfce,
            "cte" => Self::Cte,
            "mdfe" => Self::Mdfe,
            _ => Self::Other,
        }
    }

    /// Icon shown in the Doc column of the emissions table
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Nfse => "🏢",
            Self::Nfe => "📦",
            Self::Nfce => "🛒",
            Self::Cte => "🚚",
            Self::Mdfe => "📋",
            Self::Other => "📄",
        }
    }
}

/// One state-transition record for a selected document
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TimelineEvent {
    pub id: i64,
    pub status: String,
    pub message: String,
    pub created_at: String,
}

impl TimelineEvent {
    /// Event time formatted for the timeline, or the raw text when
    /// unparseable
    pub fn time_display(&self) -> String {
        format_timestamp(&self.created_at, "%H:%M:%S")
    }
}

/// One point of the issuance-volume series
#[derive(Clone, Debug, PartialEq)]
pub struct VolumePoint {
    pub label: String,
    pub volume: f64,
}

impl VolumePoint {
    /// Fixed series shown until the historical-volume endpoint exists.
    /// The chart renders whatever the state holds, so swapping this for
    /// fetched data later only touches the fetch layer.
    pub fn placeholder_week() -> Vec<VolumePoint> {
        [
            ("Seg", 45.0),
            ("Ter", 52.0),
            ("Qua", 48.0),
            ("Qui", 61.0),
            ("Sex", 55.0),
            ("Sab", 20.0),
            ("Dom", 15.0),
        ]
        .into_iter()
        .map(|(label, volume)| VolumePoint {
            label: label.to_string(),
            volume,
        })
        .collect()
    }
}

/// Render a backend timestamp with the given chrono format. The backend
/// emits naive ISO-8601, optionally with fractional seconds; RFC 3339 is
/// accepted too. Unparseable input is passed through verbatim.
fn format_timestamp(raw: &str, format: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_timestamp(raw: &str) -> Option<chrono::NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            stats: create_rw_signal(StatsSummary::default()),
            documents: create_rw_signal(Vec::new()),
            selected: create_rw_signal(None),
            timeline: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            weekly_volume: create_rw_signal(VolumePoint::placeholder_week()),
            overview_requests: RequestSequencer::default(),
            timeline_requests: RequestSequencer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document(id: i64, reference: &str) -> DocumentSummary {
        DocumentSummary {
            id,
            doc_type: "nfse".to_string(),
            reference: reference.to_string(),
            status: Some("processing".to_string()),
            external_id: None,
            pdf_url: None,
            created_at: "2025-01-15T10:30:00".to_string(),
        }
    }

    #[test]
    fn test_stats_totals_from_backend_payload() {
        let stats: StatsSummary =
            serde_json::from_str(r#"{"autorizado": 5, "error": 1}"#).unwrap();
        assert_eq!(stats.authorized(), 5);
        assert_eq!(stats.errors(), 1);
        assert_eq!(stats.processing(), 0);
    }

    #[test]
    fn test_stats_resolve_provider_aliases() {
        let stats: StatsSummary =
            serde_json::from_str(r#"{"authorized": 3, "denied": 2, "processing": 7}"#).unwrap();
        assert_eq!(stats.authorized(), 3);
        assert_eq!(stats.errors(), 2);
        assert_eq!(stats.processing(), 7);
    }

    #[test]
    fn test_stats_prefer_first_present_alias() {
        // A zero under the preferred name must win over a nonzero alias
        let stats: StatsSummary =
            serde_json::from_str(r#"{"autorizado": 0, "authorized": 9}"#).unwrap();
        assert_eq!(stats.authorized(), 0);
    }

    #[test]
    fn test_stats_empty_defaults_to_zero() {
        let stats = StatsSummary::default();
        assert_eq!(stats.authorized(), 0);
        assert_eq!(stats.errors(), 0);
        assert_eq!(stats.processing(), 0);
    }

    #[test]
    fn test_document_kind_known_codes() {
        assert_eq!(DocumentKind::from_code("nfse"), DocumentKind::Nfse);
        assert_eq!(DocumentKind::from_code("nfe"), DocumentKind::Nfe);
        assert_eq!(DocumentKind::from_code("nfce"), DocumentKind::Nfce);
        assert_eq!(DocumentKind::from_code("cte"), DocumentKind::Cte);
        assert_eq!(DocumentKind::from_code("mdfe"), DocumentKind::Mdfe);
    }

    #[test]
    fn test_document_kind_exact_match_only() {
        assert_eq!(DocumentKind::from_code("boleto"), DocumentKind::Other);
        assert_eq!(DocumentKind::from_code("NFSE"), DocumentKind::Other);
        assert_eq!(DocumentKind::from_code(""), DocumentKind::Other);
        assert_eq!(DocumentKind::Other.icon(), "📄");
    }

    #[test]
    fn test_document_deserializes_backend_fields() {
        let json = r#"{
            "id": 7,
            "type": "nfe",
            "referencia": "NFE-2025-0042",
            "status": "autorizado",
            "external_id": "35250112345678000195",
            "pdf_url": "invoices/NFE-2025-0042/danfe.pdf",
            "created_at": "2025-01-15T10:30:00"
        }"#;
        let doc: DocumentSummary = serde_json::from_str(json).unwrap();
        assert_eq!(doc.reference, "NFE-2025-0042");
        assert_eq!(doc.doc_type, "nfe");
        assert_eq!(doc.kind(), DocumentKind::Nfe);
        assert_eq!(doc.external_id.as_deref(), Some("35250112345678000195"));
        assert_eq!(doc.pdf_url.as_deref(), Some("invoices/NFE-2025-0042/danfe.pdf"));
    }

    #[test]
    fn test_document_optional_fields_may_be_absent() {
        let json = r#"{"id": 8, "type": "cte", "referencia": "CTE-9", "created_at": "2025-01-15T10:30:00"}"#;
        let doc: DocumentSummary = serde_json::from_str(json).unwrap();
        assert!(doc.status.is_none());
        assert!(doc.external_id.is_none());
        assert!(doc.pdf_url.is_none());
        assert_eq!(doc.kind(), DocumentKind::Cte);
    }

    #[test]
    fn test_timeline_event_deserializes() {
        let json = r#"{"id": 1, "status": "processing", "message": "Enviado para a prefeitura", "created_at": "2025-01-15T10:30:05.123456"}"#;
        let event: TimelineEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.message, "Enviado para a prefeitura");
        assert_eq!(event.time_display(), "10:30:05");
    }

    #[test]
    fn test_timestamp_display_formats() {
        assert_eq!(
            format_timestamp("2025-01-15T10:30:00", "%d/%m/%Y %H:%M"),
            "15/01/2025 10:30"
        );
        assert_eq!(
            format_timestamp("2025-01-15T10:30:05.123456", "%H:%M:%S"),
            "10:30:05"
        );
        assert_eq!(format_timestamp("2025-01-15T10:30:05Z", "%H:%M:%S"), "10:30:05");
    }

    #[test]
    fn test_timestamp_garbage_passes_through() {
        assert_eq!(format_timestamp("ontem", "%H:%M:%S"), "ontem");
        assert_eq!(format_timestamp("", "%d/%m/%Y %H:%M"), "");
    }

    #[test]
    fn test_placeholder_week_shape() {
        let series = VolumePoint::placeholder_week();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].label, "Seg");
        assert_eq!(series[6].label, "Dom");
        assert!(series.iter().all(|p| p.volume >= 0.0));
    }

    #[test]
    fn test_initial_state_flags() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        assert!(state.loading.get_untracked());
        assert!(state.selected.get_untracked().is_none());
        assert!(state.documents.get_untracked().is_empty());
        assert_eq!(state.weekly_volume.get_untracked().len(), 7);
        runtime.dispose();
    }

    #[test]
    fn test_selection_survives_list_rollover() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        let doc = sample_document(3, "NFSE-30");

        state.documents.set(vec![doc.clone()]);
        state.selected.set(Some(doc.clone()));

        // A later refresh replaces the list; the selection is a snapshot
        // and must not be cleared or re-resolved.
        state.documents.set(vec![sample_document(4, "NFSE-31")]);
        assert_eq!(state.selected.get_untracked(), Some(doc));
        runtime.dispose();
    }
}
