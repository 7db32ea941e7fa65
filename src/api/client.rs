//! HTTP API Client
//!
//! Functions for communicating with the fiscal backend's dashboard REST API.

use gloo_net::http::Request;

use crate::state::global::{DocumentSummary, StatsSummary, TimelineEvent};

/// Default API base URL. Empty means same-origin relative requests, which is
/// how the backend serves the dashboard in deployment.
pub const DEFAULT_API_BASE: &str = "";

/// localStorage key holding an operator-set API base override
const API_BASE_STORAGE_KEY: &str = "fiscal_hub_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Normalize: remove trailing slash so joined paths stay single-slashed
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn stats_url(base: &str) -> String {
    format!("{}/nfse/dashboard/stats", base)
}

fn list_url(base: &str, limit: usize) -> String {
    format!("{}/nfse/dashboard/list?limit={}", base, limit)
}

fn timeline_url(base: &str, reference: &str) -> String {
    format!("{}/nfse/{}/timeline", base, reference)
}

/// Path of the rendered PDF for a document, served from the backend's
/// static storage mount on the same origin
pub fn document_pdf_url(pdf_path: &str) -> String {
    format!("/storage/{}", pdf_path)
}

// ============ Response Types ============

/// Error body shape produced by the backend
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub detail: String,
}

// ============ API Functions ============

/// Fetch the aggregate status counts
pub async fn fetch_stats() -> Result<StatsSummary, String> {
    let api_base = get_api_base();

    let response = Request::get(&stats_url(&api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: format!("HTTP {}", response.status()) });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the most recent emissions, newest first
pub async fn fetch_documents(limit: usize) -> Result<Vec<DocumentSummary>, String> {
    let api_base = get_api_base();

    let response = Request::get(&list_url(&api_base, limit))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: format!("HTTP {}", response.status()) });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the event timeline for one document reference
pub async fn fetch_timeline(reference: &str) -> Result<Vec<TimelineEvent>, String> {
    let api_base = get_api_base();

    let response = Request::get(&timeline_url(&api_base, reference))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: format!("HTTP {}", response.status()) });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_relative_to_default_base() {
        assert_eq!(stats_url(DEFAULT_API_BASE), "/nfse/dashboard/stats");
        assert_eq!(list_url(DEFAULT_API_BASE, 10), "/nfse/dashboard/list?limit=10");
        assert_eq!(timeline_url(DEFAULT_API_BASE, "NFE-123"), "/nfse/NFE-123/timeline");
    }

    #[test]
    fn test_urls_against_configured_base() {
        let base = normalize_base("http://localhost:8000/");
        assert_eq!(stats_url(&base), "http://localhost:8000/nfse/dashboard/stats");
        assert_eq!(list_url(&base, 25), "http://localhost:8000/nfse/dashboard/list?limit=25");
        assert_eq!(
            timeline_url(&base, "NFSE-2025-0007"),
            "http://localhost:8000/nfse/NFSE-2025-0007/timeline"
        );
    }

    #[test]
    fn test_normalize_base_trims_trailing_slashes() {
        assert_eq!(normalize_base("http://localhost:8000//"), "http://localhost:8000");
        assert_eq!(normalize_base(""), "");
    }

    #[test]
    fn test_document_pdf_url_is_storage_relative() {
        assert_eq!(
            document_pdf_url("invoices/NFE-1/danfe.pdf"),
            "/storage/invoices/NFE-1/danfe.pdf"
        );
    }

    #[test]
    fn test_api_error_decodes_backend_detail() {
        let error: ApiError = serde_json::from_str(r#"{"detail": "Invoice not found"}"#).unwrap();
        assert_eq!(error.detail, "Invoice not found");
    }
}
