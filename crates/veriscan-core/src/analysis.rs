//! Analyze request/response types shared between the client and the session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Article payload for `POST /api/news/analyze`.
///
/// Absent optionals cross the wire as explicit `null`, which is why none of
/// the fields carry `skip_serializing_if`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub title: String,
    pub content: String,
    pub source_url: Option<String>,
    pub author: Option<String>,
    /// Concrete language code, or `None` to let the server auto-detect.
    pub language: Option<String>,
}

/// Classification verdict returned by the analyze endpoint.
///
/// Replaced wholesale by each successful analyze call and never mutated in
/// place. The fields past `recommendation` are only present when the server
/// echoes the stored record, so they all default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub is_fake_news: bool,
    /// In `[0, 1]`.
    pub confidence_score: f64,
    pub detected_language: String,
    pub model_used: String,
    pub analysis_duration_ms: u64,
    pub explanation: String,
    pub recommendation: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub news_title: Option<String>,
    /// ISO 8601 timestamp string.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub feature_scores: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub analysis_features: Option<Vec<String>>,
}
