//! HTTP client for the news-analysis service.
//!
//! Wraps the four read/write endpoints plus the language-detection and
//! feedback operations. Non-2xx responses become [`ApiError::Server`] with
//! the raw body preserved; bodies are parsed with serde from camelCase JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::info;
use veriscan_core::{
    AnalysisReport, AnalysisRequest, DetectionOutcome, HistoryEntry, LanguageDescriptor, Statistics,
};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for the analysis service's `/api` endpoints.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct LanguagesEnvelope {
    languages: HashMap<String, LanguageDescriptor>,
}

#[derive(Deserialize)]
struct HistoryEnvelope {
    /// Absent when the service has no stored analyses yet.
    #[serde(default)]
    content: Vec<HistoryEntry>,
}

#[derive(Serialize)]
struct DetectBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct FeedbackBody<'a> {
    rating: i32,
    feedback: Option<&'a str>,
}

impl ApiClient {
    /// Create a client for the given service base URL.
    ///
    /// `base_url` should be like `http://localhost:8080` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List supported languages, sorted by code.
    pub async fn languages(&self) -> Result<Vec<LanguageDescriptor>, ApiError> {
        let url = format!("{}/api/languages", self.base_url);
        info!(url = %url, "fetching supported languages");
        let envelope: LanguagesEnvelope = self.get_json(&url).await?;
        let languages = sorted_by_code(envelope.languages);
        info!(count = languages.len(), "fetched language catalog");
        Ok(languages)
    }

    /// Fetch service-wide analysis statistics.
    pub async fn statistics(&self) -> Result<Statistics, ApiError> {
        let url = format!("{}/api/news/statistics", self.base_url);
        info!(url = %url, "fetching statistics");
        self.get_json(&url).await
    }

    /// Fetch the analysis history in server order.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let url = format!("{}/api/news/history", self.base_url);
        self.fetch_history(url).await
    }

    /// Fetch one page of the analysis history.
    pub async fn history_page(&self, page: u32, size: u32) -> Result<Vec<HistoryEntry>, ApiError> {
        let url = format!(
            "{}/api/news/history?page={page}&size={size}",
            self.base_url
        );
        self.fetch_history(url).await
    }

    async fn fetch_history(&self, url: String) -> Result<Vec<HistoryEntry>, ApiError> {
        info!(url = %url, "fetching analysis history");
        let envelope: HistoryEnvelope = self.get_json(&url).await?;
        info!(count = envelope.content.len(), "fetched history entries");
        Ok(envelope.content)
    }

    /// Submit an article for classification.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, ApiError> {
        let url = format!("{}/api/news/analyze", self.base_url);
        info!(url = %url, title = %request.title, "submitting article for analysis");
        let resp = self.client.post(&url).json(request).send().await?;
        let report: AnalysisReport = parse_body(resp).await?;
        info!(
            is_fake_news = report.is_fake_news,
            confidence = report.confidence_score,
            duration_ms = report.analysis_duration_ms,
            "analysis complete"
        );
        Ok(report)
    }

    /// Detect the language of a text sample.
    pub async fn detect_language(&self, text: &str) -> Result<DetectionOutcome, ApiError> {
        let url = format!("{}/api/languages/detect", self.base_url);
        info!(url = %url, text_len = text.len(), "detecting language");
        let resp = self
            .client
            .post(&url)
            .json(&DetectBody { text })
            .send()
            .await?;
        parse_body(resp).await
    }

    /// Attach a user rating (and optional comment) to a stored analysis.
    pub async fn submit_feedback(
        &self,
        analysis_id: i64,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/news/feedback/{analysis_id}", self.base_url);
        info!(url = %url, rating, "submitting feedback");
        let resp = self
            .client
            .post(&url)
            .json(&FeedbackBody {
                rating,
                feedback: comment,
            })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self.client.get(url).send().await?;
        parse_body(resp).await
    }
}

/// Check the status and parse the JSON body of a response.
async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status: status.as_u16(),
            body,
        });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn sorted_by_code(languages: HashMap<String, LanguageDescriptor>) -> Vec<LanguageDescriptor> {
    let mut languages: Vec<LanguageDescriptor> = languages.into_values().collect();
    languages.sort_by(|a, b| a.code.cmp(&b.code));
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/".into());
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn languages_envelope_sorted_by_code() {
        let json = r#"{
            "languages": {
                "hi": {"code": "hi", "name": "Hindi", "accuracy": 0.89, "modelAvailable": true},
                "en": {"code": "en", "name": "English", "accuracy": 0.95, "modelAvailable": true},
                "fr": {"code": "fr", "name": "French", "accuracy": 0.88, "modelAvailable": false}
            },
            "totalSupported": 3
        }"#;
        let envelope: LanguagesEnvelope = serde_json::from_str(json).unwrap();
        let languages = sorted_by_code(envelope.languages);
        let codes: Vec<&str> = languages.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, ["en", "fr", "hi"]);
    }

    #[test]
    fn history_envelope_with_entries() {
        let json = r#"{
            "content": [
                {
                    "id": 2,
                    "newsTitle": "Later",
                    "isFakeNews": false,
                    "confidenceScore": 0.91,
                    "detectedLanguage": "en",
                    "createdAt": "2026-08-02T10:00:00"
                },
                {
                    "id": 1,
                    "newsTitle": "Earlier",
                    "isFakeNews": true,
                    "confidenceScore": 0.66,
                    "detectedLanguage": "es",
                    "createdAt": "2026-08-01T09:00:00"
                }
            ]
        }"#;
        let envelope: HistoryEnvelope = serde_json::from_str(json).unwrap();
        // Server order is preserved, not re-sorted.
        assert_eq!(envelope.content[0].id, 2);
        assert_eq!(envelope.content[1].news_title, "Earlier");
    }

    #[test]
    fn history_envelope_without_content_is_empty() {
        let envelope: HistoryEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.content.is_empty());
    }

    #[test]
    fn detect_body_shape() {
        let json = serde_json::to_string(&DetectBody { text: "Bonjour" }).unwrap();
        assert_eq!(json, r#"{"text":"Bonjour"}"#);
    }

    #[test]
    fn feedback_body_null_comment() {
        let json = serde_json::to_string(&FeedbackBody {
            rating: 4,
            feedback: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"rating":4,"feedback":null}"#);
    }
}
