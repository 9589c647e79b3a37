//! Aggregate read-view types: statistics and analysis history.

use serde::{Deserialize, Serialize};

/// Service-wide analysis counters from `GET /api/news/statistics`.
///
/// Computed server-side; never derived locally from the history cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_analyses: u64,
    pub fake_news_count: u64,
    pub real_news_count: u64,
    /// Percentage in `[0, 100]`, rounded server-side to two decimals.
    pub fake_news_percentage: f64,
}

/// One row of the analysis history, in the order the server returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub news_title: String,
    pub is_fake_news: bool,
    pub confidence_score: f64,
    pub detected_language: String,
    /// ISO 8601 timestamp string.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_parse() {
        let json = r#"{
            "totalAnalyses": 128,
            "fakeNewsCount": 45,
            "realNewsCount": 83,
            "fakeNewsPercentage": 35.16
        }"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_analyses, 128);
        assert_eq!(stats.fake_news_count + stats.real_news_count, 128);
        assert_eq!(stats.fake_news_percentage, 35.16);
    }

    #[test]
    fn history_entry_parse() {
        let json = r#"{
            "id": 7,
            "newsTitle": "Breaking",
            "isFakeNews": true,
            "confidenceScore": 0.74,
            "detectedLanguage": "en",
            "createdAt": "2026-08-01T18:02:11"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert!(entry.is_fake_news);
        assert_eq!(entry.created_at, "2026-08-01T18:02:11");
    }
}
