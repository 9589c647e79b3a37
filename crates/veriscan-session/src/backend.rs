//! Backend seam between the session controller and the HTTP transport.

use async_trait::async_trait;
use veriscan_client::{ApiClient, ApiError};
use veriscan_core::{AnalysisReport, AnalysisRequest, HistoryEntry, LanguageDescriptor, Statistics};

/// The remote operations the session controller depends on.
///
/// Implemented by [`ApiClient`] for production; tests script a mock so the
/// controller's state transitions can be exercised without a network.
#[async_trait]
pub trait AnalysisBackend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, ApiError>;
    async fn fetch_statistics(&self) -> Result<Statistics, ApiError>;
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError>;
    async fn fetch_languages(&self) -> Result<Vec<LanguageDescriptor>, ApiError>;
}

#[async_trait]
impl AnalysisBackend for ApiClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, ApiError> {
        ApiClient::analyze(self, request).await
    }

    async fn fetch_statistics(&self) -> Result<Statistics, ApiError> {
        self.statistics().await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        self.history().await
    }

    async fn fetch_languages(&self) -> Result<Vec<LanguageDescriptor>, ApiError> {
        self.languages().await
    }
}
