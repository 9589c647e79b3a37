//! The analysis session controller.
//!
//! A single state object owning the form input, the `idle ↔ submitting`
//! phase, the result/error channels, and three independently-refreshed read
//! caches. View rendering is a pure function of this state; the controller
//! exposes `submit`/`reset`/`refresh_*` as its only mutators.
//!
//! A write (analyze) invalidates the statistics and history caches, never
//! the language catalog. Cache refreshes are best-effort: a failure keeps
//! the previous value and is logged, never surfaced on the blocking error
//! channel. Every operation takes `&mut self`, so a new submission or a
//! reset cannot overlap an in-flight analyze call and stale responses have
//! no window in which to land.

use tracing::warn;
use veriscan_client::ApiError;
use veriscan_core::{
    AUTO_DETECT, AnalysisReport, AnalysisRequest, HistoryEntry, LanguageDescriptor, Statistics,
    ValidationError, normalize_language, normalize_optional, validate_article,
};

use crate::backend::AnalysisBackend;

/// Generic user-facing message for a failed analyze call. No distinction is
/// made between timeouts, 4xx, and 5xx.
pub const ANALYZE_FAILED: &str = "Error analyzing news. Please try again.";

/// The raw form input as the user typed it.
///
/// Optionals stay as plain strings here; they are normalized (empty → absent,
/// auto-detect sentinel → absent) only when building the wire request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisForm {
    pub title: String,
    pub content: String,
    pub source_url: String,
    pub author: String,
    pub language: String,
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            source_url: String::new(),
            author: String::new(),
            language: AUTO_DETECT.to_string(),
        }
    }
}

impl AnalysisForm {
    /// Validate the required fields and normalize the optionals into a
    /// wire request. Runs synchronously, before any network call.
    pub fn validated_request(&self) -> Result<AnalysisRequest, ValidationError> {
        validate_article(&self.title, &self.content)?;
        Ok(AnalysisRequest {
            title: self.title.clone(),
            content: self.content.clone(),
            source_url: normalize_optional(&self.source_url),
            author: normalize_optional(&self.author),
            language: normalize_language(&self.language),
        })
    }
}

/// Submission phase. There is no terminal state; the controller is reusable
/// for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Session controller over an [`AnalysisBackend`].
pub struct AnalysisSession<B> {
    backend: B,
    form: AnalysisForm,
    phase: Phase,
    result: Option<AnalysisReport>,
    error: Option<String>,
    languages: Vec<LanguageDescriptor>,
    statistics: Option<Statistics>,
    history: Vec<HistoryEntry>,
}

impl<B: AnalysisBackend> AnalysisSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            form: AnalysisForm::default(),
            phase: Phase::Idle,
            result: None,
            error: None,
            languages: Vec::new(),
            statistics: None,
            history: Vec::new(),
        }
    }

    /// Session entry point: fill all three read caches concurrently.
    ///
    /// Invoked once by the hosting application; individual failures keep
    /// that cache empty and are logged.
    pub async fn initialize(&mut self) {
        let (languages, statistics, history) = tokio::join!(
            self.backend.fetch_languages(),
            self.backend.fetch_statistics(),
            self.backend.fetch_history(),
        );
        self.apply_languages(languages);
        self.apply_statistics(statistics);
        self.apply_history(history);
    }

    /// Run one analyze submission to completion.
    ///
    /// Ignored while a submission is already in flight. A validation failure
    /// sets the error channel and issues no network call. On success the
    /// report is stored and the statistics and history caches are refreshed
    /// concurrently; those refreshes never affect the stored report or the
    /// error channel. On failure a generic message is stored and the result
    /// stays as the submission left it.
    pub async fn submit(&mut self) {
        if self.phase == Phase::Submitting {
            return;
        }
        let request = match self.form.validated_request() {
            Ok(request) => request,
            Err(err) => {
                self.error = Some(err.to_string());
                return;
            }
        };

        self.phase = Phase::Submitting;
        self.error = None;
        // Clear eagerly so a stale verdict never renders during submission.
        self.result = None;

        match self.backend.analyze(&request).await {
            Ok(report) => {
                self.result = Some(report);
                self.refresh_after_write().await;
            }
            Err(err) => {
                warn!(error = %err, "analyze request failed");
                self.error = Some(ANALYZE_FAILED.to_string());
            }
        }
        self.phase = Phase::Idle;
    }

    /// Clear the form, the result, and the error. Idempotent; leaves the
    /// read caches untouched.
    pub fn reset(&mut self) {
        self.form = AnalysisForm::default();
        self.result = None;
        self.error = None;
    }

    pub async fn refresh_languages(&mut self) {
        let fetched = self.backend.fetch_languages().await;
        self.apply_languages(fetched);
    }

    pub async fn refresh_statistics(&mut self) {
        let fetched = self.backend.fetch_statistics().await;
        self.apply_statistics(fetched);
    }

    pub async fn refresh_history(&mut self) {
        let fetched = self.backend.fetch_history().await;
        self.apply_history(fetched);
    }

    pub fn form(&self) -> &AnalysisForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AnalysisForm {
        &mut self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn result(&self) -> Option<&AnalysisReport> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn languages(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Post-analyze invalidation: statistics and history, issued
    /// concurrently, completions in either order. Languages are not touched.
    async fn refresh_after_write(&mut self) {
        let (statistics, history) = tokio::join!(
            self.backend.fetch_statistics(),
            self.backend.fetch_history(),
        );
        self.apply_statistics(statistics);
        self.apply_history(history);
    }

    fn apply_languages(&mut self, fetched: Result<Vec<LanguageDescriptor>, ApiError>) {
        match fetched {
            Ok(languages) => self.languages = languages,
            Err(err) => warn!(error = %err, "language refresh failed, keeping previous catalog"),
        }
    }

    fn apply_statistics(&mut self, fetched: Result<Statistics, ApiError>) {
        match fetched {
            Ok(statistics) => self.statistics = Some(statistics),
            Err(err) => warn!(error = %err, "statistics refresh failed, keeping previous value"),
        }
    }

    fn apply_history(&mut self, fetched: Result<Vec<HistoryEntry>, ApiError>) {
        match fetched {
            Ok(history) => self.history = history,
            Err(err) => warn!(error = %err, "history refresh failed, keeping previous entries"),
        }
    }

    #[cfg(test)]
    fn force_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
