//! Language catalog and detection types.

use serde::{Deserialize, Serialize};

/// UI-side sentinel meaning "let the server infer the language".
///
/// Translated to an absent `language` field on the wire; never forwarded
/// literally.
pub const AUTO_DETECT: &str = "auto-detect";

/// Whether a language selection is the auto-detect sentinel.
///
/// Accepts the short `auto` alias, case-insensitively.
pub fn is_auto_detect(selection: &str) -> bool {
    selection.eq_ignore_ascii_case(AUTO_DETECT) || selection.eq_ignore_ascii_case("auto")
}

/// One supported language from `GET /api/languages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDescriptor {
    pub code: String,
    pub name: String,
    /// Model accuracy in `[0, 1]`.
    pub accuracy: f64,
    pub model_available: bool,
}

/// Result of `POST /api/languages/detect`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOutcome {
    pub detected_language: String,
    pub language_name: String,
    pub is_supported: bool,
    pub model_available: bool,
    pub accuracy: f64,
}
