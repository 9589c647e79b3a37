pub mod analysis;
pub mod dashboard;
pub mod language;
pub mod validate;

pub use analysis::{AnalysisReport, AnalysisRequest};
pub use dashboard::{HistoryEntry, Statistics};
pub use language::{AUTO_DETECT, DetectionOutcome, LanguageDescriptor, is_auto_detect};
pub use validate::{
    MAX_CONTENT_LEN, MAX_TITLE_LEN, ValidationError, normalize_language, normalize_optional,
    validate_article,
};
