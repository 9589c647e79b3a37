//! Analysis session controller: holds the form input, drives the analyze
//! submission lifecycle, and owns the three best-effort read caches
//! (languages, statistics, history).

pub mod backend;
pub mod controller;

pub use backend::AnalysisBackend;
pub use controller::{ANALYZE_FAILED, AnalysisForm, AnalysisSession, Phase};
