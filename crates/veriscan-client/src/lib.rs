//! HTTP transport to the news-analysis service: one method per endpoint,
//! JSON bodies, no retries or auth.

pub mod http;

pub use http::{ApiClient, ApiError};
