//! Pre-flight validation and normalization of analyze input.
//!
//! Runs synchronously before any network call; a failure here must block
//! submission entirely. Limits match the server's request constraints so a
//! request that passes locally is not rejected remotely for size.

use thiserror::Error;

use crate::language::is_auto_detect;

/// Server-side cap on the title field.
pub const MAX_TITLE_LEN: usize = 500;
/// Server-side cap on the content field.
pub const MAX_CONTENT_LEN: usize = 10_000;

/// Local, user-correctable rejection of an analyze submission.
///
/// The `Display` text is the user-facing message, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide both title and content")]
    MissingField,
    #[error("News title must be less than {MAX_TITLE_LEN} characters")]
    TitleTooLong,
    #[error("News content must be less than {MAX_CONTENT_LEN} characters")]
    ContentTooLong,
}

/// Validate the two required article fields.
///
/// Empty or whitespace-only title/content is a [`ValidationError::MissingField`];
/// over-length fields fail with the matching `TooLong` variant.
pub fn validate_article(title: &str, content: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(ValidationError::ContentTooLong);
    }
    Ok(())
}

/// Normalize an optional free-text field: empty after trim becomes absent.
pub fn normalize_optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Normalize a language selection for the wire.
///
/// The auto-detect sentinel (and the empty selection) becomes `None`; a
/// concrete code passes through verbatim.
pub fn normalize_language(selection: &str) -> Option<String> {
    if selection.trim().is_empty() || is_auto_detect(selection) {
        None
    } else {
        Some(selection.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_present_is_ok() {
        assert!(validate_article("Breaking", "Scientists confirm...").is_ok());
    }

    #[test]
    fn empty_title_is_missing_field() {
        assert_eq!(
            validate_article("", "content"),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn whitespace_content_is_missing_field() {
        assert_eq!(
            validate_article("title", "   "),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn missing_field_message_is_user_facing() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "Please provide both title and content"
        );
    }

    #[test]
    fn title_at_limit_is_ok() {
        let title = "t".repeat(MAX_TITLE_LEN);
        assert!(validate_article(&title, "content").is_ok());
    }

    #[test]
    fn title_over_limit_rejected() {
        let title = "t".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(
            validate_article(&title, "content"),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn content_over_limit_rejected() {
        let content = "c".repeat(MAX_CONTENT_LEN + 1);
        assert_eq!(
            validate_article("title", &content),
            Err(ValidationError::ContentTooLong)
        );
    }

    #[test]
    fn limits_count_chars_not_bytes() {
        // 500 two-byte chars stay within the 500-char title limit.
        let title = "é".repeat(MAX_TITLE_LEN);
        assert!(validate_article(&title, "content").is_ok());
    }

    #[test]
    fn optional_empty_becomes_none() {
        assert_eq!(normalize_optional(""), None);
        assert_eq!(normalize_optional("  "), None);
    }

    #[test]
    fn optional_value_passes_through() {
        assert_eq!(
            normalize_optional("https://example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn language_sentinel_becomes_none() {
        assert_eq!(normalize_language("auto-detect"), None);
        assert_eq!(normalize_language("auto"), None);
        assert_eq!(normalize_language(""), None);
    }

    #[test]
    fn language_code_passes_through() {
        assert_eq!(normalize_language("en"), Some("en".to_string()));
    }
}
