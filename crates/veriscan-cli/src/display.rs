//! Stdout rendering for verdicts, statistics, history, and languages.

use chrono::NaiveDateTime;
use veriscan_core::{AnalysisReport, DetectionOutcome, HistoryEntry, LanguageDescriptor, Statistics};

/// Band a confidence score for display: high ≥ 0.8, medium ≥ 0.6, low below.
pub fn confidence_band(score: f64) -> &'static str {
    if score >= 0.8 {
        "high"
    } else if score >= 0.6 {
        "medium"
    } else {
        "low"
    }
}

/// Render an ISO 8601 timestamp (server-local, no zone) as a calendar date.
/// Falls back to the raw string when it does not parse.
fn format_date(iso: &str) -> String {
    iso.parse::<NaiveDateTime>()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

fn verdict_label(is_fake_news: bool) -> &'static str {
    if is_fake_news {
        "Likely Fake News"
    } else {
        "Likely Real News"
    }
}

// ── Cards ──

/// Print an analysis verdict as a vertical card.
pub fn print_report(report: &AnalysisReport) {
    println!("=== Analysis Result ===");
    println!("  {:<16} {}", "Classification", verdict_label(report.is_fake_news));
    println!(
        "  {:<16} {:.1}% ({})",
        "Confidence",
        report.confidence_score * 100.0,
        confidence_band(report.confidence_score)
    );
    println!(
        "  {:<16} {}",
        "Language",
        report.detected_language.to_uppercase()
    );
    println!("  {:<16} {}", "Model", report.model_used);
    println!("  {:<16} {} ms", "Duration", report.analysis_duration_ms);
    println!();
    println!("Explanation");
    println!("  {}", report.explanation);
    println!();
    println!("Recommendation");
    println!("  {}", report.recommendation);

    if let Some(scores) = &report.feature_scores {
        let mut scores: Vec<(&String, &f64)> = scores.iter().collect();
        scores.sort_by(|a, b| a.0.cmp(b.0));
        println!();
        println!("Feature Scores");
        for (name, score) in scores {
            println!("  {:<24} {:.2}", name, score);
        }
    }
    if let Some(features) = &report.analysis_features {
        if !features.is_empty() {
            println!();
            println!("Signals");
            println!("  {}", features.join(", "));
        }
    }
}

pub fn print_statistics(stats: &Statistics) {
    println!("=== Analysis Statistics ===");
    println!("  {:<16} {}", "Total", stats.total_analyses);
    println!(
        "  {:<16} {} ({}%)",
        "Fake News", stats.fake_news_count, stats.fake_news_percentage
    );
    println!("  {:<16} {}", "Real News", stats.real_news_count);
}

/// One-line statistics summary shown after a successful analyze.
pub fn print_statistics_line(stats: &Statistics) {
    println!();
    println!(
        "{} analyses on record, {} flagged fake ({}%)",
        stats.total_analyses, stats.fake_news_count, stats.fake_news_percentage
    );
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("No analysis history yet.");
        return;
    }
    println!("=== Analysis History ===");
    for entry in entries {
        println!(
            "  #{:<6} {:<10} {:>5.1}%  {:<4} {}  {}",
            entry.id,
            if entry.is_fake_news { "fake" } else { "real" },
            entry.confidence_score * 100.0,
            entry.detected_language.to_uppercase(),
            format_date(&entry.created_at),
            entry.news_title,
        );
    }
}

pub fn print_languages(languages: &[LanguageDescriptor]) {
    println!("=== Supported Languages ===");
    for lang in languages {
        println!(
            "  {:<4} {:<16} accuracy {:>5.1}%  model {}",
            lang.code,
            lang.name,
            lang.accuracy * 100.0,
            if lang.model_available { "yes" } else { "no" },
        );
    }
}

pub fn print_detection(outcome: &DetectionOutcome) {
    println!("=== Language Detection ===");
    println!(
        "  {:<16} {} ({})",
        "Language",
        outcome.language_name,
        outcome.detected_language.to_uppercase()
    );
    println!(
        "  {:<16} {}",
        "Supported",
        if outcome.is_supported { "yes" } else { "no" }
    );
    println!(
        "  {:<16} {}",
        "Model",
        if outcome.model_available { "yes" } else { "no" }
    );
    println!("  {:<16} {:.1}%", "Accuracy", outcome.accuracy * 100.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_split_at_point_eight_and_point_six() {
        assert_eq!(confidence_band(0.95), "high");
        assert_eq!(confidence_band(0.8), "high");
        assert_eq!(confidence_band(0.79), "medium");
        assert_eq!(confidence_band(0.6), "medium");
        assert_eq!(confidence_band(0.59), "low");
        assert_eq!(confidence_band(0.0), "low");
    }

    #[test]
    fn iso_timestamp_renders_as_date() {
        assert_eq!(format_date("2026-08-01T18:02:11"), "2026-08-01");
        assert_eq!(format_date("2026-08-01T18:02:11.123456"), "2026-08-01");
    }

    #[test]
    fn unparseable_timestamp_falls_back_to_raw() {
        assert_eq!(format_date("last tuesday"), "last tuesday");
    }
}
