//! # Result Report
//!
//! Turns a normalized `AnalysisResult` into the values the result region
//! shows: percentages, the headline, the confidence band and its
//! interpretation. Pure data, so the TUI and tests read the same thing.

use chrono::{DateTime, Utc};

use crate::core::input::char_count;
use crate::prediction::{AnalysisResult, Prediction};

/// Footnote shown under every result.
pub const MODEL_FOOTNOTE: &str = "Result from an optimized SVM model (F1-score 92.60%)";

/// Converts a score in `[0, 1]` to a whole percentage, rounding half up.
pub fn percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

/// Qualitative band of the model's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Moderate,
    Low,
}

impl ConfidenceBand {
    /// `> 70` is high, `40..=70` moderate, below `40` low.
    pub fn from_percent(confidence: u8) -> Self {
        if confidence > 70 {
            ConfidenceBand::High
        } else if confidence >= 40 {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceBand::High => "High confidence",
            ConfidenceBand::Moderate => "Moderate confidence",
            ConfidenceBand::Low => "Low confidence",
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            ConfidenceBand::High => {
                "High confidence: the model is quite sure about this classification."
            }
            ConfidenceBand::Moderate => {
                "Moderate confidence: treat this classification as a reasonable indication."
            }
            ConfidenceBand::Low => {
                "Low confidence: the message is ambiguous, read the result with caution."
            }
        }
    }
}

/// Everything the result region renders for one successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub prediction: Prediction,
    pub probability_pct: u8,
    pub confidence_pct: u8,
    /// Characters in the text that was sent.
    pub char_count: usize,
    pub band: ConfidenceBand,
    pub cleaned_text: Option<String>,
    pub server_timestamp: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl ResultView {
    pub fn new(result: &AnalysisResult, original_text: &str, received_at: DateTime<Utc>) -> Self {
        let confidence_pct = percent(result.confidence);
        Self {
            prediction: result.prediction,
            probability_pct: percent(result.probability),
            confidence_pct,
            char_count: char_count(original_text),
            band: ConfidenceBand::from_percent(confidence_pct),
            cleaned_text: result.cleaned_text.clone(),
            server_timestamp: result.timestamp.clone(),
            received_at,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self.prediction {
            Prediction::Stress => "Stress detected",
            Prediction::NoStress => "No stress detected",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.prediction {
            Prediction::Stress => "The message shows indicators of psychological stress.",
            Prediction::NoStress => "The message shows no significant indicators of stress.",
        }
    }

    pub fn probability(&self) -> String {
        format_percent(self.probability_pct)
    }

    pub fn confidence(&self) -> String {
        format_percent(self.confidence_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(prediction: Prediction, probability: f64, confidence: f64) -> AnalysisResult {
        AnalysisResult {
            prediction,
            probability,
            confidence,
            cleaned_text: None,
            timestamp: None,
        }
    }

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(0.8), 80);
        assert_eq!(percent(0.125), 13);
        assert_eq!(percent(0.994), 99);
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(1.0), 100);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ConfidenceBand::from_percent(100), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_percent(71), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_percent(70), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_percent(40), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_percent(39), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_percent(0), ConfidenceBand::Low);
    }

    #[test]
    fn test_view_for_confident_stress_result() {
        let view = ResultView::new(
            &result(Prediction::Stress, 0.8, 0.9),
            "I have three deadlines tomorrow",
            Utc::now(),
        );
        assert_eq!(view.probability(), "80%");
        assert_eq!(view.confidence(), "90%");
        assert_eq!(view.band, ConfidenceBand::High);
        assert_eq!(view.band.label(), "High confidence");
        assert_eq!(view.headline(), "Stress detected");
        assert_eq!(view.char_count, 31);
    }

    #[test]
    fn test_view_for_low_confidence_no_stress() {
        let view = ResultView::new(&result(Prediction::NoStress, 0.3, 0.35), "ok", Utc::now());
        assert_eq!(view.headline(), "No stress detected");
        assert_eq!(view.band, ConfidenceBand::Low);
        assert!(view.band.interpretation().starts_with("Low confidence"));
    }

    #[test]
    fn test_view_keeps_optional_fields() {
        let mut raw = result(Prediction::Stress, 0.6, 0.5);
        raw.cleaned_text = Some("work overwhelming".to_string());
        raw.timestamp = Some("2024-05-01T10:00:00Z".to_string());
        let view = ResultView::new(&raw, "Work is overwhelming!!", Utc::now());
        assert_eq!(view.cleaned_text.as_deref(), Some("work overwhelming"));
        assert_eq!(view.server_timestamp.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(view.band, ConfidenceBand::Moderate);
    }
}
