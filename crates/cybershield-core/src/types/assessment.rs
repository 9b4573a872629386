use serde::{Deserialize, Serialize};

use super::Severity;

/// Scores strictly above this are labelled suspicious
pub const SUSPICIOUS_THRESHOLD: f64 = 0.5;

/// Verdict for a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLabel {
    /// Score at or below the threshold
    Safe,
    /// Score above the threshold
    Suspicious,
}

impl RiskLabel {
    /// Label a risk score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > SUSPICIOUS_THRESHOLD {
            Self::Suspicious
        } else {
            Self::Safe
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Safe => Severity::Clear,
            Self::Suspicious => Severity::High,
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "SAFE"),
            Self::Suspicious => write!(f, "SUSPICIOUS"),
        }
    }
}

/// Result of running the URL heuristic over one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlAssessment {
    /// Lower-cased host extracted from the input
    pub domain: String,

    /// Whether the host matched the trust list
    pub is_trusted: bool,

    /// Number of risk signals that fired on the full URL text
    pub matched_signal_count: usize,

    /// Ids of the signals that fired, in table order
    #[serde(default)]
    pub matched_signals: Vec<String>,

    /// Risk score in `[0, 1]`, higher is more suspicious
    pub score: f64,

    /// Verdict derived from `score`
    pub label: RiskLabel,

    /// Distance of `score` from the decision boundary, rescaled to `[0, 1]`
    pub confidence: f64,
}

impl UrlAssessment {
    /// Returns true if the URL was labelled suspicious
    #[must_use]
    pub fn is_suspicious(&self) -> bool {
        self.label == RiskLabel::Suspicious
    }

    /// Confidence as a whole percentage, for badges
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(RiskLabel::from_score(0.5), RiskLabel::Safe);
        assert_eq!(RiskLabel::from_score(0.500_001), RiskLabel::Suspicious);
        assert_eq!(RiskLabel::from_score(0.05), RiskLabel::Safe);
    }

    #[test]
    fn label_serializes_upper_case() {
        let json = serde_json::to_string(&RiskLabel::Suspicious).unwrap();
        assert_eq!(json, "\"SUSPICIOUS\"");
    }

    #[test]
    fn confidence_percent_rounds() {
        let assessment = UrlAssessment {
            domain: "example.com".into(),
            is_trusted: false,
            matched_signal_count: 0,
            matched_signals: Vec::new(),
            score: 0.1,
            label: RiskLabel::Safe,
            confidence: 0.8,
        };
        assert_eq!(assessment.confidence_percent(), 80);
        assert!(!assessment.is_suspicious());
    }
}
