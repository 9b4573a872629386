use serde::{Deserialize, Serialize};

use super::Severity;

/// Strength band for a 0-4 estimator score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrengthLabel {
    /// Score 0
    VeryWeak,
    /// Score 1
    Weak,
    /// Score 2
    Fair,
    /// Score 3
    Good,
    /// Score 4
    Strong,
}

impl StrengthLabel {
    /// Band for `score`; anything above 4 is [`StrengthLabel::Strong`].
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::VeryWeak => Severity::Critical,
            Self::Weak | Self::Fair => Severity::Medium,
            Self::Good => Severity::Info,
            Self::Strong => Severity::Clear,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VeryWeak => write!(f, "Very Weak"),
            Self::Weak => write!(f, "Weak"),
            Self::Fair => write!(f, "Fair"),
            Self::Good => write!(f, "Good"),
            Self::Strong => write!(f, "Strong"),
        }
    }
}

/// Estimated strength of one password. The password itself is not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// Estimator score, 0 (weakest) to 4
    pub score: u8,

    /// Band derived from `score`
    pub label: StrengthLabel,

    /// Estimated guesses needed to crack it
    pub guesses: u64,

    /// Human-readable crack time against slow offline hashing (1e4/s)
    pub crack_time: String,

    /// Main weakness, if the estimator found one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    /// How to make it stronger
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl PasswordStrength {
    /// Meter fill: 20% per band, so even score 0 shows something.
    #[must_use]
    pub const fn meter_percent(&self) -> u8 {
        let score = if self.score > 4 { 4 } else { self.score };
        (score + 1) * 20
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisplayVariant;

    #[test]
    fn every_score_has_a_band() {
        let labels: Vec<_> = (0..=4).map(StrengthLabel::from_score).collect();
        assert_eq!(
            labels,
            [
                StrengthLabel::VeryWeak,
                StrengthLabel::Weak,
                StrengthLabel::Fair,
                StrengthLabel::Good,
                StrengthLabel::Strong,
            ]
        );
        assert_eq!(StrengthLabel::from_score(9), StrengthLabel::Strong);
    }

    #[test]
    fn bands_map_to_meter_colours() {
        let variants: Vec<_> = (0..=4)
            .map(|s| StrengthLabel::from_score(s).severity().display_variant())
            .collect();
        assert_eq!(
            variants,
            [
                DisplayVariant::Destructive,
                DisplayVariant::Warning,
                DisplayVariant::Warning,
                DisplayVariant::Primary,
                DisplayVariant::Success,
            ]
        );
    }

    #[test]
    fn labels_read_naturally() {
        assert_eq!(StrengthLabel::VeryWeak.to_string(), "Very Weak");
        let json = serde_json::to_string(&StrengthLabel::VeryWeak).unwrap();
        assert_eq!(json, "\"VERY_WEAK\"");
    }

    #[test]
    fn meter_fills_twenty_percent_per_band() {
        let strength = |score| PasswordStrength {
            score,
            label: StrengthLabel::from_score(score),
            guesses: 1,
            crack_time: String::new(),
            warning: None,
            suggestions: Vec::new(),
        };
        assert_eq!(strength(0).meter_percent(), 20);
        assert_eq!(strength(4).meter_percent(), 100);
        assert_eq!(strength(7).meter_percent(), 100);
    }
}
