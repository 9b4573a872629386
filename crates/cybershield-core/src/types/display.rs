use serde::{Deserialize, Serialize};

/// How urgent a finding is, independent of how it gets rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing to act on
    Clear,
    /// Informational, mildly positive
    Info,
    /// Low urgency
    Low,
    /// Needs attention soon
    Medium,
    /// Needs attention now
    High,
    /// Actively exposed
    Critical,
}

impl Severity {
    /// Map a severity to the badge variant a front end should use.
    #[must_use]
    pub const fn display_variant(self) -> DisplayVariant {
        match self {
            Self::Critical | Self::High => DisplayVariant::Destructive,
            Self::Medium => DisplayVariant::Warning,
            Self::Low => DisplayVariant::Secondary,
            Self::Info => DisplayVariant::Primary,
            Self::Clear => DisplayVariant::Success,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Info => write!(f, "info"),
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Badge/colour family used to render a severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayVariant {
    /// Red
    Destructive,
    /// Amber
    Warning,
    /// Brand colour
    Primary,
    /// Muted
    Secondary,
    /// Green
    Success,
}

impl std::fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Destructive => write!(f, "destructive"),
            Self::Warning => write!(f, "warning"),
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
            Self::Success => write!(f, "success"),
        }
    }
}
