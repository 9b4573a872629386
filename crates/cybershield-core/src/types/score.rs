use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::Severity;
use crate::error::{Result, ShieldError};

/// How urgently a checklist item should be done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Do this first
    High,
    /// Worth doing
    Medium,
    /// Nice to have
    Low,
}

impl Priority {
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::High => Severity::High,
            Self::Medium => Severity::Medium,
            Self::Low => Severity::Low,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A user-completable security practice.
///
/// Only `completed` changes after construction; evaluators read it and
/// never write it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAction {
    /// Unique id within its inventory
    pub id: String,

    /// Human-readable title
    pub label: String,

    /// Grouping used for per-category progress
    pub category: String,

    /// Weight of the action, 1 for uniform checklists. Never zero, so a
    /// non-empty inventory always has points to earn.
    pub points: NonZeroU32,

    /// Whether the user has done it
    #[serde(default)]
    pub completed: bool,

    /// Optional longer explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional urgency, used by checklists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl SecurityAction {
    /// Create a weighted, not yet completed action.
    ///
    /// Returns [`ShieldError::InvalidPoints`] when `points` is zero.
    pub fn weighted(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
        points: u32,
    ) -> Result<Self> {
        let id = id.into();
        let Some(points) = NonZeroU32::new(points) else {
            return Err(ShieldError::InvalidPoints(id));
        };
        Ok(Self::with_points(id, label, category, points))
    }

    /// Create a not yet completed action from an already valid weight.
    pub fn with_points(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
        points: NonZeroU32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: category.into(),
            points,
            completed: false,
            description: None,
            priority: None,
        }
    }

    /// Create a checklist item that counts as a single point.
    pub fn uniform(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::with_points(id, label, category, NonZeroU32::MIN)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub const fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Categorical security level derived from a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityLevel {
    /// Below 20%
    Vulnerable,
    /// 20% to 39%
    AtRisk,
    /// 40% to 59%
    Fair,
    /// 60% to 79%
    Good,
    /// 80% and above
    Excellent,
}

impl SecurityLevel {
    /// Bucket a percentage, checking the highest band first.
    #[must_use]
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            20..=39 => Self::AtRisk,
            _ => Self::Vulnerable,
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Excellent => Severity::Clear,
            Self::Good => Severity::Info,
            Self::Fair => Severity::Medium,
            Self::AtRisk => Severity::High,
            Self::Vulnerable => Severity::Critical,
        }
    }
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vulnerable => write!(f, "Vulnerable"),
            Self::AtRisk => write!(f, "At Risk"),
            Self::Fair => write!(f, "Fair"),
            Self::Good => write!(f, "Good"),
            Self::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Summary of an inventory of security actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAggregate {
    /// Sum of points over all actions
    pub total_possible: u32,

    /// Sum of points over completed actions
    pub total_earned: u32,

    /// `round(100 * earned / possible)`, 0 when nothing is possible
    pub percentage: u8,

    /// Level derived from `percentage`
    pub level: SecurityLevel,

    /// Number of completed actions
    pub completed_items: usize,

    /// Number of actions considered
    pub total_items: usize,
}

impl ScoreAggregate {
    /// Returns true if every action is completed (and there is at least one).
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total_items > 0 && self.completed_items == self.total_items
    }
}
