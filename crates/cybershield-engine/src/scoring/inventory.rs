//! Canonical action inventories and an owned, toggleable inventory.

use std::num::NonZeroU32;

use cybershield_core::{Priority, Result, ScoreAggregate, SecurityAction, ShieldError};

use super::aggregate::{aggregate, by_category};

/// Only evaluated in const context, so a zero weight fails the build.
const fn points(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(points) => points,
        None => panic!("weighted actions are worth at least one point"),
    }
}

const WEIGHTED_ACTIONS: [(&str, &str, &str, NonZeroU32); 5] = [
    ("password", "Password Strength Check", "Authentication", points(20)),
    ("email", "Email Breach Check", "Data Security", points(15)),
    ("phishing", "Phishing Detection Test", "Awareness", points(15)),
    ("checklist", "Security Checklist", "Best Practices", points(25)),
    ("2fa", "Two-Factor Authentication", "Authentication", points(25)),
];

/// The five weighted security actions (100 points in total).
pub fn security_actions() -> Vec<SecurityAction> {
    WEIGHTED_ACTIONS
        .iter()
        .map(|&(id, label, category, points)| {
            SecurityAction::with_points(id, label, category, points)
        })
        .collect()
}

/// The ten-item best-practices checklist, one point per item.
pub fn checklist() -> Vec<SecurityAction> {
    let item = |id: &str, title: &str, description: &str, category: &str, priority| {
        SecurityAction::uniform(id, title, category)
            .with_description(description)
            .with_priority(priority)
    };

    vec![
        item(
            "2fa",
            "Enable Two-Factor Authentication",
            "Add an extra layer of security to your important accounts",
            "Authentication",
            Priority::High,
        ),
        item(
            "strong-passwords",
            "Use Strong, Unique Passwords",
            "Create complex passwords and use different ones for each account",
            "Passwords",
            Priority::High,
        ),
        item(
            "password-manager",
            "Install a Password Manager",
            "Use tools like Bitwarden, 1Password, or LastPass to manage passwords",
            "Passwords",
            Priority::High,
        ),
        item(
            "software-updates",
            "Keep Software Updated",
            "Regularly update your operating system, browsers, and apps",
            "System Security",
            Priority::High,
        ),
        item(
            "secure-wifi",
            "Use Secure Wi-Fi Networks",
            "Avoid public Wi-Fi for sensitive activities, use VPN when necessary",
            "Network Security",
            Priority::Medium,
        ),
        item(
            "email-verification",
            "Verify Email Senders",
            "Check sender authenticity before clicking links or downloading attachments",
            "Email Security",
            Priority::High,
        ),
        item(
            "backup-data",
            "Regular Data Backups",
            "Backup important files to secure cloud storage or external drives",
            "Data Protection",
            Priority::Medium,
        ),
        item(
            "privacy-settings",
            "Review Privacy Settings",
            "Check and update privacy settings on social media and online accounts",
            "Privacy",
            Priority::Medium,
        ),
        item(
            "antivirus",
            "Use Antivirus Software",
            "Install reputable antivirus software and keep it updated",
            "System Security",
            Priority::Medium,
        ),
        item(
            "secure-browsing",
            "Practice Secure Browsing",
            "Look for HTTPS, avoid suspicious websites, use secure browsers",
            "Web Security",
            Priority::Medium,
        ),
    ]
}

/// An ordered list of actions whose completion flags a caller can flip.
///
/// Id lookup lives here rather than in the aggregator: resolving an
/// unknown id is the owner's failure, aggregation never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    actions: Vec<SecurityAction>,
}

impl Inventory {
    #[must_use]
    pub const fn new(actions: Vec<SecurityAction>) -> Self {
        Self { actions }
    }

    /// Inventory of the five weighted security actions
    #[must_use]
    pub fn security_actions() -> Self {
        Self::new(security_actions())
    }

    /// Inventory of the ten-item checklist
    #[must_use]
    pub fn checklist() -> Self {
        Self::new(checklist())
    }

    #[must_use]
    pub fn actions(&self) -> &[SecurityAction] {
        &self.actions
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SecurityAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Flip an action's completion flag and return the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let action = self.find_mut(id)?;
        action.completed = !action.completed;
        Ok(action.completed)
    }

    pub fn set_completed(&mut self, id: &str, completed: bool) -> Result<()> {
        self.find_mut(id)?.completed = completed;
        Ok(())
    }

    #[must_use]
    pub fn aggregate(&self) -> ScoreAggregate {
        aggregate(&self.actions)
    }

    #[must_use]
    pub fn by_category(&self) -> Vec<(String, ScoreAggregate)> {
        by_category(&self.actions)
    }

    /// Incomplete actions, heaviest first, ties in inventory order.
    #[must_use]
    pub fn pending(&self) -> Vec<&SecurityAction> {
        let mut pending: Vec<_> = self.actions.iter().filter(|a| !a.completed).collect();
        pending.sort_by(|a, b| b.points.cmp(&a.points));
        pending
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut SecurityAction> {
        self.actions
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ShieldError::UnknownAction(id.to_string()))
    }
}
