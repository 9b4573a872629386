use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Severity;

/// One breach as returned by a breached-account lookup.
///
/// Field names follow the lookup API's `PascalCase` JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BreachRecord {
    /// Stable breach identifier
    pub name: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Domain of the breached service
    #[serde(default)]
    pub domain: String,

    /// Date the breach occurred (`YYYY-MM-DD`)
    #[serde(default)]
    pub breach_date: String,

    /// When the breach was added to the lookup service
    #[serde(default)]
    pub added_date: Option<String>,

    /// Number of accounts exposed
    #[serde(default)]
    pub pwn_count: u64,

    /// HTML description of the incident
    #[serde(default)]
    pub description: String,

    /// Kinds of data exposed (e.g. "Email addresses", "Passwords")
    #[serde(default)]
    pub data_classes: Vec<String>,

    #[serde(default)]
    pub is_verified: bool,

    #[serde(default)]
    pub is_fabricated: bool,

    #[serde(default)]
    pub is_sensitive: bool,

    #[serde(default)]
    pub is_retired: bool,

    #[serde(default)]
    pub is_spam_list: bool,
}

impl BreachRecord {
    /// Parsed breach date, if well-formed
    #[must_use]
    pub fn breach_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.breach_date, "%Y-%m-%d").ok()
    }

    /// Returns true if passwords were part of the exposed data
    #[must_use]
    pub fn exposes_passwords(&self) -> bool {
        self.data_classes
            .iter()
            .any(|class| class.eq_ignore_ascii_case("passwords"))
    }
}

/// Summary of a breached-account lookup for one email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachReport {
    /// Number of breaches the address appears in
    pub breach_count: usize,

    /// Sum of exposed accounts across those breaches
    pub total_pwned: u64,

    /// Breaches confirmed by the lookup service
    pub verified_count: usize,

    /// Breaches flagged as sensitive
    pub sensitive_count: usize,

    /// Distinct exposed data classes, sorted
    pub data_classes: Vec<String>,

    /// Most recent breach date
    pub most_recent: Option<NaiveDate>,

    /// Overall exposure
    pub severity: Severity,
}

impl BreachReport {
    /// Returns true if the address appeared in at least one breach
    #[must_use]
    pub const fn is_exposed(&self) -> bool {
        self.breach_count > 0
    }
}
