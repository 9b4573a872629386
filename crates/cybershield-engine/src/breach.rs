//! Breached-account lookup interpretation.
//!
//! The lookup itself is the caller's concern; this module only validates
//! the address, interprets a response that has already been received, and
//! folds the returned breaches into a [`BreachReport`].

use std::collections::BTreeSet;

use cybershield_core::{BreachRecord, BreachReport, Result, Severity, ShieldError};
use tracing::debug;

/// Basic shape check for an email address: non-empty and contains `@`.
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ShieldError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Interpret a breached-account lookup response.
///
/// `404` means the address is in no known breach; `200` carries a JSON
/// array of breaches. Any other status is an error.
pub fn interpret_lookup(status: u16, body: &str) -> Result<Vec<BreachRecord>> {
    match status {
        404 => Ok(Vec::new()),
        200 => Ok(serde_json::from_str(body)?),
        other => Err(ShieldError::BreachLookup { status: other }),
    }
}

/// Fold a list of breaches into a report.
pub fn summarize(breaches: &[BreachRecord]) -> BreachReport {
    let data_classes: BTreeSet<&str> = breaches
        .iter()
        .flat_map(|b| b.data_classes.iter().map(String::as_str))
        .collect();

    let report = BreachReport {
        breach_count: breaches.len(),
        total_pwned: breaches.iter().map(|b| b.pwn_count).fold(0, u64::saturating_add),
        verified_count: breaches.iter().filter(|b| b.is_verified).count(),
        sensitive_count: breaches.iter().filter(|b| b.is_sensitive).count(),
        data_classes: data_classes.into_iter().map(String::from).collect(),
        most_recent: breaches.iter().filter_map(BreachRecord::breach_day).max(),
        severity: exposure(breaches),
    };

    debug!(
        breaches = report.breach_count,
        pwned = report.total_pwned,
        severity = %report.severity,
        "summarized breach lookup"
    );

    report
}

fn exposure(breaches: &[BreachRecord]) -> Severity {
    if breaches.is_empty() {
        Severity::Clear
    } else if breaches.iter().any(|b| b.is_sensitive || b.exposes_passwords()) {
        Severity::Critical
    } else {
        Severity::High
    }
}
