//! Fixed table of URL risk signals.
//!
//! Each signal is a single pattern evaluated against the lower-cased URL
//! text. The table is compiled once on first use and never changes, so
//! the number of signals that fire is a pure function of the input.

use once_cell::sync::Lazy;
use regex::Regex;

/// A named boolean detector over normalized URL text.
#[derive(Debug)]
pub struct RiskSignal {
    /// Stable identifier reported in assessments
    pub id: &'static str,
    /// What the pattern is looking for
    pub description: &'static str,
    pattern: Regex,
}

impl RiskSignal {
    fn new(id: &'static str, description: &'static str, pattern: &str) -> Self {
        Self {
            id,
            description,
            pattern: Regex::new(pattern).expect("static signal pattern compiles"),
        }
    }

    /// Returns true if the signal fires on `text`.
    ///
    /// `text` is expected to be lower-cased already.
    #[must_use]
    pub fn test(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Every risk signal, in reporting order.
pub static SIGNALS: Lazy<Vec<RiskSignal>> = Lazy::new(|| {
    vec![
        RiskSignal::new(
            "ipv4-address",
            "Bare dotted-quad IP address instead of a host name",
            r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}",
        ),
        RiskSignal::new(
            "long-letter-run",
            "20 or more consecutive letters, typical of generated subdomains",
            r"[a-z]{20,}",
        ),
        RiskSignal::new(
            "long-digit-run",
            "5 or more consecutive digits",
            r"[0-9]{5,}",
        ),
        RiskSignal::new(
            "url-shortener",
            "Link shortener hiding the real destination",
            r"bit\.ly|tinyurl|t\.co|goo\.gl",
        ),
        RiskSignal::new(
            "fake-banking",
            "\"secure\" and \"bank\" together",
            r"secure.*bank|bank.*secure",
        ),
        RiskSignal::new(
            "fake-paypal",
            "\"paypal\" and \"verify\" together",
            r"paypal.*verify|verify.*paypal",
        ),
        RiskSignal::new(
            "fake-amazon",
            "\"amazon\" and \"account\" together",
            r"amazon.*account|account.*amazon",
        ),
        RiskSignal::new(
            "urgency",
            "\"urgent\" and \"action\" together",
            r"urgent.*action|action.*urgent",
        ),
    ]
});

/// Ids of the signals that fire on `text`, in table order.
#[must_use]
pub fn matching(text: &str) -> Vec<&'static str> {
    SIGNALS
        .iter()
        .filter(|signal| signal.test(text))
        .map(|signal| signal.id)
        .collect()
}
