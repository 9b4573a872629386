//! URL risk scoring.

use std::borrow::Cow;

use cybershield_core::{Result, RiskLabel, ShieldError, UrlAssessment, SUSPICIOUS_THRESHOLD};
use tracing::debug;
use url::Url;

use super::signals;
use super::trust::TrustMatch;

/// Score for a URL with no trust match and no signals
const BASE_SCORE: f64 = 0.10;
/// Score for a trusted host, regardless of signals
const TRUSTED_SCORE: f64 = 0.05;
const SIGNAL_FLOOR: f64 = 0.30;
const SIGNAL_WEIGHT: f64 = 0.20;
const MAX_SCORE: f64 = 0.90;

/// URL risk evaluator with a configurable trust-matching strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlHeuristic {
    trust: TrustMatch,
}

impl UrlHeuristic {
    #[must_use]
    pub const fn new(trust: TrustMatch) -> Self {
        Self { trust }
    }

    /// Trust-matching strategy in use
    #[must_use]
    pub const fn trust_match(&self) -> TrustMatch {
        self.trust
    }

    /// Assess a raw URL.
    ///
    /// Input without a scheme is parsed as `https://<input>`. Signals run
    /// over the lower-cased input as typed, so the added scheme never
    /// contributes to the score.
    pub fn assess(&self, raw_url: &str) -> Result<UrlAssessment> {
        let raw = raw_url.trim();
        if raw.is_empty() {
            return Err(ShieldError::InvalidUrl("URL is empty".into()));
        }

        let domain = extract_domain(raw)?;
        let is_trusted = self.trust.is_trusted(&domain);

        let text = raw.to_lowercase();
        let matched: Vec<String> = signals::matching(&text)
            .into_iter()
            .map(String::from)
            .collect();

        let score = risk_score(is_trusted, matched.len());
        let confidence = ((score - SUSPICIOUS_THRESHOLD).abs() * 2.0).clamp(0.0, 1.0);
        let label = RiskLabel::from_score(score);

        debug!(
            %domain,
            is_trusted,
            signals = matched.len(),
            score,
            %label,
            trust = %self.trust,
            "assessed URL"
        );

        Ok(UrlAssessment {
            domain,
            is_trusted,
            matched_signal_count: matched.len(),
            matched_signals: matched,
            score,
            label,
            confidence,
        })
    }
}

/// Assess a raw URL with the default (permissive) trust matching.
pub fn assess(raw_url: &str) -> Result<UrlAssessment> {
    UrlHeuristic::default().assess(raw_url)
}

/// Risk score as a function of trust and the number of signals that fired.
///
/// Trust takes precedence over every signal.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
pub fn risk_score(is_trusted: bool, matched_signal_count: usize) -> f64 {
    if is_trusted {
        TRUSTED_SCORE
    } else if matched_signal_count > 0 {
        (SIGNAL_FLOOR + SIGNAL_WEIGHT * matched_signal_count as f64).min(MAX_SCORE)
    } else {
        BASE_SCORE
    }
}

/// Lower-cased host of `raw`, adding `https://` when no scheme is present.
fn extract_domain(raw: &str) -> Result<String> {
    let candidate = if raw.contains("://") {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("https://{raw}"))
    };

    let url = Url::parse(&candidate)
        .map_err(|e| ShieldError::InvalidUrl(format!("{raw}: {e}")))?;

    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| ShieldError::InvalidUrl(format!("{raw}: no host")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(matches!(assess(""), Err(ShieldError::InvalidUrl(_))));
        assert!(matches!(assess("   "), Err(ShieldError::InvalidUrl(_))));
    }

    #[test]
    fn unparseable_input_is_invalid() {
        assert!(matches!(assess("http://"), Err(ShieldError::InvalidUrl(_))));
        assert!(matches!(assess("exa mple.com"), Err(ShieldError::InvalidUrl(_))));
        assert!(matches!(assess("https://[::1"), Err(ShieldError::InvalidUrl(_))));
    }

    #[test]
    fn bare_ip_fires_ipv4_signal() {
        let result = assess("192.168.1.1").unwrap();
        assert_eq!(result.domain, "192.168.1.1");
        assert!(result.matched_signal_count >= 1);
        assert!(result.matched_signals.iter().any(|s| s == "ipv4-address"));
        assert!(!result.is_trusted);
    }

    #[test]
    fn plain_unknown_domain_gets_base_score() {
        let result = assess("example.org").unwrap();
        assert_eq!(result.domain, "example.org");
        assert_eq!(result.matched_signal_count, 0);
        assert!(approx(result.score, 0.10));
        assert_eq!(result.label, RiskLabel::Safe);
        assert!(approx(result.confidence, 0.8));
    }

    #[test]
    fn trust_overrides_signals() {
        let result = assess("https://accounts.google.com/secure-bank/urgent-action/99999").unwrap();
        assert!(result.is_trusted);
        assert!(result.matched_signal_count >= 3);
        assert!(approx(result.score, 0.05));
        assert_eq!(result.label, RiskLabel::Safe);
        assert!(approx(result.confidence, 0.9));
    }

    #[test]
    fn hosts_containing_trusted_entry_are_trusted() {
        for url in ["google.com", "https://www.google.com", "google.com.evil.example/bit.ly"] {
            let result = assess(url).unwrap();
            assert!(result.is_trusted, "{url}");
            assert!(approx(result.score, 0.05), "{url}");
        }
    }

    #[test]
    fn suffix_mode_rejects_spoofed_host() {
        let strict = UrlHeuristic::new(TrustMatch::Suffix);
        let result = strict.assess("google.com.evil.example/bit.ly").unwrap();
        assert!(!result.is_trusted);
        assert!(result.score >= 0.5);

        let result = strict.assess("https://mail.google.com").unwrap();
        assert!(result.is_trusted);
    }

    #[test]
    fn shorteners_score_at_least_half() {
        for url in ["bit.ly/abc", "https://tinyurl.com/xyz", "https://t.co.example/q", "goo.gl/maps"] {
            let result = assess(url).unwrap();
            assert!(!result.is_trusted, "{url}");
            assert!(result.matched_signal_count >= 1, "{url}");
            assert!(result.score >= 0.5, "{url}");
        }
    }

    #[test]
    fn bare_t_co_host_is_swallowed_by_permissive_trust() {
        // "microsoft.com" contains "t.co"
        let result = assess("t.co/q").unwrap();
        assert!(result.is_trusted);
        assert!(approx(result.score, 0.05));

        let strict = UrlHeuristic::new(TrustMatch::Suffix).assess("t.co/q").unwrap();
        assert!(!strict.is_trusted);
        assert!(approx(strict.score, 0.5));
    }

    #[test]
    fn single_signal_sits_on_the_boundary() {
        let result = assess("bit.ly/abc").unwrap();
        assert_eq!(result.matched_signal_count, 1);
        assert!(approx(result.score, 0.5));
        assert_eq!(result.label, RiskLabel::Safe);
        assert!(approx(result.confidence, 0.0));
    }

    #[test]
    fn two_signals_are_suspicious() {
        let result = assess("http://paypal-verify.example/12345678").unwrap();
        assert_eq!(result.matched_signal_count, 2);
        assert!(approx(result.score, 0.7));
        assert_eq!(result.label, RiskLabel::Suspicious);
        assert!(approx(result.confidence, 0.4));
    }

    #[test]
    fn score_caps_at_ninety_percent() {
        assert!(approx(risk_score(false, 3), 0.9));
        assert!(approx(risk_score(false, 8), 0.9));
        assert!(approx(risk_score(true, 8), 0.05));
        assert!(approx(risk_score(false, 0), 0.10));
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let result = assess("HTTPS://Secure-Bank.Example").unwrap();
        assert_eq!(result.domain, "secure-bank.example");
        assert!(result.matched_signals.iter().any(|s| s == "fake-banking"));
    }

    #[test]
    fn added_scheme_does_not_count() {
        let result = assess("example.org").unwrap();
        assert!(result.matched_signals.is_empty());
    }

    #[test]
    fn assessment_is_deterministic() {
        let url = "http://203.0.113.7/amazon/account/verify";
        assert_eq!(assess(url).unwrap(), assess(url).unwrap());
    }

    #[test]
    fn count_matches_reported_ids() {
        let result = assess("http://10.0.0.1/urgent/action").unwrap();
        assert_eq!(result.matched_signal_count, result.matched_signals.len());
    }
}
