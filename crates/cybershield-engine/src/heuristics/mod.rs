//! URL risk heuristics.

pub mod signals;
pub mod trust;
pub mod url_risk;

pub use signals::{RiskSignal, SIGNALS};
pub use trust::{TrustMatch, TRUSTED_DOMAINS};
pub use url_risk::{assess, risk_score, UrlHeuristic};
