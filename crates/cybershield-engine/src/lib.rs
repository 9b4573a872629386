//! # cybershield-engine
//!
//! Pure, deterministic evaluators behind the CyberShield dashboard.
//!
//! Nothing in this crate performs I/O, holds mutable global state, or
//! depends on the session layer. Every evaluator reads its input and a
//! set of static tables and returns a fresh record owned by the caller,
//! so all of them are safe to call from any number of threads at once.
//!
//! ## Evaluators
//!
//! - **URL risk heuristic** ([`assess`], [`UrlHeuristic`]): raw URL text
//!   -> [`UrlAssessment`](cybershield_core::UrlAssessment) with a score in
//!   `[0, 1]`, a SAFE/SUSPICIOUS label and the signals that fired
//! - **Security score aggregator** ([`aggregate`], [`Inventory`]): a list of
//!   weighted actions -> [`ScoreAggregate`](cybershield_core::ScoreAggregate)
//!   with a percentage and a security level. Uniform checklists are the
//!   weight-1 case of the same algorithm.
//! - **Password strength** ([`password::estimate`]): a password ->
//!   [`PasswordStrength`](cybershield_core::PasswordStrength) with a 0-4
//!   score, a band and the estimator's feedback
//! - **Breach summary** ([`breach::summarize`]): a breached-account lookup
//!   response -> [`BreachReport`](cybershield_core::BreachReport)
//!
//! ## Scoring
//!
//! ```text
//! trusted host          -> 0.05
//! n > 0 signals fired   -> min(0.90, 0.30 + 0.20 * n)
//! otherwise             -> 0.10
//! label = SUSPICIOUS iff score > 0.5
//! ```

pub mod breach;
pub mod heuristics;
pub mod password;
pub mod scoring;

pub use heuristics::{assess, risk_score, TrustMatch, UrlHeuristic};
pub use scoring::{aggregate, by_category, checklist, security_actions, Inventory};
