//! Client-side security heuristics for the CyberShield dashboard.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cybershield::{assess, Inventory};
//!
//! fn main() -> cybershield::Result<()> {
//!     let verdict = assess("http://paypal-verify.example/12345678")?;
//!     println!("{} ({}% confident)", verdict.label, verdict.confidence_percent());
//!
//!     let mut actions = Inventory::security_actions();
//!     actions.toggle("2fa")?;
//!     let score = actions.aggregate();
//!     println!("{}% - {}", score.percentage, score.level);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Includes the session layer
//! - `session` - Session context with a pluggable storage port

#![doc(html_root_url = "https://docs.rs/cybershield/0.3.0")]

// Re-export core types
pub use cybershield_core::*;

// Re-export evaluators
pub use cybershield_engine::{
    aggregate, assess, breach, by_category, checklist, heuristics, password, risk_score, scoring,
    security_actions, Inventory, TrustMatch, UrlHeuristic,
};

// Re-export session layer if enabled
#[cfg(feature = "session")]
pub use cybershield_session as session;

pub use serde;
pub use serde_json;
