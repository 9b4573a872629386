//! Core types for the CyberShield security toolkit.
//!
//! This crate provides the foundational types shared by the evaluators,
//! the session layer, and the command-line front end:
//!
//! - **Types**: URL assessments, security actions and score aggregates,
//!   breach reports, severities and their display variants
//! - **Errors**: A single error taxonomy with [`ShieldError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use cybershield_core::{ScoreAggregate, SecurityLevel};
//!
//! fn badge(score: &ScoreAggregate) -> String {
//!     format!("{}% {}", score.percentage, score.level)
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/cybershield-core/0.3.0")]

mod error;
pub mod types;

pub use error::{Result, ShieldError};
pub use types::*;
