//! # cybershield-cli
//!
//! Command-line front end for the CyberShield evaluators.
//!
//! ## Features
//!
//! - **URL check**: Phishing heuristics with a SAFE/SUSPICIOUS verdict
//! - **Security score**: Weighted security actions and the ten-item checklist
//! - **Breach report**: Summaries of saved breached-account lookups
//! - **Session**: Demo sign-in remembered between runs
//! - **Educational mode**: `--explain` describes how each verdict is reached
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod output;
pub mod telemetry;

pub use cli::run;
