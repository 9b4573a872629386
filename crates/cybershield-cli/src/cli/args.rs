//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Security heuristics from the command line
///
/// Check URLs for phishing patterns, track your security score, and
/// summarize breach lookups. Use --explain on any command to learn how
/// the verdict is reached.
#[derive(Parser, Debug)]
#[command(name = "cybershield")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a URL for phishing patterns
    Url(UrlArgs),

    /// Estimate password strength
    Password(PasswordArgs),

    /// Security score over the weighted security actions
    Score(ScoreArgs),

    /// Progress through the security best-practices checklist
    Checklist(ChecklistArgs),

    /// Summarize a saved breached-account lookup
    Breach(BreachArgs),

    /// Sign in (demo: any email, password of 6+ characters)
    Login(LoginArgs),

    /// Create an account and sign in
    Signup(SignupArgs),

    /// Sign out and forget the remembered user
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// URL command
// ============================================================================

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// URL to check (scheme optional, e.g. "example.com/login")
    pub url: String,

    /// Only trust exact trusted domains and their subdomains
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Password command
// ============================================================================

#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// Password to check (prompted for when omitted)
    #[arg(short, long, env = "CYBERSHIELD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Words the password should not be built from (name, email, ...)
    #[arg(short = 'u', long = "user-input", value_name = "WORD")]
    pub user_inputs: Vec<String>,
}

// ============================================================================
// Score / checklist commands
// ============================================================================

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Ids of completed actions (password, email, phishing, checklist, 2fa)
    #[arg(short, long = "done", value_name = "ID")]
    pub done: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ChecklistArgs {
    /// Ids of completed checklist items
    #[arg(short, long = "done", value_name = "ID")]
    pub done: Vec<String>,

    /// Break progress down per category
    #[arg(long)]
    pub by_category: bool,
}

// ============================================================================
// Breach command
// ============================================================================

#[derive(Args, Debug)]
pub struct BreachArgs {
    /// Email address the lookup was made for
    pub email: String,

    /// File containing the lookup response body
    #[arg(short, long, value_name = "FILE")]
    pub response: PathBuf,

    /// HTTP status of the lookup response
    #[arg(short, long, default_value = "200")]
    pub status: u16,
}

// ============================================================================
// Session commands
// ============================================================================

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address
    pub email: String,

    /// Password (prompted for when omitted)
    #[arg(short, long, env = "CYBERSHIELD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Stay signed in between runs
    #[arg(short, long)]
    pub remember: bool,
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Password (prompted for when omitted)
    #[arg(short, long, env = "CYBERSHIELD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., output_format, strict_trust)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
