//! Command implementations.

pub mod breach;
pub mod checklist;
pub mod config;
pub mod password;
pub mod score;
pub mod session;
pub mod url;

use cybershield::{Inventory, TrustMatch, UrlHeuristic};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations (pretty output only)
    pub explain: bool,

    /// Verbose output
    pub verbose: bool,

    /// Show tips after pretty output
    pub show_tips: bool,

    /// Exact trusted-domain matching by default
    pub strict_trust: bool,
}

impl Context {
    /// URL heuristic honouring the configured trust matching.
    pub const fn heuristic(&self, strict: bool) -> UrlHeuristic {
        if strict || self.strict_trust {
            UrlHeuristic::new(TrustMatch::Suffix)
        } else {
            UrlHeuristic::new(TrustMatch::Permissive)
        }
    }

    /// Whether tips should be printed after the result.
    pub const fn tips(&self) -> bool {
        self.show_tips && matches!(self.output_format, OutputFormat::Pretty)
    }
}

/// Mark every listed id completed, failing on the first unknown id.
pub fn mark_done(inventory: &mut Inventory, done: &[String]) -> anyhow::Result<()> {
    for id in done {
        inventory.set_completed(id, true).map_err(|e| {
            let known: Vec<&str> = inventory.actions().iter().map(|a| a.id.as_str()).collect();
            anyhow::anyhow!("{e}\n\nKnown ids: {}", known.join(", "))
        })?;
    }
    Ok(())
}
