//! cybershield - security heuristics from the command line
//!
//! Score URLs, track security practices, and read breach lookups.

use anyhow::Result;

fn main() -> Result<()> {
    cybershield_cli::run()
}
