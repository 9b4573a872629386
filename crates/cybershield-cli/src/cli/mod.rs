//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;
use crate::telemetry;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;

    telemetry::init(&config.log_level, cli.verbose)?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Explanations would corrupt structured output on stdout
    let explain = (cli.explain || config.explain_by_default)
        && matches!(output_format, OutputFormat::Pretty);

    // Create context for commands
    let ctx = commands::Context {
        output_format,
        explain,
        verbose: cli.verbose,
        show_tips: config.show_tips,
        strict_trust: config.strict_trust,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Url(args) => commands::url::execute(&ctx, &args),
        Commands::Password(args) => commands::password::execute(&ctx, args),
        Commands::Score(args) => commands::score::execute(&ctx, &args),
        Commands::Checklist(args) => commands::checklist::execute(&ctx, &args),
        Commands::Breach(args) => commands::breach::execute(&ctx, &args),
        Commands::Login(args) => commands::session::login(&ctx, args),
        Commands::Signup(args) => commands::session::signup(&ctx, args),
        Commands::Logout => commands::session::logout(&ctx),
        Commands::Whoami => commands::session::whoami(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}
