//! `cybershield password` - Estimate password strength.

use anyhow::Result;
use colored::Colorize;
use cybershield::password::estimate_with_inputs;
use cybershield::PasswordStrength;
use dialoguer::Password;
use serde::Serialize;

use super::Context;
use crate::cli::args::PasswordArgs;
use crate::education::Explain;
use crate::output::{self, OutputFormat};

#[derive(Serialize)]
struct StrengthCsvRow<'a> {
    score: u8,
    label: String,
    guesses: u64,
    crack_time: &'a str,
    warning: &'a str,
}

pub fn execute(ctx: &Context, args: PasswordArgs) -> Result<()> {
    if ctx.explain {
        Explain::password().print();
    }

    let password = match args.password {
        Some(p) => p,
        None => Password::new().with_prompt("Password to check").interact()?,
    };
    let inputs: Vec<&str> = args.user_inputs.iter().map(String::as_str).collect();
    let strength = estimate_with_inputs(&password, &inputs)?;

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&strength)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&strength)?),
        OutputFormat::Csv => output::write_csv([StrengthCsvRow {
            score: strength.score,
            label: strength.label.to_string(),
            guesses: strength.guesses,
            crack_time: &strength.crack_time,
            warning: strength.warning.as_deref().unwrap_or_default(),
        }])?,
        OutputFormat::Pretty => print_pretty(ctx, &strength),
    }

    Ok(())
}

fn print_pretty(ctx: &Context, strength: &PasswordStrength) {
    println!(
        "{} {} {}/4",
        output::badge(&strength.label.to_string(), strength.label.severity()),
        output::progress_bar(strength.meter_percent(), 20),
        strength.score
    );
    println!("{} {}", "Time to crack:".bold(), strength.crack_time);
    println!("{} {}", "Guesses:".bold(), strength.guesses.to_string().cyan());

    if let Some(warning) = &strength.warning {
        println!();
        println!("{} {}", "Warning:".yellow().bold(), warning);
    }

    if !strength.suggestions.is_empty() {
        println!();
        println!("{}", "Suggestions:".bold());
        for suggestion in &strength.suggestions {
            println!("  - {suggestion}");
        }
    }

    if ctx.tips() && strength.score >= 3 {
        println!();
        println!(
            "{}",
            "Mark it done with: cybershield score --done password".dimmed()
        );
    }
}
