//! `cybershield breach` - Summarize a saved breached-account lookup.

use anyhow::{Context as _, Result};
use colored::Colorize;
use cybershield::breach::{interpret_lookup, summarize, validate_email};
use cybershield::{BreachRecord, BreachReport};
use serde::Serialize;

use super::Context;
use crate::cli::args::BreachArgs;
use crate::education::Explain;
use crate::output::{self, OutputFormat};

#[derive(Serialize)]
struct BreachOutput<'a> {
    email: &'a str,
    report: &'a BreachReport,
    breaches: &'a [BreachRecord],
}

#[derive(Serialize)]
struct BreachCsvRow<'a> {
    name: &'a str,
    domain: &'a str,
    breach_date: &'a str,
    pwn_count: u64,
    data_classes: String,
    verified: bool,
}

pub fn execute(ctx: &Context, args: &BreachArgs) -> Result<()> {
    if ctx.explain {
        Explain::breach(&args.email).print();
    }

    validate_email(&args.email)?;

    let body = std::fs::read_to_string(&args.response)
        .with_context(|| format!("reading {}", args.response.display()))?;
    let breaches = interpret_lookup(args.status, &body)?;
    let report = summarize(&breaches);

    match ctx.output_format {
        OutputFormat::Json => {
            let out = BreachOutput { email: &args.email, report: &report, breaches: &breaches };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Yaml => {
            let out = BreachOutput { email: &args.email, report: &report, breaches: &breaches };
            println!("{}", serde_yaml::to_string(&out)?);
        }
        OutputFormat::Csv => {
            output::write_csv(breaches.iter().map(|b| BreachCsvRow {
                name: &b.name,
                domain: &b.domain,
                breach_date: &b.breach_date,
                pwn_count: b.pwn_count,
                data_classes: b.data_classes.join("; "),
                verified: b.is_verified,
            }))?;
        }
        OutputFormat::Pretty => print_pretty(ctx, &args.email, &report, &breaches),
    }

    Ok(())
}

fn print_pretty(ctx: &Context, email: &str, report: &BreachReport, breaches: &[BreachRecord]) {
    if !report.is_exposed() {
        println!(
            "{} {} was not found in any known data breach.",
            output::badge("Good news", report.severity),
            email.bold()
        );
        return;
    }

    println!(
        "{} {} was found in {} data breach{}.",
        output::badge("Exposed", report.severity),
        email.bold(),
        report.breach_count.to_string().red().bold(),
        if report.breach_count == 1 { "" } else { "es" }
    );
    println!(
        "{} {}",
        "Accounts affected:".bold(),
        report.total_pwned.to_string().cyan()
    );
    if let Some(date) = report.most_recent {
        println!("{} {}", "Most recent:".bold(), date);
    }
    println!();

    for breach in breaches {
        let title = if breach.title.is_empty() { &breach.name } else { &breach.title };
        println!("{} {}", title.bold(), breach.domain.dimmed());
        println!(
            "  {} {} accounts",
            breach.breach_date,
            breach.pwn_count.to_string().red()
        );
        if !breach.data_classes.is_empty() {
            println!("  {}", breach.data_classes.join(", ").yellow());
        }
    }

    if ctx.tips() {
        println!();
        println!(
            "{}",
            "Change passwords reused on these services and enable two-factor authentication.".dimmed()
        );
    }
}
