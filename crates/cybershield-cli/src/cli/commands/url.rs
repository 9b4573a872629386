//! `cybershield url` - Check a URL for phishing patterns.

use anyhow::Result;
use colored::Colorize;
use cybershield::heuristics::SIGNALS;
use cybershield::UrlAssessment;
use serde::Serialize;

use super::Context;
use crate::cli::args::UrlArgs;
use crate::education::Explain;
use crate::output::{self, OutputFormat};

#[derive(Serialize)]
struct UrlRow<'a> {
    domain: &'a str,
    label: String,
    score: f64,
    confidence: f64,
    trusted: bool,
    patterns: usize,
}

pub fn execute(ctx: &Context, args: &UrlArgs) -> Result<()> {
    let heuristic = ctx.heuristic(args.strict);

    if ctx.explain {
        Explain::url(heuristic.trust_match()).print();
    }

    let assessment = heuristic.assess(&args.url)?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&assessment)?);
        }
        OutputFormat::Csv => {
            output::write_csv([UrlRow {
                domain: &assessment.domain,
                label: assessment.label.to_string(),
                score: assessment.score,
                confidence: assessment.confidence,
                trusted: assessment.is_trusted,
                patterns: assessment.matched_signal_count,
            }])?;
        }
        OutputFormat::Pretty => print_pretty(ctx, &assessment),
    }

    Ok(())
}

fn print_pretty(ctx: &Context, assessment: &UrlAssessment) {
    let label = assessment.label;
    println!(
        "{} {}",
        output::badge(&label.to_string(), label.severity()),
        assessment.domain.bold()
    );
    println!(
        "{} {}%",
        "Confidence:".bold(),
        assessment.confidence_percent().to_string().cyan()
    );
    println!("{} {:.2}", "Risk score:".bold(), assessment.score);

    let trust = if assessment.is_trusted {
        "Trusted domain".green()
    } else {
        "Unknown domain".yellow()
    };
    println!("{} {}", "Domain:".bold(), trust);

    if assessment.matched_signal_count > 0 {
        println!();
        println!(
            "{} suspicious pattern{} detected:",
            assessment.matched_signal_count.to_string().red().bold(),
            if assessment.matched_signal_count == 1 { "" } else { "s" }
        );
        for id in &assessment.matched_signals {
            let description = SIGNALS
                .iter()
                .find(|s| s.id == id.as_str())
                .map_or("", |s| s.description);
            println!("  {} {}", id.yellow(), description.dimmed());
        }
    }

    if ctx.tips() {
        println!();
        if assessment.is_suspicious() {
            println!("{}", "Do not enter credentials on this site. Navigate to the service directly instead.".dimmed());
        } else {
            println!("{}", "Heuristics cannot prove a site is safe. Check the address bar before signing in.".dimmed());
        }
    }
}
