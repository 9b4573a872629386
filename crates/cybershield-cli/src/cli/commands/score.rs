//! `cybershield score` - Security score over the weighted actions.

use anyhow::Result;
use colored::Colorize;
use cybershield::{Inventory, ScoreAggregate, SecurityAction};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::{mark_done, Context};
use crate::cli::args::ScoreArgs;
use crate::education::Explain;
use crate::output::{self, OutputFormat};

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "")]
    status: String,
    #[tabled(rename = "Action")]
    label: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Points")]
    points: u32,
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    score: ScoreAggregate,
    actions: &'a [SecurityAction],
}

#[derive(Serialize)]
struct ActionCsvRow<'a> {
    id: &'a str,
    label: &'a str,
    category: &'a str,
    points: u32,
    completed: bool,
}

pub fn execute(ctx: &Context, args: &ScoreArgs) -> Result<()> {
    if ctx.explain {
        Explain::score().print();
    }

    let mut inventory = Inventory::security_actions();
    mark_done(&mut inventory, &args.done)?;
    let score = inventory.aggregate();

    match ctx.output_format {
        OutputFormat::Json => {
            let report = ScoreReport { score, actions: inventory.actions() };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Yaml => {
            let report = ScoreReport { score, actions: inventory.actions() };
            println!("{}", serde_yaml::to_string(&report)?);
        }
        OutputFormat::Csv => {
            output::write_csv(inventory.actions().iter().map(|a| ActionCsvRow {
                id: &a.id,
                label: &a.label,
                category: &a.category,
                points: a.points.get(),
                completed: a.completed,
            }))?;
        }
        OutputFormat::Pretty => {
            print_summary(&score, "Security Score");

            let rows: Vec<ActionRow> = inventory
                .actions()
                .iter()
                .map(|a| ActionRow {
                    status: if a.completed { "✓".into() } else { " ".into() },
                    label: a.label.clone(),
                    category: a.category.clone(),
                    points: a.points.get(),
                })
                .collect();
            let table = Table::new(&rows)
                .with(Style::rounded())
                .to_string();
            println!();
            println!("{table}");

            if ctx.tips() {
                if let Some(next) = inventory.pending().first() {
                    println!();
                    println!(
                        "{} {} (+{} points)",
                        "Next step:".bold(),
                        next.label,
                        next.points.get()
                    );
                    println!(
                        "{}",
                        format!("Mark it done with: cybershield score --done {}", next.id).dimmed()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Percentage, bar and level badge shared by score and checklist output.
pub fn print_summary(score: &ScoreAggregate, title: &str) {
    println!("{}", title.bold().underline());
    println!();
    println!(
        "{} {}%  {}",
        output::progress_bar(score.percentage, 20),
        score.percentage.to_string().cyan().bold(),
        output::badge(&score.level.to_string(), score.level.severity())
    );
    println!(
        "{} {}/{} points, {} of {} completed",
        "Progress:".bold(),
        score.total_earned,
        score.total_possible,
        score.completed_items,
        score.total_items
    );
}
