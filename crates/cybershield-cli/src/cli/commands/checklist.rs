//! `cybershield checklist` - Progress through the best-practices checklist.

use anyhow::Result;
use colored::Colorize;
use cybershield::{Inventory, ScoreAggregate, SecurityAction, Severity};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::score::print_summary;
use super::{mark_done, Context};
use crate::cli::args::ChecklistArgs;
use crate::education::Explain;
use crate::output::{self, OutputFormat};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Done")]
    done: String,
    #[tabled(rename = "Progress")]
    percentage: String,
    #[tabled(rename = "Level")]
    level: String,
}

#[derive(Serialize)]
struct ChecklistReport<'a> {
    score: ScoreAggregate,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<CategoryScore>>,
    items: &'a [SecurityAction],
}

#[derive(Serialize)]
struct CategoryScore {
    category: String,
    #[serde(flatten)]
    score: ScoreAggregate,
}

#[derive(Serialize)]
struct ItemCsvRow<'a> {
    id: &'a str,
    title: &'a str,
    category: &'a str,
    priority: String,
    completed: bool,
}

pub fn execute(ctx: &Context, args: &ChecklistArgs) -> Result<()> {
    if ctx.explain {
        Explain::checklist().print();
    }

    let mut inventory = Inventory::checklist();
    mark_done(&mut inventory, &args.done)?;
    let score = inventory.aggregate();

    let categories = args.by_category.then(|| {
        inventory
            .by_category()
            .into_iter()
            .map(|(category, score)| CategoryScore { category, score })
            .collect::<Vec<_>>()
    });

    match ctx.output_format {
        OutputFormat::Json => {
            let report = ChecklistReport { score, categories, items: inventory.actions() };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Yaml => {
            let report = ChecklistReport { score, categories, items: inventory.actions() };
            println!("{}", serde_yaml::to_string(&report)?);
        }
        OutputFormat::Csv => {
            output::write_csv(inventory.actions().iter().map(|a| ItemCsvRow {
                id: &a.id,
                title: &a.label,
                category: &a.category,
                priority: a.priority.map(|p| p.to_string()).unwrap_or_default(),
                completed: a.completed,
            }))?;
        }
        OutputFormat::Pretty => print_pretty(ctx, &inventory, &score, categories.as_deref()),
    }

    Ok(())
}

fn print_pretty(
    ctx: &Context,
    inventory: &Inventory,
    score: &ScoreAggregate,
    categories: Option<&[CategoryScore]>,
) {
    print_summary(score, "Security Checklist");
    println!();

    for item in inventory.actions() {
        let mark = if item.completed { "[x]".green() } else { "[ ]".normal() };
        let priority = item.priority.map_or_else(String::new, |p| {
            output::badge(&p.to_string(), p.severity()).to_string()
        });
        println!("  {} {} {} {}", mark, item.label, priority, item.id.dimmed());
    }

    if let Some(categories) = categories {
        let rows: Vec<CategoryRow> = categories
            .iter()
            .map(|c| CategoryRow {
                category: c.category.clone(),
                done: format!("{}/{}", c.score.completed_items, c.score.total_items),
                percentage: format!("{}%", c.score.percentage),
                level: c.score.level.to_string(),
            })
            .collect();

        let table = Table::new(&rows)
            .with(Style::rounded())
            .to_string();
        println!();
        println!("{table}");
    }

    if score.is_complete() {
        println!();
        println!(
            "{}",
            output::badge("All practices in place", Severity::Clear)
        );
    } else if ctx.tips() {
        let high: Vec<&str> = inventory
            .pending()
            .into_iter()
            .filter(|a| a.priority.is_some_and(|p| p.severity() == Severity::High))
            .map(|a| a.id.as_str())
            .collect();
        if !high.is_empty() {
            println!();
            println!("{} {}", "High priority:".bold(), high.join(", ").red());
        }
    }
}
