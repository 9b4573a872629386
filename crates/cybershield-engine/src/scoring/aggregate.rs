//! Weighted aggregation of security actions.
//!
//! One pass sums the points of every action and of the completed ones.
//! A uniform checklist is the same computation with every item worth one
//! point, so there is a single implementation for both inventories.

use cybershield_core::{ScoreAggregate, SecurityAction, SecurityLevel};
use tracing::debug;

/// Aggregate an ordered sequence of actions.
///
/// An empty sequence yields `0/0`, `0%` and [`SecurityLevel::Vulnerable`].
/// Every action is worth at least one point, so `total_possible` is zero
/// only for an empty sequence.
pub fn aggregate<'a, I>(actions: I) -> ScoreAggregate
where
    I: IntoIterator<Item = &'a SecurityAction>,
{
    let mut total_possible: u32 = 0;
    let mut total_earned: u32 = 0;
    let mut completed_items = 0;
    let mut total_items = 0;

    for action in actions {
        total_items += 1;
        total_possible = total_possible.saturating_add(action.points.get());
        if action.completed {
            completed_items += 1;
            total_earned = total_earned.saturating_add(action.points.get());
        }
    }

    let percentage = percentage(total_earned, total_possible);
    let level = SecurityLevel::from_percentage(percentage);

    debug!(
        total_possible,
        total_earned,
        percentage,
        ?level,
        "aggregated security actions"
    );

    ScoreAggregate {
        total_possible,
        total_earned,
        percentage,
        level,
        completed_items,
        total_items,
    }
}

/// Per-category aggregates, categories in order of first appearance.
pub fn by_category(actions: &[SecurityAction]) -> Vec<(String, ScoreAggregate)> {
    let mut categories: Vec<&str> = Vec::new();
    for action in actions {
        if !categories.contains(&action.category.as_str()) {
            categories.push(&action.category);
        }
    }

    categories
        .into_iter()
        .map(|category| {
            let score = aggregate(actions.iter().filter(|a| a.category == category));
            (category.to_string(), score)
        })
        .collect()
}

/// `round(100 * earned / possible)` with halves rounded up; 0 when `possible` is 0.
#[must_use]
pub fn percentage(earned: u32, possible: u32) -> u8 {
    if possible == 0 {
        return 0;
    }
    let earned = u64::from(earned.min(possible));
    let possible = u64::from(possible);
    let rounded = (200 * earned + possible) / (2 * possible);
    u8::try_from(rounded).unwrap_or(100)
}
