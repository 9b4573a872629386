//! Educational features: explanations of how each verdict is reached.

use colored::Colorize;
use cybershield::heuristics::{TRUSTED_DOMAINS, SIGNALS};
use cybershield::TrustMatch;

/// Command explanation builder.
pub struct Explain {
    description: String,
    what_happens: Vec<String>,
    notes: Vec<String>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            what_happens: Vec::new(),
            notes: Vec::new(),
        }
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn note(mut self, note: &str) -> Self {
        self.notes.push(note.to_string());
        self
    }

    /// Print the explanation to stdout.
    pub fn print(&self) {
        println!();
        println!("{}", "=== What This Does ===".bold().cyan());
        println!("{}", self.description);
        println!();

        if !self.what_happens.is_empty() {
            println!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
        }

        for note in &self.notes {
            println!("{} {}", "Note:".bold(), note.dimmed());
        }

        println!();
        println!("{}", "=== Results ===".bold().cyan());
        println!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn url(trust: TrustMatch) -> Self {
        let signals: Vec<&str> = SIGNALS.iter().map(|s| s.description).collect();
        let trust_rule = match trust {
            TrustMatch::Permissive => "Host is trusted if it contains, or is contained in, a trusted domain",
            TrustMatch::Suffix => "Host is trusted only if it is a trusted domain or one of its subdomains",
        };

        Self::new("Scores a URL for common phishing patterns. Runs entirely offline.")
            .step("Adds https:// if no scheme was given and extracts the host")
            .step(trust_rule)
            .step(&format!("Checks {} patterns: {}", signals.len(), signals.join("; ")))
            .step("Trusted -> 5%, N patterns -> min(90%, 30% + 20% x N), otherwise 10%")
            .step("Above 50% is SUSPICIOUS; confidence is the distance from 50%, doubled")
            .note(&format!("Trusted domains: {}", TRUSTED_DOMAINS.join(", ")))
    }

    pub fn password() -> Self {
        Self::new("Estimates how hard a password is to guess. Runs entirely offline.")
            .step("Looks for dictionary words, names, keyboard walks, dates and repeats")
            .step("Estimates the guesses an attacker needs and turns them into a 0-4 score")
            .step("0 Very Weak, 1 Weak, 2 Fair, 3 Good, 4 Strong")
            .note("The password is never stored or logged")
    }

    pub fn score() -> Self {
        Self::new("Computes your security score from five weighted security actions (100 points).")
            .step("Adds up the points of every action and of the ones you completed")
            .step("Percentage = round(100 x earned / possible)")
            .step("80%+ Excellent, 60%+ Good, 40%+ Fair, 20%+ At Risk, below that Vulnerable")
    }

    pub fn checklist() -> Self {
        Self::new("Tracks the ten security best practices, one point each.")
            .step("Every item counts the same; the score is completed / total")
            .step("Levels use the same bands as the security score")
            .note("Priorities (high/medium/low) only order the to-do list, they do not change the score")
    }

    pub fn breach(email: &str) -> Self {
        Self::new(&format!(
            "Summarizes a breached-account lookup response saved for {email}."
        ))
        .step("Status 404 means the address is in no known breach")
        .step("Status 200 carries the list of breaches as JSON")
        .step("Exposed passwords or sensitive breaches rate critical, any other breach high")
        .note("No request is made; save the lookup response to a file first")
    }

    pub fn login() -> Self {
        Self::new("Signs in to the demo dashboard session.")
            .step("Any email with a password of 6+ characters is accepted")
            .step("The display name is the part of the email before '@'")
            .step("--remember stores the user so later runs stay signed in")
    }
}
