//! Output formatting for the CLI.

use colored::*;
use pathcards_comparator::ComparisonStats;
use pathcards_domain::ModelRelation;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const RELATIONS: [ModelRelation; 4] = [
    ModelRelation::Corroboration,
    ModelRelation::Conflicting,
    ModelRelation::Specification,
    ModelRelation::Extension,
];

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format comparison statistics as tables.
    pub fn format_stats(&self, stats: &ComparisonStats) -> String {
        let total = stats.total();
        let headline = format!("Classified {} card(s), skipped {}", total, stats.skipped);
        let headline = if stats.skipped > 0 {
            self.colorize(&headline, "yellow")
        } else {
            self.colorize(&headline, "green")
        };

        let mut builder = Builder::default();
        builder.push_record(["Relation", "Cards", "Share"]);
        for relation in RELATIONS {
            let count = stats.count(relation);
            builder.push_record([
                self.relation_label(relation),
                count.to_string(),
                share(count, total),
            ]);
        }

        let mut sections = vec![headline, self.table(builder)];

        if !stats.detailed.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Outcome", "Cards"]);
            for (key, count) in &stats.detailed {
                builder.push_record([key.clone(), count.to_string()]);
            }
            sections.push(self.table(builder));
        }

        sections.join("\n")
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn relation_label(&self, relation: ModelRelation) -> String {
        let color = match relation {
            ModelRelation::Corroboration => "green",
            ModelRelation::Conflicting => "red",
            ModelRelation::Specification => "cyan",
            ModelRelation::Extension => "blue",
        };
        self.colorize(relation.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn share(count: usize, total: usize) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}
