//! Scoring summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

/// Predictive strength of a variable, by the conventional credit-scoring
/// rule of thumb applied to its IV score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IvStrength {
    Unpredictive,
    Weak,
    Medium,
    Strong,
    Suspicious,
}

impl IvStrength {
    /// Classify an IV score into a strength band
    pub fn classify(iv: f64) -> Self {
        if iv < 0.02 {
            IvStrength::Unpredictive
        } else if iv < 0.1 {
            IvStrength::Weak
        } else if iv < 0.3 {
            IvStrength::Medium
        } else if iv < 0.5 {
            IvStrength::Strong
        } else {
            IvStrength::Suspicious
        }
    }

    fn color(self) -> Color {
        match self {
            IvStrength::Unpredictive => Color::DarkGrey,
            IvStrength::Weak => Color::White,
            IvStrength::Medium => Color::Cyan,
            IvStrength::Strong => Color::Green,
            IvStrength::Suspicious => Color::Yellow,
        }
    }
}

impl std::fmt::Display for IvStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IvStrength::Unpredictive => write!(f, "Unpredictive"),
            IvStrength::Weak => write!(f, "Weak"),
            IvStrength::Medium => write!(f, "Medium"),
            IvStrength::Strong => write!(f, "Strong"),
            IvStrength::Suspicious => write!(f, "Suspicious"),
        }
    }
}

/// Summary of an IV scoring run across all feature columns
#[derive(Debug, Default)]
pub struct IvSummary {
    /// Scored columns with their IV, ranked descending
    pub scores: Vec<(String, f64)>,
    /// Columns whose IV could not be computed
    pub skipped: Vec<String>,
}

impl IvSummary {
    pub fn new(mut scores: Vec<(String, f64)>, skipped: Vec<String>) -> Self {
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        Self { scores, skipped }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("INFORMATION VALUE RANKING").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Rank").add_attribute(Attribute::Bold),
            Cell::new("Column").add_attribute(Attribute::Bold),
            Cell::new("IV").add_attribute(Attribute::Bold),
            Cell::new("Strength").add_attribute(Attribute::Bold),
        ]);

        for (rank, (name, iv)) in self.scores.iter().enumerate() {
            let strength = IvStrength::classify(*iv);
            table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(name),
                Cell::new(format!("{:.4}", iv)),
                Cell::new(strength.to_string()).fg(strength.color()),
            ]);
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.skipped.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Skipped (IV could not be computed)").yellow(),
                style(format!("({})", self.skipped.len())).dim()
            );
            for name in &self.skipped {
                println!("        {} {}", style("•").dim(), name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iv_strength_bands() {
        assert_eq!(IvStrength::classify(0.01), IvStrength::Unpredictive);
        assert_eq!(IvStrength::classify(0.05), IvStrength::Weak);
        assert_eq!(IvStrength::classify(0.2), IvStrength::Medium);
        assert_eq!(IvStrength::classify(0.35), IvStrength::Strong);
        assert_eq!(IvStrength::classify(0.55), IvStrength::Suspicious);
    }

    #[test]
    fn test_summary_ranks_descending() {
        let summary = IvSummary::new(
            vec![
                ("low".to_string(), 0.05),
                ("high".to_string(), 0.4),
                ("mid".to_string(), 0.15),
            ],
            Vec::new(),
        );

        let order: Vec<&str> = summary.scores.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
    }
}
