//! Training results and their text, table and JSON renderings.

use std::fmt;

use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::cfr::Strategy;
use crate::evaluate::GAME_VALUE;
use crate::game::InfoSetKey;

/// Average strategy learned at one information set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoSetReport {
    pub key: InfoSetKey,
    /// `[pass, bet]` probabilities.
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub iterations: usize,
    /// Mean value of the dealt hands for player 0.
    pub game_value: f64,
    /// Exploitability of the average strategy profile.
    pub exploitability: f64,
    /// Sorted by key label.
    pub info_sets: Vec<InfoSetReport>,
}

impl TrainingReport {
    pub fn strategy(&self, label: &str) -> Option<Strategy> {
        self.info_sets
            .iter()
            .find(|r| r.key.to_string() == label)
            .map(|r| r.strategy)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Styled summary for the terminal.
    pub fn display(&self) {
        println!();
        println!(
            "  {} after {} iterations",
            "Kuhn Poker CFR".bold(),
            self.iterations
        );
        println!();

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Info Set".bold().to_string()),
            Cell::new("Player").set_alignment(CellAlignment::Center),
            Cell::new("Pass %").set_alignment(CellAlignment::Right),
            Cell::new("Bet %").set_alignment(CellAlignment::Right),
        ]);

        for entry in &self.info_sets {
            let [pass, bet] = entry.strategy;
            let bet_str = format!("{:.1}%", bet * 100.0);
            let bet_cell = if bet >= 0.5 {
                bet_str.red().bold().to_string()
            } else {
                bet_str
            };
            table.add_row(vec![
                Cell::new(entry.key.to_string().bold().to_string()),
                Cell::new(entry.key.acting_player()).set_alignment(CellAlignment::Center),
                Cell::new(format!("{:.1}%", pass * 100.0)).set_alignment(CellAlignment::Right),
                Cell::new(bet_cell).set_alignment(CellAlignment::Right),
            ]);
        }
        println!("{}", table);

        println!();
        println!(
            "  Game value: {} (equilibrium {:.4})",
            format!("{:+.4}", self.game_value).cyan().bold(),
            GAME_VALUE
        );
        let exploit_str = format!("{:.5}", self.exploitability);
        let exploit_colored = if self.exploitability < 0.01 {
            exploit_str.green()
        } else {
            exploit_str.yellow()
        };
        println!("  Exploitability: {}", exploit_colored);
        println!();
    }
}

/// The plain report: average game value, then one line per information set.
impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average game value: {}", self.game_value)?;
        for entry in &self.info_sets {
            writeln!(
                f,
                "{}: [{}, {}]",
                entry.key, entry.strategy[0], entry.strategy[1]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> TrainingReport {
        TrainingReport {
            iterations: 1,
            game_value: -0.875,
            exploitability: 0.5,
            info_sets: vec![
                InfoSetReport {
                    key: "1".parse().unwrap(),
                    strategy: [0.5, 0.5],
                },
                InfoSetReport {
                    key: "2P".parse().unwrap(),
                    strategy: [0.25, 0.75],
                },
            ],
        }
    }

    #[test]
    fn plain_text_format() {
        assert_eq!(
            report().to_string(),
            "Average game value: -0.875\n1: [0.5, 0.5]\n2P: [0.25, 0.75]\n"
        );
    }

    #[test]
    fn json_uses_labels() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["info_sets"][1]["key"], "2P");
        assert_eq!(json["info_sets"][1]["strategy"][1], 0.75);
        assert_eq!(json["game_value"], -0.875);
    }

    #[test]
    fn lookup_by_label() {
        assert_eq!(report().strategy("2P"), Some([0.25, 0.75]));
        assert_eq!(report().strategy("3"), None);
    }
}
