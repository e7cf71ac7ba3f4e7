use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::evaluate::StrategyProfile;
use crate::game::{Action, InfoSetKey};

pub fn frequency_bar(freq: f64, width: usize) -> String {
    let filled = ((freq.clamp(0.0, 1.0) * width as f64).round()) as usize;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.1}%", freq * 100.0);

    if freq >= 0.6 {
        format!("{} {}", bar.red(), pct)
    } else if freq >= 0.3 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.dimmed(), pct)
    }
}

pub fn styled_action(action: Action) -> String {
    match action {
        Action::Bet => "BET".red().bold().to_string(),
        Action::Pass => "PASS".yellow().bold().to_string(),
    }
}

/// Bet frequency per information set, drawn as bars.
pub fn profile_table(profile: &StrategyProfile, keys: &[InfoSetKey]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Info Set".bold().to_string()),
        Cell::new("Player").set_alignment(CellAlignment::Center),
        Cell::new(styled_action(Action::Bet)),
    ]);

    for key in keys {
        let bet = profile.get(key)[Action::Bet.index()];
        table.add_row(vec![
            Cell::new(key.to_string().bold().to_string()),
            Cell::new(key.acting_player()).set_alignment(CellAlignment::Center),
            Cell::new(frequency_bar(bet, 20)),
        ]);
    }

    table.to_string()
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("  {}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
