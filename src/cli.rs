use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::config::{OutputFormat, TrainConfig};
use crate::dealer::{format_shuffles, ShuffleDealer};
use crate::display::{print_error, print_section, profile_table};
use crate::error::KuhnResult;
use crate::evaluate::{all_info_set_keys, equilibrium_profile, expected_value, exploitability};
use crate::trainer::KuhnTrainer;

#[derive(Parser)]
#[command(name = "kuhn", version = "1.0.0", about = "Kuhn poker equilibrium via counterfactual regret minimization.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train CFR self-play and print the average strategy
    Train {
        /// Number of CFR iterations
        #[arg(short, long)]
        iterations: Option<usize>,
        /// Seed for the shuffle dealer
        #[arg(short, long)]
        seed: Option<u64>,
        /// Replay deals from a file (one shuffle like "213" per line)
        #[arg(short, long)]
        deals: Option<PathBuf>,
        /// Log progress every N iterations (0 disables)
        #[arg(long)]
        log_every: Option<usize>,
        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// JSON config file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print shuffles in the format accepted by `train --deals`
    Deals {
        /// Number of shuffles
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,
        /// Seed for the shuffle
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Show the analytic equilibrium for a given alpha
    Equilibrium {
        /// How often player 0 bets the lowest card, in [0, 1/3]
        #[arg(short, long, default_value = "0")]
        alpha: f64,
    },
}

pub fn run() {
    let cli = Cli::parse();
    dispatch(cli);
}

pub fn run_with_args(args: Vec<String>) {
    let cli = Cli::parse_from(args);
    dispatch(cli);
}

fn dispatch(cli: Cli) {
    let result = match cli.command {
        Commands::Train {
            iterations,
            seed,
            deals,
            log_every,
            format,
            config,
        } => cmd_train(iterations, seed, deals, log_every, format, config),
        Commands::Deals { count, seed } => {
            cmd_deals(count, seed);
            Ok(())
        }
        Commands::Equilibrium { alpha } => cmd_equilibrium(alpha),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn cmd_train(
    iterations: Option<usize>,
    seed: Option<u64>,
    deals: Option<PathBuf>,
    log_every: Option<usize>,
    format: Option<OutputFormat>,
    config: Option<PathBuf>,
) -> KuhnResult<()> {
    let mut cfg = match config {
        Some(path) => TrainConfig::load(path)?,
        None => TrainConfig::default(),
    };
    if let Some(n) = iterations {
        cfg.iterations = n;
    }
    if seed.is_some() {
        cfg.seed = seed;
    }
    if deals.is_some() {
        cfg.deals = deals;
    }
    if let Some(n) = log_every {
        cfg.log_every = n;
    }
    if let Some(f) = format {
        cfg.format = f;
    }
    cfg.validate()?;

    let mut trainer = KuhnTrainer::new(cfg.dealer()?).with_log_every(cfg.log_every);
    let report = trainer.train(cfg.iterations)?;

    match cfg.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Table => report.display(),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn cmd_deals(count: usize, seed: Option<u64>) {
    let mut dealer = match seed {
        Some(seed) => ShuffleDealer::new(seed),
        None => ShuffleDealer::from_entropy(),
    };
    print!("{}", format_shuffles(&mut dealer, count));
}

fn cmd_equilibrium(alpha: f64) -> KuhnResult<()> {
    let profile = equilibrium_profile(alpha)?;

    println!();
    println!("  {} alpha = {:.4}", "Kuhn Equilibrium".bold(), alpha);
    println!();
    println!("{}", profile_table(&profile, &all_info_set_keys()));

    print_section(
        "Value",
        &format!("{:+.6} for player 0", expected_value(&profile)),
    );
    print_section(
        "Exploitability",
        &format!("{:.2e}", exploitability(&profile)),
    );
    println!();
    Ok(())
}
