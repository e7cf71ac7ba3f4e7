//! Training session: drives CFR iterations over dealt hands.

use log::{debug, info};

use crate::cfr::InfoSetTable;
use crate::dealer::Dealer;
use crate::error::{KuhnError, KuhnResult};
use crate::evaluate::exploitability;
use crate::game::History;
use crate::report::{InfoSetReport, TrainingReport};
use crate::walker::walk;

/// Default interval between progress log lines.
pub const DEFAULT_LOG_EVERY: usize = 10_000;

/// Owns the information-set table and the dealer feeding it. Everything
/// learned lives here; repeated `train` calls keep accumulating.
pub struct KuhnTrainer<D: Dealer> {
    table: InfoSetTable,
    dealer: D,
    log_every: usize,
}

impl<D: Dealer> KuhnTrainer<D> {
    pub fn new(dealer: D) -> Self {
        KuhnTrainer {
            table: InfoSetTable::new(),
            dealer,
            log_every: DEFAULT_LOG_EVERY,
        }
    }

    /// Log the running game value every `n` iterations (0 disables).
    pub fn with_log_every(mut self, n: usize) -> Self {
        self.log_every = n;
        self
    }

    pub fn table(&self) -> &InfoSetTable {
        &self.table
    }

    /// Run one CFR pass over the next deal and return its value for player 0.
    pub fn iterate(&mut self) -> KuhnResult<f64> {
        let deal = self.dealer.next_deal()?;
        Ok(walk(&mut self.table, &deal, History::new(), 1.0, 1.0))
    }

    /// Run `iterations` passes and report the average game value together
    /// with the average strategy at every information set.
    pub fn train(&mut self, iterations: usize) -> KuhnResult<TrainingReport> {
        if iterations == 0 {
            return Err(KuhnError::ZeroIterations);
        }
        info!("training Kuhn poker CFR for {} iterations", iterations);

        let mut total = 0.0;
        for i in 1..=iterations {
            total += self.iterate()?;
            if self.log_every > 0 && i % self.log_every == 0 {
                debug!(
                    "iteration {}: average game value {:.6}, {} info sets",
                    i,
                    total / i as f64,
                    self.table.len()
                );
            }
        }

        let game_value = total / iterations as f64;
        let info_sets: Vec<InfoSetReport> = self
            .table
            .sorted()
            .map(|(key, data)| InfoSetReport {
                key: *key,
                strategy: data.average_strategy(),
            })
            .collect();
        let exploitability = exploitability(&self.table.average_profile());

        info!(
            "finished: average game value {:.6}, exploitability {:.6}",
            game_value, exploitability
        );

        Ok(TrainingReport {
            iterations,
            game_value,
            exploitability,
            info_sets,
        })
    }
}
