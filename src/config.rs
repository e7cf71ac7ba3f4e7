use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::dealer::{Dealer, ReplayDealer, ShuffleDealer};
use crate::error::{KuhnError, KuhnResult};
use crate::trainer::DEFAULT_LOG_EVERY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

/// Settings for one training run. Every field has a default, so a config
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub iterations: usize,
    /// Seed for the shuffle dealer; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Replay deals from this file instead of shuffling.
    pub deals: Option<PathBuf>,
    pub log_every: usize,
    pub format: OutputFormat,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 100_000,
            seed: None,
            deals: None,
            log_every: DEFAULT_LOG_EVERY,
            format: OutputFormat::Text,
        }
    }
}

impl TrainConfig {
    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> KuhnResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn validate(&self) -> KuhnResult<()> {
        if self.iterations == 0 {
            return Err(KuhnError::ZeroIterations);
        }
        Ok(())
    }

    /// The dealer this config asks for: a replay file if one is named,
    /// otherwise a (possibly seeded) shuffle.
    pub fn dealer(&self) -> KuhnResult<Box<dyn Dealer>> {
        if let Some(path) = &self.deals {
            let replay = ReplayDealer::from_file(path)?;
            if replay.remaining() < self.iterations {
                log::warn!(
                    "{} holds {} deals but {} iterations were requested",
                    path.display(),
                    replay.remaining(),
                    self.iterations
                );
            }
            return Ok(Box::new(replay));
        }
        Ok(match self.seed {
            Some(seed) => Box::new(ShuffleDealer::new(seed)),
            None => Box::new(ShuffleDealer::from_entropy()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: TrainConfig = serde_json::from_str(r#"{"iterations": 50, "format": "json"}"#).unwrap();
        assert_eq!(config.iterations, 50);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_every, DEFAULT_LOG_EVERY);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn zero_iterations_invalid() {
        let config = TrainConfig {
            iterations: 0,
            ..TrainConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(TrainConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_deals_file_is_an_error() {
        let config = TrainConfig {
            deals: Some(PathBuf::from("/nonexistent/kuhn-deals.txt")),
            ..TrainConfig::default()
        };
        assert!(matches!(config.dealer(), Err(KuhnError::Io(_))));
    }
}
