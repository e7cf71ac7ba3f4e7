use thiserror::Error;

#[derive(Error, Debug)]
pub enum KuhnError {
    #[error("Invalid rank: {0} (expected 1, 2 or 3)")]
    InvalidRank(u8),

    #[error("Invalid rank character: {0}")]
    InvalidRankChar(char),

    #[error("Both players were dealt rank {0}")]
    DuplicateRank(u8),

    #[error("Malformed deal on line {line}: {reason}")]
    MalformedDeal { line: usize, reason: String },

    #[error("Dealer exhausted after {served} deals")]
    DealerExhausted { served: usize },

    #[error("Iteration count must be positive")]
    ZeroIterations,

    #[error("Alpha must be within [0, 1/3], got {0}")]
    AlphaOutOfRange(f64),

    #[error("Invalid information set label: {0}")]
    InvalidInfoSet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type KuhnResult<T> = Result<T, KuhnError>;
