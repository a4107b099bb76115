use thiserror::Error;

/// Errors raised by the core when an assignment request is unusable.
///
/// These are caller input errors and are never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Captain '{id}' not found among provided players")]
    CaptainNotFound { id: String },

    #[error("Captains must be different players (both '{id}')")]
    IdenticalCaptains { id: String },

    #[error("At least 2 players are required, found {found}")]
    NotEnoughPlayers { found: usize },
}

pub type Result<T> = std::result::Result<T, BalanceError>;
