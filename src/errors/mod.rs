use thiserror::Error;

/// Bad caller input. Surfaced synchronously; never silently corrected
/// (the documented other-points coercion happens at the CLI boundary,
/// before the core is reached).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("player name must not be empty")]
    EmptyPlayerName,
    #[error("player names must be distinct")]
    DuplicatePlayerNames,
    #[error("winner must be player 1 or player 2, got {0}")]
    InvalidWinner(u8),
    #[error("unknown scoring criterion: {0}")]
    UnknownCriterion(String),
    #[error("no games have been played yet")]
    NoGamesPlayed,
}

/// Failures of match-history operations. Always returned as values so the
/// caller can decide whether to retry or re-prompt; nothing here is retried
/// automatically.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("not authenticated")]
    Auth,
    #[error("match not found or not owned by the caller")]
    NotFoundOrForbidden,
    #[error("match history backend error: {0}")]
    Backend(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Add context to local persistence errors
pub fn storage_context(operation: &str, key: &str) -> String {
    format!("Failed to {} local slot: {}", operation, key)
}

/// Add context to database errors
pub fn database_context(operation: &str) -> String {
    format!("Failed to {}", operation)
}
