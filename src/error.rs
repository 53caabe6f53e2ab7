//! Error types for this crate.
use thiserror::Error;

/// Any kind of error that can happen when loading a [crate::Readings] table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("line {line}: invalid timestamp '{value}', expected DD/MM/YYYY [HH:MM[:SS]]")]
    InvalidTimestamp { line: u64, value: String },
    #[error("error during CSV processing: {0}")]
    Csv(#[from] csv::Error),
}

/// A filter value that could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum FilterError {
    #[error("invalid filter value '{0}', expected comma-separated integers")]
    InvalidToken(String),
}

/// Errors raised while bucketing readings into [crate::AggregatedPeriod] values.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum AggregateError {
    #[error("no month name for month number {0}")]
    UnknownMonth(u32),
}

/// Failure to obtain an answer from the console.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before an answer was given")]
    Closed,
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Any kind of error in the interactive filtering session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Filter(#[from] FilterError),
}
