use thiserror::Error;

use crate::ParseINumError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Cannot parse invalid interval string {0}")]
    MissingColon(String),
    #[error("Cannot parse invalid interval string {0}")]
    MissingDash(String),
    // The first '-' ends the start coordinate, so it cannot come before the contig separator
    #[error("Cannot parse invalid interval string {0}")]
    DashBeforeColon(String),
    #[error("Cannot parse invalid interval string {input}")]
    InvalidCoordinate {
        input: String,
        #[source]
        source: ParseINumError,
    },
}

impl IntervalError {
    /// The string that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::MissingColon(s) | Self::MissingDash(s) | Self::DashBeforeColon(s) => s,
            Self::InvalidCoordinate { input, .. } => input,
        }
    }
}
