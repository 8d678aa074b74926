//! Error types for catalog parsing and ordering.

use thiserror::Error;

/// Errors that can occur while deriving the ordering coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// The power of ten covering the maximum rank does not fit in a `u32`.
    #[error("ordering coefficient for max rank {max_rank} overflows u32")]
    CoefficientOverflow {
        /// The maximum rank ordinal the coefficient was computed from.
        max_rank: u32,
    },
}

/// Error returned when a string names no known rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown rank label")]
pub struct ParseRankError;

/// Error returned when a string names no known suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown suit name")]
pub struct ParseSuitError;
