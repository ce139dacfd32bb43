//! Error kinds for every way an input can fail validation.
//!
//! The public transform functions collapse these into an absent result; the
//! `try_*` variants surface them so a caller can explain what went wrong.

use crate::Symbol;
use serde::Serialize;
use thiserror::Error;

/// Reasons an alphabet cannot be constructed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one symbol")]
    Empty,
    #[error("alphabet has {0} symbols, at most {1} are supported")]
    TooLarge(usize, usize),
    #[error("symbol {0} appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),
    #[error("symbol {0} is not part of the alphabet")]
    UnknownSymbol(Symbol),
    #[error("no preset alphabet for size {0}")]
    NoPreset(usize),
    #[error("preset for size {0} lists {1} symbols")]
    PresetSizeMismatch(usize, usize),
}

/// Reasons an operator is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorError {
    #[error("operator has {1} digits, expected {0}")]
    WrongLength(usize, usize),
    #[error("operator value {1} is outside 1..={0}")]
    OutOfRange(usize, usize),
    #[error("operator value {0} appears more than once, operator is not a permutation")]
    NotAPermutation(usize),
}

/// Reasons a transform produces no code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformError {
    #[error("{row} row has {actual} symbols, expected {expected}")]
    WrongLength {
        row: Row,
        expected: usize,
        actual: usize,
    },
    #[error("{row} row contains {symbol}, which is not in the alphabet")]
    SymbolNotInAlphabet { row: Row, symbol: Symbol },
    #[error("{row} row contains {symbol} more than once")]
    RepeatedSymbol { row: Row, symbol: Symbol },
    #[error("bottom row symbol {0} has no rank in the reordered top row")]
    UnmappedSymbol(Symbol),
    #[error(transparent)]
    Operator(#[from] OperatorError),
}

/// Which of the two symbol rows an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    Top,
    Bottom,
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Row::Top => write!(f, "top"),
            Row::Bottom => write!(f, "bottom"),
        }
    }
}
