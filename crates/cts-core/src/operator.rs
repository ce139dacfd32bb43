//! The numeric operator read from the puzzle's middle box.

use crate::error::OperatorError;
use serde::{Deserialize, Serialize};

/// How strictly operators are validated before a transform runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorPolicy {
    /// Only length and range are checked. The forward transform accepts
    /// repeated values; the inverse still cannot, since a repeated value leaves
    /// some rank with no source position.
    #[default]
    Lenient,
    /// Additionally require a true permutation of `1..=N`.
    Strict,
}

/// An N-length sequence of 1-based indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Operator(Vec<usize>);

impl Operator {
    /// Parse operator text for a puzzle of size `n`.
    ///
    /// Every non-digit character is stripped first, so `"1 3-2 4"` reads as
    /// `1324`. One digit per position; `0` is always out of range.
    pub fn parse(text: &str, n: usize) -> Result<Self, OperatorError> {
        let digits: Vec<usize> = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as usize)
            .collect();
        Self::from_indices(digits, n)
    }

    /// Validate already-numeric indices for a puzzle of size `n`.
    pub fn from_indices(indices: Vec<usize>, n: usize) -> Result<Self, OperatorError> {
        check_indices(&indices, n)?;
        Ok(Self(indices))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// True when every value `1..=N` occurs exactly once.
    pub fn is_permutation(&self) -> bool {
        first_repeat(&self.0).is_none()
    }

    /// [`OperatorError::NotAPermutation`] naming the first repeated value.
    pub fn ensure_permutation(&self) -> Result<(), OperatorError> {
        ensure_distinct(&self.0)
    }

    /// The inverse index sequence, `inv[A[p] - 1] = p + 1`.
    pub fn inverse(&self) -> Operator {
        Operator(invert(&self.0))
    }
}

/// Length and range checks shared by parsing and the transforms.
pub(crate) fn check_indices(indices: &[usize], n: usize) -> Result<(), OperatorError> {
    if indices.len() != n {
        return Err(OperatorError::WrongLength(n, indices.len()));
    }
    if let Some(&bad) = indices.iter().find(|&&v| v < 1 || v > n) {
        return Err(OperatorError::OutOfRange(n, bad));
    }
    Ok(())
}

pub(crate) fn check_policy(indices: &[usize], policy: OperatorPolicy) -> Result<(), OperatorError> {
    match policy {
        OperatorPolicy::Lenient => Ok(()),
        OperatorPolicy::Strict => ensure_distinct(indices),
    }
}

pub(crate) fn ensure_distinct(indices: &[usize]) -> Result<(), OperatorError> {
    match first_repeat(indices) {
        Some(value) => Err(OperatorError::NotAPermutation(value)),
        None => Ok(()),
    }
}

fn first_repeat(indices: &[usize]) -> Option<usize> {
    indices
        .iter()
        .enumerate()
        .find(|(i, v)| indices[..*i].contains(v))
        .map(|(_, v)| *v)
}

/// Invert a range-checked index sequence.
///
/// Positions are scanned in order, so with repeated values the last position
/// wins. A value no position selects is left as 0.
pub(crate) fn invert(indices: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; indices.len()];
    for (p, &value) in indices.iter().enumerate() {
        if let Some(slot) = inverse.get_mut(value.wrapping_sub(1)) {
            *slot = p + 1;
        }
    }
    inverse
}
