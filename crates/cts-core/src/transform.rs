//! Forward and inverse reordering/renumbering transforms.
//!
//! Both take the same three inputs: the top row `T`, the bottom row `B`, and
//! the operator `A` as 1-based indices. `N` is the alphabet size.
//!
//! The forward code relabels each symbol of `B` by its position in `T`
//! reordered by `A`. The inverse code relabels positions the other way round:
//! it ranks the positions of `B` by where their symbols sit in `T`, then reads
//! those ranks through the inverse of `A`.

use crate::alphabet::{Alphabet, Symbol};
use crate::code::DerivedCode;
use crate::error::{Row, TransformError};
use crate::operator::{self, OperatorPolicy};
use std::collections::HashMap;

/// The "Top→Bottom" code, or `None` if any input is invalid.
pub fn forward_transform(
    alphabet: &Alphabet,
    top: &[Symbol],
    bottom: &[Symbol],
    operator: &[usize],
) -> Option<DerivedCode> {
    try_forward_transform(alphabet, top, bottom, operator, OperatorPolicy::Lenient).ok()
}

/// The "Bottom→Top" code, or `None` if any input is invalid.
pub fn inverse_transform(
    alphabet: &Alphabet,
    top: &[Symbol],
    bottom: &[Symbol],
    operator: &[usize],
) -> Option<DerivedCode> {
    try_inverse_transform(alphabet, top, bottom, operator, OperatorPolicy::Lenient).ok()
}

/// Forward transform reporting why no code could be derived.
pub fn try_forward_transform(
    alphabet: &Alphabet,
    top: &[Symbol],
    bottom: &[Symbol],
    operator: &[usize],
    policy: OperatorPolicy,
) -> Result<DerivedCode, TransformError> {
    validate(alphabet, top, bottom, operator, policy)?;

    // Q[i] = T[A[i] - 1]
    let reordered: Vec<Symbol> = operator.iter().map(|&index| top[index - 1]).collect();

    // Later positions overwrite earlier ones when the operator repeats a value
    let renumbering: HashMap<Symbol, usize> = reordered
        .iter()
        .enumerate()
        .map(|(i, symbol)| (*symbol, i + 1))
        .collect();

    let ranks = bottom
        .iter()
        .map(|symbol| {
            renumbering
                .get(symbol)
                .copied()
                .ok_or(TransformError::UnmappedSymbol(*symbol))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DerivedCode::from_ranks(ranks))
}

/// Inverse transform reporting why no code could be derived.
///
/// Regardless of `policy`, an operator with a repeated value is rejected
/// here: in range and of length `N`, a repeat means some value has no
/// position to invert to.
pub fn try_inverse_transform(
    alphabet: &Alphabet,
    top: &[Symbol],
    bottom: &[Symbol],
    operator: &[usize],
    policy: OperatorPolicy,
) -> Result<DerivedCode, TransformError> {
    validate(alphabet, top, bottom, operator, policy)?;
    operator::ensure_distinct(operator)?;

    let top_rank: HashMap<Symbol, usize> = top
        .iter()
        .enumerate()
        .map(|(i, symbol)| (*symbol, i + 1))
        .collect();

    let bottom_ranks = bottom
        .iter()
        .map(|symbol| {
            top_rank
                .get(symbol)
                .copied()
                .ok_or(TransformError::UnmappedSymbol(*symbol))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Stable sort of bottom positions by the top rank of their symbol
    let mut positions: Vec<usize> = (0..bottom_ranks.len()).collect();
    positions.sort_by_key(|&p| bottom_ranks[p]);

    let mut rank_pos = vec![0; positions.len()];
    for (sorted_index, &p) in positions.iter().enumerate() {
        rank_pos[p] = sorted_index + 1;
    }

    let inverse = operator::invert(operator);
    Ok(DerivedCode::from_ranks(inverse.iter().map(|&p| rank_pos[p - 1])))
}

/// Checks shared by both directions: row shape, row membership, operator
/// length and range, then the operator policy.
fn validate(
    alphabet: &Alphabet,
    top: &[Symbol],
    bottom: &[Symbol],
    operator: &[usize],
    policy: OperatorPolicy,
) -> Result<(), TransformError> {
    check_row(Row::Top, alphabet, top)?;
    check_row(Row::Bottom, alphabet, bottom)?;
    operator::check_indices(operator, alphabet.len())?;
    operator::check_policy(operator, policy)?;
    Ok(())
}

/// A row must hold every alphabet symbol exactly once.
fn check_row(row: Row, alphabet: &Alphabet, symbols: &[Symbol]) -> Result<(), TransformError> {
    if symbols.len() != alphabet.len() {
        return Err(TransformError::WrongLength {
            row,
            expected: alphabet.len(),
            actual: symbols.len(),
        });
    }
    for (i, symbol) in symbols.iter().enumerate() {
        if !alphabet.contains(*symbol) {
            return Err(TransformError::SymbolNotInAlphabet { row, symbol: *symbol });
        }
        if symbols[..i].contains(symbol) {
            return Err(TransformError::RepeatedSymbol { row, symbol: *symbol });
        }
    }
    Ok(())
}
