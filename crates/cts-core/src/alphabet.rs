//! Symbols, alphabets, and the size-indexed preset table.

use crate::error::AlphabetError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Largest supported alphabet. Codes use one decimal digit per rank.
pub const MAX_ALPHABET_SIZE: usize = 9;

/// A single puzzle symbol, such as `●` or `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub char);

impl Symbol {
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Characters that separate symbols in free text and are never symbols themselves.
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// An ordered set of distinct symbols used by one puzzle instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build an alphabet, rejecting empty, oversized, or repeating symbol lists.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, AlphabetError> {
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if symbols.len() > MAX_ALPHABET_SIZE {
            return Err(AlphabetError::TooLarge(symbols.len(), MAX_ALPHABET_SIZE));
        }
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(AlphabetError::DuplicateSymbol(*symbol));
            }
        }
        Ok(Self { symbols })
    }

    /// Number of symbols, the `N` of the puzzle.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Zero-based position of `symbol` within the alphabet.
    pub fn position_of(&self, symbol: Symbol) -> Option<usize> {
        self.symbols.iter().position(|s| *s == symbol)
    }

    /// Read a row of symbols from free text such as `"+ ▲ ● ■"` or `"+▲●■"`.
    ///
    /// Whitespace and commas are ignored. Any other character must belong to
    /// the alphabet. The length is not checked here; transforms do that.
    pub fn parse_sequence(&self, text: &str) -> Result<Vec<Symbol>, AlphabetError> {
        text.chars()
            .filter(|c| !is_separator(*c))
            .map(Symbol)
            .map(|s| {
                if self.contains(s) {
                    Ok(s)
                } else {
                    Err(AlphabetError::UnknownSymbol(s))
                }
            })
            .collect()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().filter(|c| !is_separator(*c)).map(Symbol).collect())
    }
}

impl TryFrom<Vec<Symbol>> for Alphabet {
    type Error = AlphabetError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<Symbol> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Alphabet presets keyed by puzzle size.
///
/// Passed explicitly to whoever builds a [`Session`](crate::Session) so a
/// front end can ship its own table instead of relying on shared state.
///
/// Every key equals the length of its alphabet; deserialization rejects a
/// table that breaks this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<usize, Alphabet>", into = "BTreeMap<usize, Alphabet>")]
pub struct PresetTable {
    presets: BTreeMap<usize, Alphabet>,
}

impl TryFrom<BTreeMap<usize, Alphabet>> for PresetTable {
    type Error = AlphabetError;

    fn try_from(presets: BTreeMap<usize, Alphabet>) -> Result<Self, Self::Error> {
        match presets.iter().find(|(size, alphabet)| **size != alphabet.len()) {
            Some((size, alphabet)) => Err(AlphabetError::PresetSizeMismatch(*size, alphabet.len())),
            None => Ok(Self { presets }),
        }
    }
}

impl From<PresetTable> for BTreeMap<usize, Alphabet> {
    fn from(table: PresetTable) -> Self {
        table.presets
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        let mut presets = BTreeMap::new();
        for text in ["● ■ ▲", "+ ▲ ● ■", "● ■ ▲ + X", "% ● ■ ▲ + X"] {
            // Built-in tables are distinct by construction
            if let Ok(alphabet) = text.parse::<Alphabet>() {
                presets.insert(alphabet.len(), alphabet);
            }
        }
        Self { presets }
    }
}

impl PresetTable {
    /// A table with no presets.
    pub fn empty() -> Self {
        Self {
            presets: BTreeMap::new(),
        }
    }

    /// Add or replace the preset for the alphabet's size.
    pub fn insert(&mut self, alphabet: Alphabet) -> Option<Alphabet> {
        self.presets.insert(alphabet.len(), alphabet)
    }

    pub fn get(&self, size: usize) -> Option<&Alphabet> {
        self.presets.get(&size)
    }

    /// Preset for `size`, or [`AlphabetError::NoPreset`].
    pub fn alphabet_for(&self, size: usize) -> Result<Alphabet, AlphabetError> {
        self.get(size).cloned().ok_or(AlphabetError::NoPreset(size))
    }

    /// Available sizes in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.presets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Alphabet)> {
        self.presets.iter().map(|(size, alphabet)| (*size, alphabet))
    }

    /// Largest preset, used when a caller asks for no particular size.
    pub fn largest(&self) -> Option<&Alphabet> {
        self.presets.values().next_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_from_str_ignores_separators() {
        let alphabet: Alphabet = "+, ▲ ●\n■".parse().unwrap();
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.position_of(Symbol('●')), Some(2));
        assert_eq!(alphabet.to_string(), "+ ▲ ● ■");
    }

    #[test]
    fn test_alphabet_rejects_duplicates() {
        assert_eq!(
            "+▲+".parse::<Alphabet>(),
            Err(AlphabetError::DuplicateSymbol(Symbol('+')))
        );
    }

    #[test]
    fn test_alphabet_rejects_empty_and_oversized() {
        assert_eq!(" , ".parse::<Alphabet>(), Err(AlphabetError::Empty));
        assert_eq!(
            "abcdefghij".parse::<Alphabet>(),
            Err(AlphabetError::TooLarge(10, MAX_ALPHABET_SIZE))
        );
    }

    #[test]
    fn test_parse_sequence() {
        let alphabet: Alphabet = "+▲●■".parse().unwrap();
        let row = alphabet.parse_sequence("▲ ■ + ●").unwrap();
        assert_eq!(row, vec![Symbol('▲'), Symbol('■'), Symbol('+'), Symbol('●')]);

        assert_eq!(
            alphabet.parse_sequence("▲X"),
            Err(AlphabetError::UnknownSymbol(Symbol('X')))
        );
    }

    #[test]
    fn test_default_presets() {
        let table = PresetTable::default();
        assert_eq!(table.sizes().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
        assert_eq!(table.alphabet_for(6).unwrap().to_string(), "% ● ■ ▲ + X");
        assert_eq!(table.alphabet_for(4).unwrap().to_string(), "+ ▲ ● ■");
        assert_eq!(table.largest().map(Alphabet::len), Some(6));
        assert_eq!(table.alphabet_for(7), Err(AlphabetError::NoPreset(7)));
    }

    #[test]
    fn test_preset_table_json_round_trip() {
        let table = PresetTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let back: PresetTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_preset_table_rejects_bad_alphabet_json() {
        let json = r#"{"3": ["a", "a", "b"]}"#;
        assert!(serde_json::from_str::<PresetTable>(json).is_err());
    }

    #[test]
    fn test_preset_table_rejects_size_mismatch() {
        let json = r#"{"3": ["a", "b", "c", "d"]}"#;
        let err = serde_json::from_str::<PresetTable>(json).unwrap_err();
        assert!(err.to_string().contains("preset for size 3 lists 4 symbols"));

        let mut presets = BTreeMap::new();
        presets.insert(5, "abc".parse::<Alphabet>().unwrap());
        assert_eq!(
            PresetTable::try_from(presets),
            Err(AlphabetError::PresetSizeMismatch(5, 3))
        );
    }

    #[test]
    fn test_preset_insert_replaces_same_size() {
        let mut table = PresetTable::empty();
        assert!(table.insert("abc".parse().unwrap()).is_none());
        let old = table.insert("xyz".parse().unwrap());
        assert_eq!(old.map(|a| a.to_string()), Some("a b c".to_string()));
        assert_eq!(table.get(3).unwrap().to_string(), "x y z");
    }
}
