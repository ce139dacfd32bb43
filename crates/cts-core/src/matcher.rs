//! Candidate answer matching.

use crate::alphabet::is_separator;
use crate::code::DerivedCode;
use serde::Serialize;

/// Candidate answers parsed from free text, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> CandidateSet<'a> {
    /// Split on runs of whitespace, newlines, or commas and drop empty tokens.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            tokens: raw
                .split(is_separator)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First candidate exactly equal to `code`. `"04"` never matches `"4"`.
    pub fn find(&self, code: &DerivedCode) -> Option<&'a str> {
        self.tokens.iter().copied().find(|token| *token == code.as_str())
    }
}

/// Match a derived code against raw candidate text.
///
/// An absent code never matches and the text is not inspected.
pub fn match_candidate<'a>(code: Option<&DerivedCode>, raw: &'a str) -> Option<&'a str> {
    let code = code?;
    CandidateSet::parse(raw).find(code)
}

/// Matches for both directions, each checked independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub forward: Option<String>,
    pub inverse: Option<String>,
}

impl MatchReport {
    pub fn new(forward: Option<&DerivedCode>, inverse: Option<&DerivedCode>, raw: &str) -> Self {
        let candidates = CandidateSet::parse(raw);
        Self {
            forward: forward.and_then(|code| candidates.find(code)).map(str::to_string),
            inverse: inverse.and_then(|code| candidates.find(code)).map(str::to_string),
        }
    }

    pub fn any(&self) -> bool {
        self.forward.is_some() || self.inverse.is_some()
    }
}
