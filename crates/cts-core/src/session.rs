//! Editing session for one puzzle.
//!
//! A front end feeds symbol clicks, operator text, and candidate text into a
//! [`Session`] and calls [`Session::evaluate`] after every change. The session
//! owns the mutation discipline (append one, remove last, clear) so the
//! transforms only ever see immutable snapshots.

use crate::alphabet::{Alphabet, Symbol};
use crate::code::DerivedCode;
use crate::error::TransformError;
use crate::matcher::MatchReport;
use crate::operator::{Operator, OperatorPolicy};
use crate::transform::{try_forward_transform, try_inverse_transform};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Which codes a session derives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directions {
    /// Only the "Top→Bottom" code.
    Forward,
    /// Both the "Top→Bottom" and "Bottom→Top" codes.
    #[default]
    Both,
}

/// Construction-time configuration for a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub alphabet: Alphabet,
    #[serde(default)]
    pub directions: Directions,
    #[serde(default)]
    pub operator_policy: OperatorPolicy,
}

impl SessionConfig {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            directions: Directions::default(),
            operator_policy: OperatorPolicy::default(),
        }
    }

    pub fn with_directions(mut self, directions: Directions) -> Self {
        self.directions = directions;
        self
    }

    pub fn with_operator_policy(mut self, policy: OperatorPolicy) -> Self {
        self.operator_policy = policy;
        self
    }
}

/// Where the puzzle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "snake_case")]
pub enum Status {
    /// A row or the operator is still shorter than the alphabet.
    Incomplete,
    /// All inputs are present but no code could be derived.
    Invalid(TransformError),
    /// A code was derived and no candidate equals it.
    NoMatch,
    /// A candidate equals one of the derived codes.
    Matched,
}

/// Result of evaluating a session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub status: Status,
    pub forward: Option<DerivedCode>,
    pub inverse: Option<DerivedCode>,
    /// Why the inverse code is missing while the forward code exists.
    pub inverse_error: Option<TransformError>,
    pub matches: MatchReport,
}

impl Evaluation {
    fn incomplete() -> Self {
        Self {
            status: Status::Incomplete,
            forward: None,
            inverse: None,
            inverse_error: None,
            matches: MatchReport::default(),
        }
    }

    /// Human-readable reason when the status is [`Status::Invalid`].
    pub fn message(&self) -> Option<String> {
        match self.status {
            Status::Invalid(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Serializable snapshot of a session, for saving and restoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub config: SessionConfig,
    pub top: Vec<Symbol>,
    pub bottom: Vec<Symbol>,
    pub operator: String,
    pub candidates: String,
}

/// The state of one puzzle being entered.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    top: Vec<Symbol>,
    bottom: Vec<Symbol>,
    operator: String,
    candidates: String,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let capacity = config.alphabet.len();
        Self {
            config,
            top: Vec::with_capacity(capacity),
            bottom: Vec::with_capacity(capacity),
            operator: String::with_capacity(capacity),
            candidates: String::new(),
        }
    }

    /// Restore a saved snapshot. Entries that would violate the editing rules
    /// (unknown symbols, overlong rows) are dropped.
    pub fn from_state(state: SessionState) -> Self {
        let mut session = Self::new(state.config);
        for symbol in state.top {
            session.push_top(symbol);
        }
        for symbol in state.bottom {
            session.push_bottom(symbol);
        }
        session.set_operator_text(&state.operator);
        session.set_candidates_text(&state.candidates);
        session
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            config: self.config.clone(),
            top: self.top.clone(),
            bottom: self.bottom.clone(),
            operator: self.operator.clone(),
            candidates: self.candidates.clone(),
        }
    }

    // ==================== Accessors ====================

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.config.alphabet
    }

    /// The puzzle size `N`.
    pub fn size(&self) -> usize {
        self.config.alphabet.len()
    }

    pub fn top(&self) -> &[Symbol] {
        &self.top
    }

    pub fn bottom(&self) -> &[Symbol] {
        &self.bottom
    }

    pub fn operator_text(&self) -> &str {
        &self.operator
    }

    pub fn candidates_text(&self) -> &str {
        &self.candidates
    }

    pub fn is_top_full(&self) -> bool {
        self.top.len() >= self.size()
    }

    pub fn is_bottom_full(&self) -> bool {
        self.bottom.len() >= self.size()
    }

    // ==================== Editing ====================

    /// Append a symbol to the top row. Returns false if the row is full or the
    /// symbol is not in the alphabet.
    pub fn push_top(&mut self, symbol: Symbol) -> bool {
        let accepted = push_bounded(&mut self.top, &self.config.alphabet, symbol);
        trace!(%symbol, accepted, len = self.top.len(), "push top");
        accepted
    }

    /// Append a symbol to the bottom row, with the same rules as [`Self::push_top`].
    pub fn push_bottom(&mut self, symbol: Symbol) -> bool {
        let accepted = push_bounded(&mut self.bottom, &self.config.alphabet, symbol);
        trace!(%symbol, accepted, len = self.bottom.len(), "push bottom");
        accepted
    }

    pub fn pop_top(&mut self) -> Option<Symbol> {
        self.top.pop()
    }

    pub fn pop_bottom(&mut self) -> Option<Symbol> {
        self.bottom.pop()
    }

    pub fn clear_top(&mut self) {
        self.top.clear();
    }

    pub fn clear_bottom(&mut self) {
        self.bottom.clear();
    }

    /// Replace the operator text. Non-digits are dropped and at most `N`
    /// digits are kept.
    pub fn set_operator_text(&mut self, text: &str) {
        self.operator = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.size())
            .collect();
    }

    pub fn set_candidates_text(&mut self, text: &str) {
        self.candidates = text.to_string();
    }

    /// Clear rows, operator, and candidates. Configuration is kept.
    pub fn reset(&mut self) {
        self.top.clear();
        self.bottom.clear();
        self.operator.clear();
        self.candidates.clear();
        debug!("session reset");
    }

    /// Switch to another alphabet. Rows and operator are cleared because they
    /// were entered against the old symbols; candidates are kept.
    pub fn set_alphabet(&mut self, alphabet: Alphabet) {
        debug!(from = self.size(), to = alphabet.len(), "alphabet changed");
        self.config.alphabet = alphabet;
        self.top.clear();
        self.bottom.clear();
        self.operator.clear();
    }

    pub fn set_directions(&mut self, directions: Directions) {
        self.config.directions = directions;
    }

    pub fn set_operator_policy(&mut self, policy: OperatorPolicy) {
        self.config.operator_policy = policy;
    }

    // ==================== Evaluation ====================

    /// Derive codes and candidate matches from the current snapshot.
    pub fn evaluate(&self) -> Evaluation {
        let n = self.size();
        if self.top.len() < n || self.bottom.len() < n || self.operator.len() < n {
            return Evaluation::incomplete();
        }

        let evaluation = self.evaluate_complete();
        debug!(
            status = ?evaluation.status,
            forward = ?evaluation.forward.as_ref().map(DerivedCode::as_str),
            inverse = ?evaluation.inverse.as_ref().map(DerivedCode::as_str),
            "evaluated"
        );
        evaluation
    }

    fn evaluate_complete(&self) -> Evaluation {
        let Derivation { forward, inverse } =
            derive_codes(&self.config, &self.top, &self.bottom, &self.operator);

        let (forward, inverse, inverse_error) = match (forward, inverse) {
            (Err(err), Some(Err(_)) | None) => return Self::invalid(err),
            (Err(_), Some(Ok(inverse))) => (None, Some(inverse), None),
            (Ok(forward), None) => (Some(forward), None, None),
            (Ok(forward), Some(Ok(inverse))) => (Some(forward), Some(inverse), None),
            (Ok(forward), Some(Err(err))) => (Some(forward), None, Some(err)),
        };

        let matches = MatchReport::new(forward.as_ref(), inverse.as_ref(), &self.candidates);
        Evaluation {
            status: if matches.any() { Status::Matched } else { Status::NoMatch },
            forward,
            inverse,
            inverse_error,
            matches,
        }
    }

    fn invalid(err: TransformError) -> Evaluation {
        Evaluation {
            status: Status::Invalid(err),
            ..Evaluation::incomplete()
        }
    }
}

/// Codes derived from one complete set of inputs, before candidate matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub forward: Result<DerivedCode, TransformError>,
    /// `None` when only the forward direction is configured.
    pub inverse: Option<Result<DerivedCode, TransformError>>,
}

/// Parse `operator_text` and run the transforms `config` asks for.
///
/// An operator that fails to parse is reported as the error of every
/// requested direction.
pub fn derive_codes(
    config: &SessionConfig,
    top: &[Symbol],
    bottom: &[Symbol],
    operator_text: &str,
) -> Derivation {
    let alphabet = &config.alphabet;
    let policy = config.operator_policy;

    let operator = match Operator::parse(operator_text, alphabet.len()) {
        Ok(operator) => operator,
        Err(err) => {
            let err = TransformError::from(err);
            return Derivation {
                forward: Err(err),
                inverse: match config.directions {
                    Directions::Forward => None,
                    Directions::Both => Some(Err(err)),
                },
            };
        }
    };
    let indices = operator.as_slice();

    Derivation {
        forward: try_forward_transform(alphabet, top, bottom, indices, policy),
        inverse: match config.directions {
            Directions::Forward => None,
            Directions::Both => Some(try_inverse_transform(alphabet, top, bottom, indices, policy)),
        },
    }
}

fn push_bounded(row: &mut Vec<Symbol>, alphabet: &Alphabet, symbol: Symbol) -> bool {
    if row.len() >= alphabet.len() || !alphabet.contains(symbol) {
        return false;
    }
    row.push(symbol);
    true
}
