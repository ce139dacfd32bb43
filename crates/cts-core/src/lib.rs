//! Core engine for CTS reordering and renumbering puzzles.
//!
//! A puzzle shows two arrangements of the same symbols (a top row and a
//! bottom row) plus a numeric operator. This crate derives the answer code
//! in both directions and checks it against a list of candidate answers:
//!
//! - [`forward_transform`] reorders the top row by the operator, renumbers the
//!   result `1..=N`, and reads the bottom row through that numbering.
//! - [`inverse_transform`] answers the reverse question using the inverse
//!   operator and the rank order the top row induces on the bottom row.
//! - [`match_candidate`] finds the candidate answer equal to a derived code.
//!
//! [`Session`] wraps all three behind the editing model a front end needs.

pub mod alphabet;
pub mod code;
pub mod error;
pub mod matcher;
pub mod operator;
pub mod session;
pub mod transform;

pub use alphabet::{Alphabet, PresetTable, Symbol, MAX_ALPHABET_SIZE};
pub use code::DerivedCode;
pub use error::{AlphabetError, OperatorError, TransformError};
pub use matcher::{match_candidate, CandidateSet, MatchReport};
pub use operator::{Operator, OperatorPolicy};
pub use session::{
    derive_codes, Derivation, Directions, Evaluation, Session, SessionConfig, SessionState, Status,
};
pub use transform::{
    forward_transform, inverse_transform, try_forward_transform, try_inverse_transform,
};
