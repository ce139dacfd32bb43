use serde::{Deserialize, Serialize};
use std::fmt;

/// The N-digit answer code produced by a transform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivedCode(String);

impl DerivedCode {
    /// Build a code from 1-based ranks. Ranks are always below 10 because
    /// alphabets hold at most nine symbols.
    pub(crate) fn from_ranks(ranks: impl IntoIterator<Item = usize>) -> Self {
        Self(
            ranks
                .into_iter()
                .filter_map(|rank| {
                    debug_assert!(rank <= 9, "rank {rank} does not fit in one digit");
                    char::from_digit(rank as u32, 10)
                })
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DerivedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DerivedCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DerivedCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DerivedCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
