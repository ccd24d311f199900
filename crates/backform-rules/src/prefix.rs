use std::fmt;
use std::str::FromStr;

use backform_types::Pos;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::candidates::CandidateSet;
use crate::text::{capitalize, drop_first};

/// A nominal prefix written with its trailing hyphen, e.g. `Um-`.
///
/// `Ge-` has its own rule elsewhere and is not handled here.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Prefix(String);

#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("invalid prefix {0:?}, expected a prefix ending in '-' such as \"Um-\"")]
pub struct InvalidPrefixError(pub String);

impl Prefix {
    pub fn new(tag: impl Into<String>) -> Result<Self, InvalidPrefixError> {
        let tag = tag.into();
        if tag.chars().count() < 2 || !tag.ends_with('-') {
            return Err(InvalidPrefixError(tag));
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Characters removed from the front of a lemma.
    pub fn strip(&self) -> usize {
        self.0.chars().count() - 1
    }

    /// The single noun candidate: `Umweg` with `Um-` gives `Weg`.
    pub fn apply(&self, lemma: &str) -> CandidateSet {
        let mut out = CandidateSet::new();
        let form = if lemma.chars().count() <= self.strip() {
            String::new()
        } else {
            capitalize(drop_first(lemma, self.strip()))
        };
        out.set(1, Pos::Noun, form);
        out
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Prefix {
    type Err = InvalidPrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::new(s)
    }
}

impl Serialize for Prefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Prefix::new(tag).map_err(serde::de::Error::custom)
    }
}
