//! Rule tables, one per rule-set version.

mod shared;
mod v1;
mod v2;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::candidates::CandidateSet;
use crate::suffix::Suffix;

/// Builds the candidate slots for a lemma, given how many characters to strip.
pub type RuleFn = fn(&str, usize) -> CandidateSet;

/// One suffix's entry in a rule table.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub suffix: Suffix,
    /// Trailing characters removed before the stem is analysed.
    pub strip: usize,
    /// Lemmas that merely look like derivations; these produce no row at all.
    pub rejects: &'static [&'static str],
    apply: RuleFn,
}

impl Rule {
    pub const fn new(suffix: Suffix, apply: RuleFn) -> Self {
        Self {
            suffix,
            strip: suffix.tag_len(),
            rejects: &[],
            apply,
        }
    }

    pub const fn stripping(mut self, strip: usize) -> Self {
        self.strip = strip;
        self
    }

    pub const fn rejecting(mut self, rejects: &'static [&'static str]) -> Self {
        self.rejects = rejects;
        self
    }

    /// Candidates for `lemma`, or `None` when the lemma is on the reject list.
    ///
    /// A lemma no longer than the strip length keeps every slot but with
    /// empty forms.
    pub fn apply(&self, lemma: &str) -> Option<CandidateSet> {
        if self.rejects.contains(&lemma) {
            return None;
        }
        let mut out = (self.apply)(lemma, self.strip);
        if lemma.chars().count() <= self.strip {
            out.blank();
        }
        Some(out)
    }
}

/// Which generation of the rule tables to run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Rules used to build the per-suffix samples.
    V1,
    /// Extended rules used for the validity measures.
    #[default]
    V2,
}

impl RuleSet {
    pub const ALL: [RuleSet; 2] = [RuleSet::V1, RuleSet::V2];

    pub const fn as_str(self) -> &'static str {
        match self {
            RuleSet::V1 => "v1",
            RuleSet::V2 => "v2",
        }
    }

    pub fn rules(self) -> &'static [Rule; 34] {
        match self {
            RuleSet::V1 => &v1::RULES,
            RuleSet::V2 => &v2::RULES,
        }
    }

    pub fn rule(self, suffix: Suffix) -> &'static Rule {
        &self.rules()[suffix as usize]
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("invalid rule set {0:?}, expected v1 or v2")]
pub struct InvalidRuleSetError(pub String);

impl FromStr for RuleSet {
    type Err = InvalidRuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(RuleSet::V1),
            "v2" | "2" => Ok(RuleSet::V2),
            _ => Err(InvalidRuleSetError(s.to_string())),
        }
    }
}
