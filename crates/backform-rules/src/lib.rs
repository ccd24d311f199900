//! Suffix rules that hypothesise candidate bases for German derivations.
//!
//! Each rule strips a derivational suffix from a lemma and emits a fixed,
//! ordered set of named slots (`base_cand{n}_{tag}`), one per plausible base.
//! A slot whose structural condition does not hold carries an empty form, so
//! every lemma run through the same rule yields the same slot layout. The
//! crate does not check whether a candidate is a real word; that is left to
//! whoever counts the candidates in a corpus.
//!
//! # How it works
//! 1. Look up the [`Rule`] for the suffix in the chosen [`RuleSet`] table.
//! 2. Drop lemmas on the rule's reject list (`Tennis` is not a `-nis` noun).
//! 3. Strip the suffix, fold case, and resolve irregular stems in order.
//! 4. Fill every slot; blank all of them if the lemma was too short to strip.
//!
//! # Example
//! ```rust
//! use backform_rules::{RuleSet, Suffix, backform};
//! use backform_types::Pos;
//!
//! let suffix: Suffix = "-ung".parse()?;
//! let slots = backform(RuleSet::V2, suffix, "Lösung").expect("not rejected");
//! assert_eq!(slots.get(1, Pos::Verb), Some("lösen"));
//! assert_eq!(slots.get(2, Pos::Verb), Some(""));
//!
//! assert!(backform(RuleSet::V2, "-nis".parse()?, "Tennis").is_none());
//! # Ok::<(), backform_rules::InvalidSuffixError>(())
//! ```

mod candidates;
mod prefix;
mod rules;
mod suffix;
pub mod text;

pub use candidates::{Candidate, CandidateSet};
pub use prefix::{InvalidPrefixError, Prefix};
pub use rules::{InvalidRuleSetError, Rule, RuleFn, RuleSet};
pub use suffix::{InvalidSuffixError, Suffix};

/// Run the `suffix` rule of `rule_set` on one lemma.
///
/// `None` means the lemma is a known false positive and should be dropped.
pub fn backform(rule_set: RuleSet, suffix: Suffix, lemma: &str) -> Option<CandidateSet> {
    rule_set.rule(suffix).apply(lemma)
}

/// Candidate for a prefixed noun such as `Umweg` under `Um-`.
pub fn backform_prefix(lemma: &str, prefix: &Prefix) -> CandidateSet {
    prefix.apply(lemma)
}
