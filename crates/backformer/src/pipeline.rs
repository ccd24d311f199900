//! Normalize, backform, flatten: one suffix batch at a time.

use std::collections::HashMap;
use std::panic;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use backform_rules::{CandidateSet, Prefix, RuleSet, Suffix};
use backform_types::{
    CandidateBase, DerivationRecord, NormalizedRecord, Pos, Provenance, UniqueCandidate,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::flatten::flatten;
use crate::normalize::{NormalizeMode, normalize_all};
use crate::query::{QueryRequest, derivation_query, to_query};

/// A normalized record together with every slot its rule produced.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BackformedRow {
    pub lemma: String,
    pub word: String,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub candidates: CandidateSet,
}

impl BackformedRow {
    fn new(record: &NormalizedRecord, candidates: CandidateSet) -> Self {
        Self {
            lemma: record.lemma().to_string(),
            word: record.word().to_string(),
            provenance: record.provenance().clone(),
            candidates,
        }
    }
}

/// Output of one batch: the wide rows and the deduplicated long table.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Backformation {
    pub rows: Vec<BackformedRow>,
    pub candidates: Vec<CandidateBase>,
}

impl Backformation {
    fn from_rows(rows: Vec<BackformedRow>) -> Self {
        let candidates = flatten(&rows);
        Self { rows, candidates }
    }

    pub fn queries(&self) -> Vec<QueryRequest> {
        self.candidates
            .iter()
            .map(|c| QueryRequest::from(UniqueCandidate::from(c)))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Backformer {
    pub rule_set: RuleSet,
    pub mode: NormalizeMode,
}

impl Backformer {
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            rule_set,
            mode: NormalizeMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: NormalizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Normalize raw matches, then apply the suffix rule.
    pub fn backform_records(&self, records: &[DerivationRecord], suffix: Suffix) -> Vec<BackformedRow> {
        let normalized = normalize_all(records, self.mode);
        self.backform_normalized(&normalized, suffix)
    }

    /// Apply the suffix rule to records that are already clean.
    pub fn backform_normalized(
        &self,
        records: &[NormalizedRecord],
        suffix: Suffix,
    ) -> Vec<BackformedRow> {
        let rule = self.rule_set.rule(suffix);
        records
            .iter()
            .filter_map(|record| match rule.apply(record.lemma()) {
                Some(candidates) => Some(BackformedRow::new(record, candidates)),
                None => {
                    debug!(lemma = record.lemma(), %suffix, "rejected lemma");
                    None
                }
            })
            .collect()
    }

    pub fn run(&self, records: &[DerivationRecord], suffix: Suffix) -> Backformation {
        let start = Instant::now();
        let out = Backformation::from_rows(self.backform_records(records, suffix));
        info!(
            %suffix,
            rule_set = %self.rule_set,
            records = records.len(),
            rows = out.rows.len(),
            candidates = out.candidates.len(),
            "backformed in {} ms",
            start.elapsed().as_millis()
        );
        out
    }

    /// Prefixed nouns; the rule set does not apply here.
    pub fn run_prefix(&self, records: &[DerivationRecord], prefix: &Prefix) -> Backformation {
        let rows = normalize_all(records, self.mode)
            .iter()
            .map(|record| BackformedRow::new(record, prefix.apply(record.lemma())))
            .collect();
        let out = Backformation::from_rows(rows);
        info!(
            %prefix,
            records = records.len(),
            candidates = out.candidates.len(),
            "backformed prefixed nouns"
        );
        out
    }

    /// Run several suffix batches on scoped threads; results keep input order.
    pub fn run_many(&self, batches: &[(Suffix, Vec<DerivationRecord>)]) -> Vec<(Suffix, Backformation)> {
        thread::scope(|scope| {
            let handles: Vec<_> = batches
                .iter()
                .map(|(suffix, records)| {
                    let suffix = *suffix;
                    scope.spawn(move || (suffix, self.run(records, suffix)))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload))
                })
                .collect()
        })
    }
}

/// A candidate base alongside the corpus counts for it and its derivation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub lemma: String,
    pub candidate: String,
    pub pos: Pos,
    pub lemma_freq: u64,
    pub base_freq: u64,
}

/// Count every candidate and its source lemma with `counter`.
///
/// `counter` receives a formatted query and returns its hit count. Each
/// distinct derivation lemma is counted once however many candidates it has.
pub fn annotate_frequencies<F>(candidates: &[CandidateBase], mut counter: F) -> Result<Vec<FrequencyRow>>
where
    F: FnMut(&str) -> Result<u64>,
{
    let mut lemma_freqs: HashMap<&str, u64> = HashMap::new();
    let mut out = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let lemma_freq = match lemma_freqs.get(candidate.lemma.as_str()) {
            Some(freq) => *freq,
            None => {
                let query = derivation_query(&candidate.lemma);
                let freq = counter(&query)
                    .with_context(|| format!("counting derivation {}", candidate.lemma))?;
                lemma_freqs.insert(&candidate.lemma, freq);
                freq
            }
        };
        let query = to_query(&UniqueCandidate::from(candidate));
        let base_freq =
            counter(&query).with_context(|| format!("counting candidate {}", candidate.form))?;
        out.push(FrequencyRow {
            lemma: candidate.lemma.clone(),
            candidate: candidate.form.clone(),
            pos: candidate.pos,
            lemma_freq,
            base_freq,
        });
    }
    debug!(
        rows = out.len(),
        lemmas = lemma_freqs.len(),
        "annotated frequencies"
    );
    Ok(out)
}
