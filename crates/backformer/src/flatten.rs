//! Long-format candidate table shared by every suffix.

use std::collections::HashSet;

use backform_types::{CandidateBase, Pos, Slot, UniqueCandidate};

use crate::pipeline::BackformedRow;

/// Melt rows into `(lemma, pos, form)` tuples, slot by slot.
///
/// All rows contribute their first slot before any row contributes its
/// second. A `(form, pos)` pair is kept the first time it is seen, along
/// with that row's lemma, and empty forms never appear in the output.
pub fn flatten(rows: &[BackformedRow]) -> Vec<CandidateBase> {
    let mut slots: Vec<Slot> = Vec::new();
    for row in rows {
        for slot in row.candidates.slots() {
            if !slots.contains(&slot) {
                slots.push(slot);
            }
        }
    }

    let mut seen: HashSet<(&str, Pos)> = HashSet::new();
    let mut out = Vec::new();
    for slot in slots {
        for row in rows {
            let Some(form) = row.candidates.form(slot) else {
                continue;
            };
            if form.is_empty() || !seen.insert((form, slot.pos)) {
                continue;
            }
            out.push(CandidateBase {
                lemma: row.lemma.clone(),
                pos: slot.pos,
                form: form.to_string(),
            });
        }
    }
    out
}

/// [`flatten`] without the back-reference to the source lemma.
pub fn unique_candidates(rows: &[BackformedRow]) -> Vec<UniqueCandidate> {
    flatten(rows).into_iter().map(UniqueCandidate::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use backform_rules::CandidateSet;
    use backform_types::Provenance;

    fn row(lemma: &str, slots: &[(u8, Pos, &str)]) -> BackformedRow {
        let mut candidates = CandidateSet::new();
        for (ordinal, pos, form) in slots {
            candidates.set(*ordinal, *pos, *form);
        }
        BackformedRow {
            lemma: lemma.to_string(),
            word: lemma.to_string(),
            provenance: Provenance::default(),
            candidates,
        }
    }

    #[test]
    fn emits_slot_major_order() {
        let rows = [
            row("Lösung", &[(1, Pos::Verb, "lösen"), (2, Pos::Verb, "")]),
            row("Wanderung", &[(1, Pos::Verb, "wanderen"), (2, Pos::Verb, "wandern")]),
        ];
        let forms: Vec<_> = flatten(&rows).into_iter().map(|c| c.form).collect();
        assert_eq!(forms, ["lösen", "wanderen", "wandern"]);
    }

    #[test]
    fn first_lemma_wins_on_duplicates() {
        let rows = [
            row("Lösung", &[(1, Pos::Verb, "lösen")]),
            row("Auflösung", &[(1, Pos::Verb, "lösen")]),
        ];
        let out = flatten(&rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lemma, "Lösung");
    }

    #[test]
    fn same_form_under_different_pos_is_kept_twice() {
        let rows = [row("Ärger", &[(1, Pos::Adj, "ärger"), (3, Pos::Verb, "ärger")])];
        assert_eq!(flatten(&rows).len(), 2);
    }

    #[test]
    fn never_emits_empty_or_duplicate_pairs() {
        let rows = [
            row("A", &[(1, Pos::Noun, "Weg"), (2, Pos::Noun, ""), (3, Pos::Adj, "weg")]),
            row("B", &[(1, Pos::Noun, ""), (2, Pos::Noun, "Weg"), (3, Pos::Adj, "weg")]),
        ];
        let out = unique_candidates(&rows);
        assert_eq!(
            out,
            [
                UniqueCandidate {
                    form: "Weg".into(),
                    pos: Pos::Noun
                },
                UniqueCandidate {
                    form: "weg".into(),
                    pos: Pos::Adj
                },
            ]
        );
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(flatten(&[]).is_empty());
    }
}
