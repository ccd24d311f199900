//! Rules both rule-set versions agree on.

use backform_types::Pos::{Adj, Noun, Verb};

use crate::candidates::CandidateSet;
use crate::text::{
    capitalize, drop_last, fold_case, has_umlaut, replace_irregular, strip_umlauts,
    umlaut_sibling, when,
};

/// Lemmas ending in `-nis` that are not `-nis` derivations.
pub(super) const NIS_REJECTS: &[&str] = &["Tennis", "Anis", "Penis", "Dennis"];

// Irregular stems, and stems where blanket removal of `ä` is wrong.
const NIS_IRREGULAR: &[(&str, &str)] = &[
    ("kennt", "kenn"),
    ("gedacht", "gedenk"),
    ("arger", "ärger"),
    ("bedrang", "bedräng"),
    ("stand", "steh"),
    ("verhang", "verhäng"),
    ("versaum", "versäum"),
];

/// Latinate nominalisations of `-ieren` verbs (`Blamage` → `blamieren`).
pub(super) fn ieren(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));
    let mut out = CandidateSet::new();
    out.set(1, Verb, format!("{stem}ieren"));
    out
}

/// As [`ieren`], plus `-zieren` for stems in `k` (`Fabrikant` → `fabrizieren`).
pub(super) fn ieren_or_zieren(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));
    let mut out = CandidateSet::new();
    out.set(1, Verb, when(!stem.is_empty(), || format!("{stem}ieren")));
    out.set(
        2,
        Verb,
        when(stem.ends_with('k'), || {
            format!("{}zieren", drop_last(&stem, 1))
        }),
    );
    out
}

/// `-el`: diminutive nouns (`Bündel`) and instrument nouns from verbs.
pub(super) fn el(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));
    let whole = fold_case(lemma);
    let umlauted = has_umlaut(&stem);
    let bare = strip_umlauts(&stem);

    let mut out = CandidateSet::new();
    out.set(1, Noun, capitalize(&stem));
    out.set(2, Noun, when(umlauted, || capitalize(&bare)));
    out.set(3, Verb, format!("{stem}en"));
    out.set(4, Verb, when(umlauted, || format!("{bare}en")));
    out.set(5, Verb, format!("{whole}n"));
    out.set(
        6,
        Verb,
        when(umlauted, || format!("{}n", strip_umlauts(&whole))),
    );
    out
}

pub(super) fn ie(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));
    let mut out = CandidateSet::new();
    out.set(1, Adj, stem.clone());
    out.set(2, Adj, format!("{stem}isch"));
    out
}

/// `-ik`, `-iker`, `-ikum`: relational adjective in `-isch`.
pub(super) fn isch_adjective(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));
    let mut out = CandidateSet::new();
    out.set(1, Adj, format!("{stem}isch"));
    out
}

pub(super) fn ition(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));
    let mut out = CandidateSet::new();
    out.set(1, Verb, format!("{stem}ieren"));
    out.set(
        2,
        Verb,
        when(stem.ends_with('s'), || {
            format!("{}nieren", drop_last(&stem, 1))
        }),
    );
    out
}

/// `-ium`; the noun keeps the lemma's own casing.
pub(super) fn ium(lemma: &str, strip: usize) -> CandidateSet {
    let raw = drop_last(lemma, strip);
    let mut out = CandidateSet::new();
    out.set(1, Verb, format!("{}ieren", fold_case(raw)));
    out.set(2, Noun, raw);
    out
}

/// `-nis`: adjectives (`geheim`, `gefangen`) or verbs (`ärgern`, `erleben`).
pub(super) fn nis(lemma: &str, strip: usize) -> CandidateSet {
    let folded = fold_case(drop_last(lemma, strip));
    // Older samples still carry the hyphenated first element.
    let unhyphenated = match folded.split('-').nth(1) {
        Some(after) => after,
        None => folded.as_str(),
    };
    let stem = replace_irregular(&unhyphenated.replace('ä', "a"), NIS_IRREGULAR);

    let mut out = CandidateSet::new();
    out.set(1, Adj, stem.clone());
    out.set(
        2,
        Adj,
        when(stem.starts_with("ge"), || format!("{stem}en")),
    );
    out.set(3, Verb, when(stem.ends_with("er"), || format!("{stem}n")));
    out.set(4, Verb, format!("{stem}en"));
    out.set(
        5,
        Verb,
        when(stem.ends_with('g') || stem.ends_with("ch"), || {
            format!("{stem}nen")
        }),
    );
    out
}

/// Unumlauted sibling of `stem` with `tail` appended, or empty.
pub(super) fn sibling_with(stem: &str, tail: &str) -> String {
    let bare = umlaut_sibling(stem);
    when(!bare.is_empty(), || format!("{bare}{tail}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ieren_family_strips_suffix_length() {
        let out = ieren("Blamage", 3);
        assert_eq!(out.get(1, Verb), Some("blamieren"));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn k_stems_get_zieren() {
        let out = ieren_or_zieren("Fabrikant", 3);
        assert_eq!(out.get(1, Verb), Some("fabrikieren"));
        assert_eq!(out.get(2, Verb), Some("fabrizieren"));

        let out = ieren_or_zieren("Organisator", 4);
        assert_eq!(out.get(1, Verb), Some("organisieren"));
        assert_eq!(out.get(2, Verb), Some(""));
    }

    #[test]
    fn el_emits_umlaut_siblings_only_for_umlauted_stems() {
        let out = el("Bündel", 2);
        assert_eq!(out.get(1, Noun), Some("Bünd"));
        assert_eq!(out.get(2, Noun), Some("Bund"));
        assert_eq!(out.get(3, Verb), Some("bünden"));
        assert_eq!(out.get(4, Verb), Some("bunden"));
        assert_eq!(out.get(5, Verb), Some("bündeln"));
        assert_eq!(out.get(6, Verb), Some("bundeln"));

        let out = el("Hebel", 2);
        assert_eq!(out.get(2, Noun), Some(""));
        assert_eq!(out.get(3, Verb), Some("heben"));
        assert_eq!(out.get(6, Verb), Some(""));
    }

    #[test]
    fn ik_family_builds_isch_adjectives() {
        assert_eq!(isch_adjective("Romantik", 2).get(1, Adj), Some("romantisch"));
        assert_eq!(isch_adjective("Akademiker", 4).get(1, Adj), Some("akademisch"));
        assert_eq!(isch_adjective("Physikum", 4).get(1, Adj), Some("physisch"));
    }

    #[test]
    fn ition_adds_nieren_after_s() {
        let out = ition("Komposition", 5);
        assert_eq!(out.get(1, Verb), Some("komposieren"));
        assert_eq!(out.get(2, Verb), Some("komponieren"));
    }

    #[test]
    fn ium_keeps_noun_casing() {
        let out = ium("Studium", 3);
        assert_eq!(out.get(1, Verb), Some("studieren"));
        assert_eq!(out.get(2, Noun), Some("Stud"));
    }

    #[test]
    fn nis_handles_participles_and_irregulars() {
        let out = nis("Gefängnis", 3);
        assert_eq!(out.get(1, Adj), Some("gefang"));
        assert_eq!(out.get(2, Adj), Some("gefangen"));
        assert_eq!(out.get(5, Verb), Some("gefangnen"));

        let out = nis("Ärgernis", 3);
        assert_eq!(out.get(1, Adj), Some("ärger"));
        assert_eq!(out.get(3, Verb), Some("ärgern"));

        let out = nis("Verständnis", 3);
        assert_eq!(out.get(1, Adj), Some("versteh"));
        assert_eq!(out.get(4, Verb), Some("verstehen"));
    }

    #[test]
    fn nis_keeps_text_after_first_hyphen() {
        let out = nis("EU-Erlaubnis", 3);
        assert_eq!(out.get(4, Verb), Some("erlauben"));
    }
}
