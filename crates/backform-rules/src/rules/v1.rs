//! First rule set, as used for the DECOW16A-nano samples.

use backform_types::Pos::{Adj, Noun, Verb};

use super::Rule;
use super::shared::{self, NIS_REJECTS, sibling_with};
use crate::candidates::CandidateSet;
use crate::suffix::Suffix;
use crate::text::{
    capitalize, char_from_end, drop_last, fold_case, has_umlaut, lookup_exact, replace_irregular,
    strip_umlauts, umlaut_sibling, when,
};

pub(super) static RULES: [Rule; 34] = [
    Rule::new(Suffix::Age, shared::ieren),
    Rule::new(Suffix::And, shared::ieren),
    Rule::new(Suffix::Ant, shared::ieren),
    Rule::new(Suffix::Anz, shared::ieren),
    Rule::new(Suffix::Ation, shared::ieren),
    Rule::new(Suffix::Atur, shared::ieren),
    Rule::new(Suffix::Ement, shared::ieren),
    Rule::new(Suffix::End, shared::ieren),
    Rule::new(Suffix::Ent, shared::ieren),
    Rule::new(Suffix::Enz, shared::ieren),
    Rule::new(Suffix::Eur, shared::ieren),
    Rule::new(Suffix::Iment, shared::ieren),
    Rule::new(Suffix::Iteur, shared::ieren),
    Rule::new(Suffix::Itur, shared::ieren),
    Rule::new(Suffix::Ament, shared::ieren_or_zieren),
    Rule::new(Suffix::Ateur, shared::ieren_or_zieren),
    Rule::new(Suffix::Ator, shared::ieren_or_zieren),
    Rule::new(Suffix::E, e),
    Rule::new(Suffix::El, shared::el),
    Rule::new(Suffix::Er, er),
    Rule::new(Suffix::Heit, heit),
    Rule::new(Suffix::Ie, shared::ie),
    Rule::new(Suffix::Ik, shared::isch_adjective),
    Rule::new(Suffix::Iker, shared::isch_adjective),
    Rule::new(Suffix::Ikum, shared::isch_adjective),
    Rule::new(Suffix::Ismus, ismus),
    Rule::new(Suffix::Ist, ist),
    // Five characters, as if `ä` were two.
    Rule::new(Suffix::Itaet, itaet),
    Rule::new(Suffix::Ition, shared::ition),
    Rule::new(Suffix::Ium, shared::ium),
    Rule::new(Suffix::Ling, ling),
    Rule::new(Suffix::Nis, shared::nis).rejecting(NIS_REJECTS),
    Rule::new(Suffix::Schaft, schaft),
    Rule::new(Suffix::Ung, ung),
];

const E_IRREGULAR: &[(&str, &str)] = &[("gab", "geb"), ("sprach", "sprech")];

const IST_LAST_VOWEL: &[(&str, &str)] = &[
    ("Poliz", "Polizei"),
    ("Pian", "Piano"),
    ("Gitarr", "Gitarre"),
    ("Anarch", "Anarchie"),
    ("Propagand", "Propaganda"),
];

const SCHAFT_IRREGULAR: &[(&str, &str)] = &[("Brüder", "Bruder")];

const LING_E_ADJECTIVES: &[&str] = &["feig", "träg", "weis"];

fn e(lemma: &str, strip: usize) -> CandidateSet {
    let folded = fold_case(drop_last(lemma, strip));
    let bare = strip_umlauts(&folded);
    let stem = replace_irregular(&folded, E_IRREGULAR);

    let mut out = CandidateSet::new();
    out.set(1, Adj, capitalize(&stem));
    out.set(2, Adj, when(has_umlaut(&stem), || bare));
    out.set(3, Verb, format!("{stem}en"));
    out
}

fn er(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));
    let bare = strip_umlauts(&stem);
    let long = stem.chars().count() > 1;
    let umlauted = has_umlaut(&stem);
    let ends_l = stem.ends_with('l');
    let ends_r = stem.ends_with('r');
    let ends_an = stem.ends_with("an");

    let mut out = CandidateSet::new();
    out.set(1, Verb, when(long, || format!("{stem}en")));
    out.set(2, Verb, when(long && umlauted, || format!("{bare}en")));
    out.set(3, Verb, when(long && ends_r, || format!("{stem}n")));
    out.set(
        4,
        Verb,
        when(long && ends_l, || format!("{}eln", drop_last(&stem, 1))),
    );
    out.set(
        5,
        Verb,
        when(long && ends_l && umlauted, || {
            format!("{}eln", drop_last(&bare, 1))
        }),
    );

    out.set(
        6,
        Noun,
        when(long && ends_l, || capitalize(drop_last(&stem, 1))),
    );
    out.set(
        7,
        Noun,
        when(long && ends_l && umlauted, || {
            capitalize(drop_last(&bare, 1))
        }),
    );
    out.set(8, Noun, when(long, || capitalize(&stem)));
    out.set(9, Noun, when(long && umlauted, || capitalize(&bare)));
    // Gärtner -> Garten
    out.set(
        10,
        Noun,
        when(long && bare.ends_with('n'), || {
            format!("{}en", capitalize(drop_last(&bare, 1)))
        }),
    );
    // Abenteurer -> Abenteuer
    out.set(
        11,
        Noun,
        when(long && ends_r, || {
            format!("{}er", capitalize(drop_last(&stem, 1)))
        }),
    );
    // Schüler -> Schule
    out.set(12, Noun, when(long, || format!("{}e", capitalize(&bare))));
    // Lutheraner -> Luther, Amerikaner -> Amerika, Sizilianer -> Sizilien
    out.set(
        13,
        Noun,
        when(long && ends_an, || capitalize(drop_last(&stem, 2))),
    );
    out.set(
        14,
        Noun,
        when(long && ends_an, || {
            format!("{}a", capitalize(drop_last(&stem, 2)))
        }),
    );
    out.set(
        15,
        Noun,
        when(long && ends_an, || {
            format!("{}en", capitalize(drop_last(&stem, 2)))
        }),
    );
    out
}

fn heit(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));
    // Only -heit (not -keit) can follow a subtracted -e: Weisheit, Trägheit.
    let heit = char_from_end(lemma, strip) == Some('h');

    let mut out = CandidateSet::new();
    out.set(1, Adj, stem.clone());
    out.set(
        2,
        Adj,
        when(stem.ends_with("ig"), || drop_last(&stem, 2).to_string()),
    );
    out.set(3, Adj, when(stem.ends_with("en"), || format!("{stem}d")));
    out.set(4, Adj, when(heit, || format!("{stem}e")));
    out
}

fn ismus(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));

    let mut out = CandidateSet::new();
    out.set(1, Adj, stem.clone());
    out.set(
        2,
        Adj,
        when(stem.ends_with("al"), || format!("{}ell", drop_last(&stem, 2))),
    );
    out.set(
        3,
        Adj,
        when(stem.ends_with("ar"), || format!("{}är", drop_last(&stem, 2))),
    );
    out.set(4, Adj, format!("{stem}isch"));
    out.set(
        5,
        Adj,
        when(stem.ends_with("iz"), || format!("{}isch", drop_last(&stem, 2))),
    );
    // The second assignment replaces the first; only the -ik noun survives.
    out.set(6, Noun, capitalize(&stem));
    out.set(6, Noun, format!("{}ik", capitalize(&stem)));
    out
}

fn ist(lemma: &str, strip: usize) -> CandidateSet {
    let whole = fold_case(lemma);
    let stem = fold_case(drop_last(lemma, strip));
    let noun = capitalize(&stem);

    let mut out = CandidateSet::new();
    out.set(1, Adj, stem.clone());
    out.set(2, Adj, format!("{stem}isch"));
    out.set(3, Adj, format!("{whole}isch"));
    out.set(4, Verb, format!("{stem}ieren"));
    out.set(
        5,
        Noun,
        lookup_exact(&noun, IST_LAST_VOWEL).unwrap_or_default(),
    );
    out.set(6, Noun, noun);
    out
}

fn itaet(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));

    let mut out = CandidateSet::new();
    out.set(1, Adj, stem.clone());
    out.set(
        2,
        Adj,
        when(stem.ends_with("al"), || format!("{}ell", drop_last(&stem, 2))),
    );
    out.set(
        3,
        Adj,
        when(stem.ends_with("bil"), || format!("{}bel", drop_last(&stem, 3))),
    );
    out.set(
        4,
        Adj,
        when(stem.ends_with("iz"), || format!("{}isch", drop_last(&stem, 2))),
    );
    out
}

fn ling(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));

    let mut out = CandidateSet::new();
    out.set(1, Adj, stem.clone());
    out.set(2, Adj, umlaut_sibling(&stem));
    out.set(
        3,
        Adj,
        when(LING_E_ADJECTIVES.contains(&stem.as_str()), || {
            format!("{stem}e")
        }),
    );
    out.set(4, Verb, format!("{stem}en"));
    out.set(
        5,
        Verb,
        when(stem.ends_with(['r', 'l']), || format!("{stem}n")),
    );
    out.set(6, Verb, sibling_with(&stem, "en"));
    out
}

fn schaft(lemma: &str, strip: usize) -> CandidateSet {
    let noun = replace_irregular(drop_last(lemma, strip), SCHAFT_IRREGULAR);
    let low = fold_case(&noun);
    let ends_en = noun.ends_with("en");

    let mut out = CandidateSet::new();
    out.set(1, Noun, noun.clone());
    out.set(2, Noun, format!("{noun}e"));
    out.set(3, Adj, low.clone());
    out.set(4, Verb, format!("{low}en"));
    out.set(5, Verb, when(low.ends_with('r'), || format!("{low}n")));
    out.set(6, Noun, when(ends_en, || drop_last(&noun, 1).to_string()));
    out.set(7, Noun, when(ends_en, || drop_last(&noun, 2).to_string()));
    out
}

fn ung(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));

    let mut out = CandidateSet::new();
    out.set(1, Verb, format!("{stem}en"));
    out.set(2, Verb, when(stem.ends_with('r'), || format!("{stem}n")));
    out.set(
        3,
        Verb,
        when(stem.ends_with('l'), || format!("{}eln", drop_last(&stem, 1))),
    );
    out
}
