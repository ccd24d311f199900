//! Second rule set, extended for the validity study.
//!
//! Differs from v1 in the irregular tables for `-e` and `-er`, in extra
//! candidates for `-er`, `-heit`, `-ismus`, `-ist`, `-itaet`, `-ling` and
//! `-ung`, and in routing `-ament`, `-ateur` and `-ator` through the
//! `-ieren` family.

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
    Rule::new(Suffix::Age, shared::ieren_or_zieren),
    Rule::new(Suffix::And, shared::ieren_or_zieren),
    Rule::new(Suffix::Ant, shared::ieren_or_zieren),
    Rule::new(Suffix::Anz, shared::ieren_or_zieren),
    Rule::new(Suffix::Ation, shared::ieren_or_zieren),
    Rule::new(Suffix::Atur, shared::ieren_or_zieren),
    Rule::new(Suffix::Ement, shared::ieren_or_zieren),
    Rule::new(Suffix::End, shared::ieren_or_zieren),
    Rule::new(Suffix::Ent, shared::ieren_or_zieren),
    Rule::new(Suffix::Enz, shared::ieren_or_zieren),
    Rule::new(Suffix::Eur, shared::ieren_or_zieren),
    Rule::new(Suffix::Iment, shared::ieren_or_zieren),
    Rule::new(Suffix::Iteur, shared::ieren_or_zieren),
    Rule::new(Suffix::Itur, shared::ieren_or_zieren),
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
    Rule::new(Suffix::Itaet, itaet).stripping(4),
    Rule::new(Suffix::Ition, shared::ition),
    Rule::new(Suffix::Ium, shared::ium),
    Rule::new(Suffix::Ling, ling),
    Rule::new(Suffix::Nis, shared::nis).rejecting(NIS_REJECTS),
    Rule::new(Suffix::Schaft, schaft),
    Rule::new(Suffix::Ung, ung),
];

const E_IRREGULAR: &[(&str, &str)] = &[
    ("gab", "geb"),
    ("sprach", "sprech"),
    ("nahm", "nehm"),
    ("hilf", "helf"),
    ("insass", "sitz"),
    ("mühl", "mahl"),
    ("rach", "räch"),
    ("stieg", "steig"),
];

const ER_IRREGULAR: &[(&str, &str)] = &[("satz", "setz"), ("säng", "sing"), ("gäng", "geh")];

const HEIT_EXACT: &[(&str, &str)] = &[("ho", "hoch")];

const IST_LAST_VOWEL: &[(&str, &str)] = &[("Poliz", "Polizei"), ("Pian", "Piano")];

const SCHAFT_IRREGULAR: &[(&str, &str)] = &[("Brüder", "Bruder")];

const LING_E_ADJECTIVES: &[&str] = &["feig", "träg", "weis"];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn e(lemma: &str, strip: usize) -> CandidateSet {
    let folded = fold_case(drop_last(lemma, strip));
    let bare = strip_umlauts(&folded);
    let stem = replace_irregular(&folded, E_IRREGULAR);

    let mut out = CandidateSet::new();
    out.set(1, Adj, stem.clone());
    out.set(2, Adj, when(has_umlaut(&stem), || bare));
    out.set(3, Verb, format!("{stem}en"));
    out
}

fn er(lemma: &str, strip: usize) -> CandidateSet {
    let folded = fold_case(drop_last(lemma, strip));
    let bare = strip_umlauts(&folded);
    let stem = replace_irregular(&folded, ER_IRREGULAR);
    let long = stem.chars().count() > 1;
    let umlauted = has_umlaut(&stem);
    let ends_l = stem.ends_with('l');
    let ends_r = stem.ends_with('r');
    let ends_n = stem.ends_with('n');
    let ends_an = stem.ends_with("an");
    let bare_ends_n = bare.ends_with('n');

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
        Verb,
        when(long && stem.ends_with("tu"), || format!("{stem}n")),
    );
    out.set(
        7,
        Verb,
        when(long && ends_l, || format!("{}en", drop_last(&stem, 1))),
    );
    // Schuldner -> schulden
    out.set(
        8,
        Verb,
        when(long && ends_n, || format!("{}en", drop_last(&stem, 1))),
    );

    out.set(
        1,
        Noun,
        when(long && ends_l, || capitalize(drop_last(&stem, 1))),
    );
    out.set(
        2,
        Noun,
        when(long && ends_l && umlauted, || {
            capitalize(drop_last(&bare, 1))
        }),
    );
    out.set(3, Noun, when(long, || capitalize(&stem)));
    out.set(4, Noun, when(long && umlauted, || capitalize(&bare)));
    // Gärtner -> Garten
    out.set(
        5,
        Noun,
        when(long && bare_ends_n, || {
            format!("{}en", capitalize(drop_last(&bare, 1)))
        }),
    );
    // Abenteurer -> Abenteuer
    out.set(
        6,
        Noun,
        when(long && ends_r, || {
            format!("{}er", capitalize(drop_last(&stem, 1)))
        }),
    );
    // Schüler -> Schule
    out.set(7, Noun, when(long, || format!("{}e", capitalize(&bare))));
    // Lutheraner -> Luther, Amerikaner -> Amerika, Sizilianer -> Sizilien
    out.set(
        8,
        Noun,
        when(long && ends_an, || capitalize(drop_last(&stem, 2))),
    );
    out.set(
        9,
        Noun,
        when(long && ends_an, || {
            format!("{}a", capitalize(drop_last(&stem, 2)))
        }),
    );
    out.set(
        10,
        Noun,
        when(long && ends_an, || {
            format!("{}en", capitalize(drop_last(&stem, 2)))
        }),
    );
    out.set(11, Noun, when(long, || format!("{}e", capitalize(&stem))));
    // Sprachler -> Sprache
    out.set(
        12,
        Noun,
        when(long && ends_l, || {
            format!("{}e", capitalize(drop_last(&stem, 1)))
        }),
    );
    // Rentner -> Rente
    out.set(
        13,
        Noun,
        when(long && ends_n, || {
            format!("{}e", capitalize(drop_last(&stem, 1)))
        }),
    );
    // Söldner -> Sold, Glöckner -> Glocke
    out.set(
        14,
        Noun,
        when(long && bare_ends_n, || capitalize(drop_last(&bare, 1))),
    );
    out.set(
        15,
        Noun,
        when(long && bare_ends_n, || {
            format!("{}e", capitalize(drop_last(&bare, 1)))
        }),
    );
    out
}

fn heit(lemma: &str, strip: usize) -> CandidateSet {
    let folded = fold_case(drop_last(lemma, strip));
    // Arbeitslosigkeit -> arbeitslos
    let trimmed = if folded.ends_with("losig") {
        drop_last(&folded, 2)
    } else {
        folded.as_str()
    };
    let bare = strip_umlauts(trimmed);
    let stem = lookup_exact(trimmed, HEIT_EXACT).unwrap_or(trimmed);
    let heit = char_from_end(lemma, strip) == Some('h');
    let los = stem.ends_with("los");
    let rounds = stem.contains('o') && !los;
    let rounded = stem.replace('o', "ö");
    let ends_ig = stem.ends_with("ig");

    let mut out = CandidateSet::new();
    out.set(1, Adj, stem);
    out.set(2, Adj, when(ends_ig, || drop_last(stem, 2).to_string()));
    out.set(3, Adj, when(stem.ends_with("en"), || format!("{stem}d")));
    out.set(4, Adj, when(heit && !los, || format!("{stem}e")));
    out.set(5, Adj, when(rounds, || rounded.clone()));
    out.set(6, Adj, when(rounds, || format!("{rounded}e")));
    out.set(7, Adj, when(!los, || format!("{stem}t")));
    out.set(8, Adj, when(rounds, || format!("{rounded}t")));
    out.set(9, Adj, when(has_umlaut(stem), || bare.clone()));
    out.set(10, Adj, when(ends_ig, || drop_last(&bare, 2).to_string()));
    out
}

fn ismus(lemma: &str, strip: usize) -> CandidateSet {
    let raw = drop_last(lemma, strip);
    let stem = fold_case(raw);

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
    out.set(6, Adj, format!("{stem}istisch"));
    out.set(1, Noun, raw);
    out.set(
        2,
        Noun,
        match raw.chars().last() {
            None => String::new(),
            Some('z') => format!("{}ik", drop_last(raw, 2)),
            Some(_) => format!("{raw}ik"),
        },
    );
    out.set(3, Noun, format!("{raw}istik"));
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
    out.set(6, Noun, noun.clone());
    out.set(7, Noun, format!("{noun}ie"));
    out.set(8, Noun, format!("{noun}e"));
    out.set(
        9,
        Noun,
        when(noun.ends_with("al"), || drop_last(&noun, 2).to_string()),
    );
    out.set(10, Noun, format!("{noun}a"));
    out.set(11, Noun, format!("{noun}ismus"));
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
    out.set(4, Adj, format!("{}isch", drop_last(&stem, 2)));
    out.set(5, Adj, format!("{stem}isch"));
    out.set(
        6,
        Adj,
        when(stem.ends_with(VOWELS), || drop_last(&stem, 1).to_string()),
    );
    out.set(
        7,
        Adj,
        when(stem.ends_with('z'), || format!("{}k", drop_last(&stem, 1))),
    );
    out.set(
        8,
        Adj,
        when(stem.ends_with("os"), || format!("{}ös", drop_last(&stem, 2))),
    );
    out.set(
        9,
        Adj,
        when(stem.ends_with("ar"), || format!("{}är", drop_last(&stem, 2))),
    );
    out
}

fn ling(lemma: &str, strip: usize) -> CandidateSet {
    let raw = drop_last(lemma, strip);
    let stem = fold_case(raw);

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
    // Sprössling -> sprießen
    out.set(
        7,
        Verb,
        when(stem.contains('ö'), || {
            format!("{}en", stem.replace("ss", "ß").replace('ö', "ie"))
        }),
    );
    out.set(8, Noun, raw);
    out.set(9, Noun, format!("{raw}en"));
    out
}

fn schaft(lemma: &str, strip: usize) -> CandidateSet {
    let noun = replace_irregular(drop_last(lemma, strip), SCHAFT_IRREGULAR);
    let low = fold_case(&noun);

    let mut out = CandidateSet::new();
    out.set(1, Noun, noun.clone());
    out.set(2, Noun, format!("{noun}e"));
    out.set(3, Adj, low.clone());
    out.set(4, Verb, format!("{low}en"));
    out.set(5, Verb, when(low.ends_with('r'), || format!("{low}n")));
    out.set(
        6,
        Noun,
        when(noun.ends_with('n'), || drop_last(&noun, 1).to_string()),
    );
    // Slot 7 is assigned twice; the -er reading wins.
    out.set(
        7,
        Noun,
        when(noun.ends_with("en"), || drop_last(&noun, 2).to_string()),
    );
    out.set(
        7,
        Noun,
        when(noun.ends_with("er"), || drop_last(&noun, 2).to_string()),
    );
    out
}

fn ung(lemma: &str, strip: usize) -> CandidateSet {
    let stem = fold_case(drop_last(lemma, strip));
    let syllabic = (stem.ends_with("er") || stem.ends_with("el"))
        && char_from_end(&stem, 3).is_some_and(|c| c != 'i');

    let mut out = CandidateSet::new();
    out.set(1, Verb, format!("{stem}en"));
    out.set(2, Verb, when(syllabic, || format!("{stem}n")));
    out.set(
        3,
        Verb,
        when(stem.ends_with('l') && !stem.ends_with("ll"), || {
            format!("{}eln", drop_last(&stem, 1))
        }),
    );
    out
}
