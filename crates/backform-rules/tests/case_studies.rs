use backform_rules::{Prefix, RuleSet, Suffix, backform, backform_prefix};
use backform_types::Pos;

fn suffix(tag: &str) -> Suffix {
    tag.parse().expect("known suffix")
}

#[test]
fn loesung_backforms_to_loesen() {
    for rule_set in RuleSet::ALL {
        let slots = backform(rule_set, suffix("-ung"), "Lösung").expect("not rejected");
        assert_eq!(slots.get(1, Pos::Verb), Some("lösen"));
        assert_eq!(slots.get(2, Pos::Verb), Some(""));
        assert_eq!(slots.get(3, Pos::Verb), Some(""));
        let forms: Vec<_> = slots.applicable().map(|c| c.form.as_str()).collect();
        assert_eq!(forms, ["lösen"]);
    }
}

#[test]
fn schoenheit_has_schoen_and_unumlauted_sibling() {
    let slots = backform(RuleSet::V2, suffix("-heit"), "Schönheit").expect("not rejected");
    let forms: Vec<_> = slots.applicable().map(|c| c.form.as_str()).collect();
    assert!(forms.contains(&"schön"));
    assert!(forms.contains(&"schon"));
    assert!(slots.applicable().all(|c| c.slot.pos == Pos::Adj));
}

#[test]
fn tennis_is_not_a_nis_derivation() {
    for rule_set in RuleSet::ALL {
        assert!(backform(rule_set, suffix("-nis"), "Tennis").is_none());
        assert!(backform(rule_set, suffix("-nis"), "Penis").is_none());
    }
}

#[test]
fn gaertner_reaches_garten_in_both_versions() {
    for rule_set in RuleSet::ALL {
        let slots = backform(rule_set, suffix("-er"), "Gärtner").expect("not rejected");
        assert!(
            slots.applicable().any(|c| c.form == "Garten" && c.slot.pos == Pos::Noun),
            "{rule_set}"
        );
    }
}

#[test]
fn v2_adds_zieren_for_the_whole_ieren_family() {
    let slots = backform(RuleSet::V2, suffix("-ation"), "Fabrikation").expect("not rejected");
    assert_eq!(slots.get(2, Pos::Verb), Some("fabrizieren"));

    let slots = backform(RuleSet::V1, suffix("-ation"), "Fabrikation").expect("not rejected");
    assert_eq!(slots.get(1, Pos::Verb), Some("fabrikieren"));
    assert_eq!(slots.get(2, Pos::Verb), None);
}

#[test]
fn prefixed_noun() {
    let prefix: Prefix = "Um-".parse().expect("valid prefix");
    let slots = backform_prefix("Umweg", &prefix);
    assert_eq!(slots.get(1, Pos::Noun), Some("Weg"));
    assert!("Um".parse::<Prefix>().is_err());
}

#[test]
fn unknown_suffix_names_the_recognized_set() {
    let err = "-keit".parse::<Suffix>().unwrap_err();
    assert_eq!(err.tag, "-keit");
    assert_eq!(err.recognized.len(), 34);
    assert_eq!(err.recognized[0], "-age");
}
