//! Resolve each raw corpus match to the lemma the rules should analyse.

use std::fmt;
use std::str::FromStr;

use backform_types::{DerivationRecord, NormalizedRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Which compound element carries the affix under study.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMode {
    /// Suffixes attach to the head (N2).
    #[default]
    Suffix,
    /// Prefixes attach to the first element (N1).
    Prefix,
    /// Circumfixed `Ge-...-e` nouns; compounds are discarded outright.
    Circumfix,
}

#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("invalid normalize mode {0:?}, expected suffix, prefix or circumfix")]
pub struct InvalidModeError(pub String);

impl NormalizeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            NormalizeMode::Suffix => "suffix",
            NormalizeMode::Prefix => "prefix",
            NormalizeMode::Circumfix => "circumfix",
        }
    }

    pub fn normalize(self, record: &DerivationRecord) -> Option<NormalizedRecord> {
        match self {
            NormalizeMode::Suffix => normalize_for_suffix(record),
            NormalizeMode::Prefix => normalize_for_prefix(record),
            NormalizeMode::Circumfix => normalize_for_circumfix(record),
        }
    }
}

impl fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizeMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "suffix" => Ok(NormalizeMode::Suffix),
            "prefix" => Ok(NormalizeMode::Prefix),
            "circumfix" => Ok(NormalizeMode::Circumfix),
            _ => Err(InvalidModeError(s.to_string())),
        }
    }
}

/// Compounds become their head; a hyphenated lemma keeps its last part.
///
/// `Verkehrssicherheit` analysed as `Verkehr_Sicherheit` yields `Sicherheit`,
/// and `EU-Erweiterung` yields `Erweiterung`.
pub fn normalize_for_suffix(record: &DerivationRecord) -> Option<NormalizedRecord> {
    let lemma = match record.compound() {
        Some(compound) => compound.head(),
        None => record.lemma.as_str(),
    };
    let lemma = lemma.rsplit('-').next().unwrap_or(lemma);
    build(record, lemma)
}

/// Compounds become their first element; hyphens are left alone.
pub fn normalize_for_prefix(record: &DerivationRecord) -> Option<NormalizedRecord> {
    let lemma = match record.compound() {
        Some(compound) => compound.first(),
        None => record.lemma.as_str(),
    };
    build(record, lemma)
}

/// Compounds are dropped; everything else passes through.
pub fn normalize_for_circumfix(record: &DerivationRecord) -> Option<NormalizedRecord> {
    if record.compound().is_some() {
        return None;
    }
    build(record, &record.lemma)
}

pub fn normalize_all(records: &[DerivationRecord], mode: NormalizeMode) -> Vec<NormalizedRecord> {
    let out: Vec<NormalizedRecord> = records.iter().filter_map(|r| mode.normalize(r)).collect();
    debug!(
        mode = %mode,
        kept = out.len(),
        dropped = records.len() - out.len(),
        "normalized records"
    );
    out
}

fn build(record: &DerivationRecord, lemma: &str) -> Option<NormalizedRecord> {
    NormalizedRecord::new(lemma, record.word.clone(), record.provenance.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use backform_types::Provenance;

    fn compound(lemma: &str, analysis: &str) -> DerivationRecord {
        DerivationRecord::new(lemma, lemma).with_compound_analysis(analysis)
    }

    #[test]
    fn suffix_mode_takes_compound_head() {
        let record = compound("Verkehrssicherheit", "Verkehr_Sicherheit");
        let out = normalize_for_suffix(&record).unwrap();
        assert_eq!(out.lemma(), "Sicherheit");
        assert_eq!(out.word(), "Verkehrssicherheit");
    }

    #[test]
    fn suffix_mode_keeps_text_after_last_hyphen() {
        let record = DerivationRecord::new("EU-Bürger-Beteiligung", "EU-Bürger-Beteiligung");
        assert_eq!(normalize_for_suffix(&record).unwrap().lemma(), "Beteiligung");

        let record = compound("Nord-Süd-Verbindung", "Nord-Süd_Verbindung");
        assert_eq!(normalize_for_suffix(&record).unwrap().lemma(), "Verbindung");
    }

    #[test]
    fn sentinel_and_missing_analysis_are_not_compounds() {
        let record = compound("Lösung", "_");
        assert_eq!(normalize_for_suffix(&record).unwrap().lemma(), "Lösung");
        let record = DerivationRecord::new("Lösung", "Lösungen");
        assert_eq!(normalize_for_prefix(&record).unwrap().lemma(), "Lösung");
        assert!(normalize_for_circumfix(&record).is_some());
    }

    #[test]
    fn prefix_mode_takes_first_element_and_keeps_hyphens() {
        let record = compound("Umweltschutz", "Umwelt_Schutz");
        assert_eq!(normalize_for_prefix(&record).unwrap().lemma(), "Umwelt");
        let record = DerivationRecord::new("Um-Weg", "Um-Weg");
        assert_eq!(normalize_for_prefix(&record).unwrap().lemma(), "Um-Weg");
    }

    #[test]
    fn circumfix_mode_drops_compounds() {
        let record = compound("Baugewerbe", "Bau_Gewerbe");
        assert!(normalize_for_circumfix(&record).is_none());
    }

    #[test]
    fn ambiguous_and_empty_lemmas_are_dropped() {
        for mode in [
            NormalizeMode::Suffix,
            NormalizeMode::Prefix,
            NormalizeMode::Circumfix,
        ] {
            let record = DerivationRecord::new("Lösung|Lösen", "Lösung");
            assert!(mode.normalize(&record).is_none(), "{mode}");
        }
        let record = DerivationRecord::new("EU-", "EU-");
        assert!(normalize_for_suffix(&record).is_none());
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let records = vec![
            compound("Verkehrssicherheit", "Verkehr_Sicherheit"),
            DerivationRecord::new("EU-Erweiterung", "EU-Erweiterung"),
            DerivationRecord::new("Schönheit", "Schönheit"),
        ];
        for mode in [
            NormalizeMode::Suffix,
            NormalizeMode::Prefix,
            NormalizeMode::Circumfix,
        ] {
            let once = normalize_all(&records, mode);
            let again: Vec<_> = once
                .iter()
                .cloned()
                .map(NormalizedRecord::into_record)
                .collect();
            assert_eq!(normalize_all(&again, mode), once, "{mode}");
        }
    }

    #[test]
    fn provenance_passes_through() {
        let provenance = Provenance {
            doc_id: Some("d42".into()),
            sentence_idx: Some("7".into()),
            ..Provenance::default()
        };
        let record = DerivationRecord::new("Lösung", "Lösung").with_provenance(provenance.clone());
        assert_eq!(normalize_for_suffix(&record).unwrap().provenance(), &provenance);
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("Prefix".parse(), Ok(NormalizeMode::Prefix));
        assert_eq!(
            "infix".parse::<NormalizeMode>(),
            Err(InvalidModeError("infix".into()))
        );
    }
}
