//! Shared types for backforming German derivations to candidate bases.
//!
//! Records mirror what a corpus concordance export carries per match: the
//! lemma, the surface word, the compound analysis (`compana`) and a handful of
//! provenance fields that are passed through untouched. Candidates pair a
//! hypothesised base form with the corpus part-of-speech tag it should be
//! looked up under.
//!
//! ```rust
//! use backform_types::{DerivationRecord, Pos, Slot};
//!
//! let record = DerivationRecord::new("Verkehrssicherheit", "Verkehrssicherheit")
//!     .with_compound_analysis("Verkehr_Sicherheit");
//! assert_eq!(record.compound().map(|c| c.head()), Some("Sicherheit"));
//!
//! let slot = Slot::new(3, Pos::Verb);
//! assert_eq!(slot.name(), "base_cand3_VVINF");
//! assert_eq!(Slot::parse_name("base_cand3_VVINF"), Some(slot));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compound analysis value the corpus uses for "not a compound".
pub const NO_COMPOUND: &str = "_";

/// Separator between compound parts in a compound analysis.
pub const COMPOUND_SEPARATOR: char = '_';

/// Marks a lemma the tagger could not disambiguate (`Lösung|Lösen`).
pub const AMBIGUITY_MARKER: char = '|';

/// Part-of-speech tag a candidate base is queried under.
///
/// Serialized as the corpus tag. `ADJ.` is not a tag proper but a pattern
/// matching both `ADJA` and `ADJD`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Pos {
    #[serde(rename = "NN")]
    Noun,
    #[serde(rename = "ADJ.")]
    Adj,
    #[serde(rename = "VVINF")]
    Verb,
}

impl Pos {
    /// Parse a corpus tag (`NN`, `ADJ.`, `VVINF`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "NN" => Some(Pos::Noun),
            "ADJ." => Some(Pos::Adj),
            "VVINF" => Some(Pos::Verb),
            _ => None,
        }
    }

    /// Tag as written into corpus queries and slot names.
    pub fn tag(self) -> &'static str {
        match self {
            Pos::Noun => "NN",
            Pos::Adj => "ADJ.",
            Pos::Verb => "VVINF",
        }
    }
}

/// Named position in a rule's output: ordinal plus the POS it hypothesises.
///
/// Two slots with the same ordinal but different POS are distinct.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub ordinal: u8,
    pub pos: Pos,
}

impl Slot {
    pub const fn new(ordinal: u8, pos: Pos) -> Self {
        Self { ordinal, pos }
    }

    /// Column-style name, e.g. `base_cand4_ADJ.`.
    pub fn name(&self) -> String {
        format!("base_cand{}_{}", self.ordinal, self.pos.tag())
    }

    /// Inverse of [`Slot::name`]; the POS is the text after the last `_`.
    pub fn parse_name(name: &str) -> Option<Self> {
        let rest = name.strip_prefix("base_cand")?;
        let (ordinal, tag) = rest.rsplit_once('_')?;
        Some(Self {
            ordinal: ordinal.parse().ok()?,
            pos: Pos::from_tag(tag)?,
        })
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Opaque per-match metadata carried through every stage unchanged.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morph: Option<String>,
    #[serde(rename = "doc.id", default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(rename = "doc.url", default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    #[serde(rename = "s.idx", default, skip_serializing_if = "Option::is_none")]
    pub sentence_idx: Option<String>,
}

/// One attested derivation as returned by the corpus query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DerivationRecord {
    pub lemma: String,
    #[serde(default)]
    pub word: String,
    #[serde(rename = "compana", default)]
    pub compound_analysis: Option<String>,
    #[serde(flatten)]
    pub provenance: Provenance,
}

impl DerivationRecord {
    pub fn new(lemma: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            word: word.into(),
            compound_analysis: None,
            provenance: Provenance::default(),
        }
    }

    pub fn with_compound_analysis(mut self, analysis: impl Into<String>) -> Self {
        self.compound_analysis = Some(analysis.into());
        self
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Compound parts, or `None` when the analysis is absent, empty or `_`.
    pub fn compound(&self) -> Option<Compound<'_>> {
        Compound::parse(self.compound_analysis.as_deref()?)
    }
}

/// Borrowed view of a compound analysis such as `Verkehr_Sicherheit`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Compound<'a> {
    parts: Vec<&'a str>,
}

impl<'a> Compound<'a> {
    pub fn parse(analysis: &'a str) -> Option<Self> {
        if analysis.is_empty() || analysis == NO_COMPOUND {
            return None;
        }
        Some(Self {
            parts: analysis.split(COMPOUND_SEPARATOR).collect(),
        })
    }

    /// First element (N1).
    pub fn first(&self) -> &'a str {
        self.parts.first().copied().unwrap_or_default()
    }

    /// Final element (N2), the head.
    pub fn head(&self) -> &'a str {
        self.parts.last().copied().unwrap_or_default()
    }
}

/// A record whose lemma has been resolved to the unit the rules analyse.
///
/// The lemma is never empty and never contains [`AMBIGUITY_MARKER`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NormalizedRecord {
    lemma: String,
    word: String,
    #[serde(flatten)]
    provenance: Provenance,
}

impl NormalizedRecord {
    /// Returns `None` when `lemma` would break the record invariant.
    pub fn new(
        lemma: impl Into<String>,
        word: impl Into<String>,
        provenance: Provenance,
    ) -> Option<Self> {
        let lemma = lemma.into();
        if lemma.is_empty() || lemma.contains(AMBIGUITY_MARKER) {
            return None;
        }
        Some(Self {
            lemma,
            word: word.into(),
            provenance,
        })
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Back to a plain record with no compound analysis.
    pub fn into_record(self) -> DerivationRecord {
        DerivationRecord {
            lemma: self.lemma,
            word: self.word,
            compound_analysis: Some(NO_COMPOUND.to_string()),
            provenance: self.provenance,
        }
    }
}

/// One hypothesised base for one source lemma.
///
/// An empty `form` means the rule did not apply.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CandidateBase {
    pub lemma: String,
    pub pos: Pos,
    pub form: String,
}

/// A candidate deduplicated across lemmas; only what a corpus query needs.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UniqueCandidate {
    pub form: String,
    pub pos: Pos,
}

impl From<&CandidateBase> for UniqueCandidate {
    fn from(candidate: &CandidateBase) -> Self {
        Self {
            form: candidate.form.clone(),
            pos: candidate.pos,
        }
    }
}

impl From<CandidateBase> for UniqueCandidate {
    fn from(candidate: CandidateBase) -> Self {
        Self {
            form: candidate.form,
            pos: candidate.pos,
        }
    }
}
