use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Every derivational suffix the engine has a rule for.
///
/// The discriminant doubles as the index into each rule table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suffix {
    Age,
    And,
    Ant,
    Anz,
    Ation,
    Atur,
    Ement,
    End,
    Ent,
    Enz,
    Eur,
    Iment,
    Iteur,
    Itur,
    Ament,
    Ateur,
    Ator,
    E,
    El,
    Er,
    Heit,
    Ie,
    Ik,
    Iker,
    Ikum,
    Ismus,
    Ist,
    Itaet,
    Ition,
    Ium,
    Ling,
    Nis,
    Schaft,
    Ung,
}

impl Suffix {
    pub const ALL: [Suffix; 34] = [
        Suffix::Age,
        Suffix::And,
        Suffix::Ant,
        Suffix::Anz,
        Suffix::Ation,
        Suffix::Atur,
        Suffix::Ement,
        Suffix::End,
        Suffix::Ent,
        Suffix::Enz,
        Suffix::Eur,
        Suffix::Iment,
        Suffix::Iteur,
        Suffix::Itur,
        Suffix::Ament,
        Suffix::Ateur,
        Suffix::Ator,
        Suffix::E,
        Suffix::El,
        Suffix::Er,
        Suffix::Heit,
        Suffix::Ie,
        Suffix::Ik,
        Suffix::Iker,
        Suffix::Ikum,
        Suffix::Ismus,
        Suffix::Ist,
        Suffix::Itaet,
        Suffix::Ition,
        Suffix::Ium,
        Suffix::Ling,
        Suffix::Nis,
        Suffix::Schaft,
        Suffix::Ung,
    ];

    /// Tag with its leading hyphen, e.g. `-ung`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Suffix::Age => "-age",
            Suffix::And => "-and",
            Suffix::Ant => "-ant",
            Suffix::Anz => "-anz",
            Suffix::Ation => "-ation",
            Suffix::Atur => "-atur",
            Suffix::Ement => "-ement",
            Suffix::End => "-end",
            Suffix::Ent => "-ent",
            Suffix::Enz => "-enz",
            Suffix::Eur => "-eur",
            Suffix::Iment => "-iment",
            Suffix::Iteur => "-iteur",
            Suffix::Itur => "-itur",
            Suffix::Ament => "-ament",
            Suffix::Ateur => "-ateur",
            Suffix::Ator => "-ator",
            Suffix::E => "-e",
            Suffix::El => "-el",
            Suffix::Er => "-er",
            Suffix::Heit => "-heit",
            Suffix::Ie => "-ie",
            Suffix::Ik => "-ik",
            Suffix::Iker => "-iker",
            Suffix::Ikum => "-ikum",
            Suffix::Ismus => "-ismus",
            Suffix::Ist => "-ist",
            Suffix::Itaet => "-itaet",
            Suffix::Ition => "-ition",
            Suffix::Ium => "-ium",
            Suffix::Ling => "-ling",
            Suffix::Nis => "-nis",
            Suffix::Schaft => "-schaft",
            Suffix::Ung => "-ung",
        }
    }

    /// Characters in the tag without its hyphen.
    pub const fn tag_len(self) -> usize {
        self.as_str().len() - 1
    }

    /// Every tag in table order.
    pub fn recognized() -> Vec<&'static str> {
        Suffix::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("invalid suffix {tag:?}, expected one of: {}", .recognized.join(", "))]
pub struct InvalidSuffixError {
    pub tag: String,
    pub recognized: Vec<&'static str>,
}

impl FromStr for Suffix {
    type Err = InvalidSuffixError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Suffix::ALL
            .into_iter()
            .find(|s| s.as_str() == tag)
            .ok_or_else(|| InvalidSuffixError {
                tag: tag.to_string(),
                recognized: Suffix::recognized(),
            })
    }
}

impl Serialize for Suffix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Suffix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tag() {
        for suffix in Suffix::ALL {
            assert_eq!(suffix.as_str().parse::<Suffix>(), Ok(suffix));
        }
    }

    #[test]
    fn discriminants_match_table_order() {
        for (idx, suffix) in Suffix::ALL.iter().enumerate() {
            assert_eq!(*suffix as usize, idx);
        }
    }

    #[test]
    fn rejects_unknown_tag_with_recognized_set() {
        let err = "-keit".parse::<Suffix>().unwrap_err();
        assert_eq!(err.tag, "-keit");
        assert!(err.recognized.contains(&"-heit"));
        assert!(err.recognized.contains(&"-schaft"));
        let message = err.to_string();
        assert!(message.contains("\"-keit\""));
        assert!(message.contains("-age, -and, -ant"));
    }

    #[test]
    fn tags_need_their_hyphen() {
        assert!("ung".parse::<Suffix>().is_err());
    }

    #[test]
    fn tag_len_counts_letters() {
        assert_eq!(Suffix::Ung.tag_len(), 3);
        assert_eq!(Suffix::Schaft.tag_len(), 6);
        assert_eq!(Suffix::E.tag_len(), 1);
    }
}
