use backform_types::{Pos, UniqueCandidate};
use serde::Serialize;

/// One corpus query, ready to be sent to the concordancer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct QueryRequest {
    pub form: String,
    pub pos: Pos,
    pub cql: String,
}

impl From<UniqueCandidate> for QueryRequest {
    fn from(candidate: UniqueCandidate) -> Self {
        let cql = to_query(&candidate);
        Self {
            form: candidate.form,
            pos: candidate.pos,
            cql,
        }
    }
}

/// `[lemma="lösen" & tag="VVINF"] within <s/>`
pub fn to_query(candidate: &UniqueCandidate) -> String {
    format_query(&candidate.form, candidate.pos)
}

/// Query counting the derivation itself, always as a noun.
pub fn derivation_query(lemma: &str) -> String {
    format_query(lemma, Pos::Noun)
}

fn format_query(form: &str, pos: Pos) -> String {
    format!(r#"[lemma="{form}" & tag="{}"] within <s/>"#, pos.tag())
}
