use backform_types::{Pos, Slot};
use serde::Serialize;

/// A single slot of rule output.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Candidate {
    pub slot: Slot,
    pub form: String,
}

impl Candidate {
    pub fn is_empty(&self) -> bool {
        self.form.is_empty()
    }
}

/// Ordered slot → form mapping produced by one rule for one lemma.
///
/// Setting a slot that already exists replaces its form and keeps its
/// position.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet {
    entries: Vec<Candidate>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, ordinal: u8, pos: Pos, form: impl Into<String>) {
        let slot = Slot::new(ordinal, pos);
        let form = form.into();
        match self.entries.iter_mut().find(|c| c.slot == slot) {
            Some(existing) => existing.form = form,
            None => self.entries.push(Candidate { slot, form }),
        }
    }

    pub fn get(&self, ordinal: u8, pos: Pos) -> Option<&str> {
        self.form(Slot::new(ordinal, pos))
    }

    pub fn form(&self, slot: Slot) -> Option<&str> {
        self.entries
            .iter()
            .find(|c| c.slot == slot)
            .map(|c| c.form.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.entries.iter().map(|c| c.slot)
    }

    /// Candidates whose rule applied.
    pub fn applicable(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter().filter(|c| !c.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear every form, keeping the slots.
    pub fn blank(&mut self) {
        for entry in &mut self.entries {
            entry.form.clear();
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
