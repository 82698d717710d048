use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Candidate keys are 1-based positions within the list.
pub type CandidateKey = u32;

/// A single selectable option within a vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name shown to participants.
    pub name: String,
    /// Optional descriptive text.
    pub title: String,
    /// Positional identity, unique within the list.
    pub key: CandidateKey,
}

impl Candidate {
    /// A blank candidate at the given position, ready to be filled in.
    fn blank(key: CandidateKey) -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            key,
        }
    }
}

/// Attempted to update a candidate whose key is not in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No candidate with key {0}")]
pub struct UnknownCandidate(pub CandidateKey);

/// An ordered candidate list, keyed by position.
///
/// Invariant: once an add or remove has settled, keys form exactly the
/// sequence `1..=N` in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateList(Vec<Candidate>);

impl CandidateList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a candidate by key.
    pub fn get(&self, key: CandidateKey) -> Option<&Candidate> {
        self.0.iter().find(|candidate| candidate.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    /// Append a blank candidate; its key is the new list length.
    pub fn add(&mut self) -> CandidateKey {
        let key = key_for_index(self.0.len());
        self.0.push(Candidate::blank(key));
        key
    }

    /// Remove the candidate with the given key, if present, and renumber
    /// the remainder. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: CandidateKey) {
        let before = self.0.len();
        self.0.retain(|candidate| candidate.key != key);
        if self.0.len() != before {
            self.renumber();
        }
    }

    /// Replace the entry whose key matches `candidate.key` with the given
    /// payload, leaving every other entry untouched.
    pub fn update(&mut self, candidate: Candidate) -> Result<(), UnknownCandidate> {
        match self
            .0
            .iter_mut()
            .find(|existing| existing.key == candidate.key)
        {
            Some(existing) => {
                *existing = candidate;
                Ok(())
            }
            None => Err(UnknownCandidate(candidate.key)),
        }
    }

    /// Restore the `1..=N` key sequence after a removal.
    fn renumber(&mut self) {
        for (index, candidate) in self.0.iter_mut().enumerate() {
            candidate.key = key_for_index(index);
        }
    }
}

impl From<Vec<Candidate>> for CandidateList {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self(candidates)
    }
}

fn key_for_index(index: usize) -> CandidateKey {
    1 + CandidateKey::try_from(index).expect("list length fits in a key")
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Candidate {
        pub fn example1() -> Self {
            Self {
                name: "Chris Riches".to_string(),
                title: "Keep the clubhouse open on Sundays".to_string(),
                key: 1,
            }
        }

        pub fn example2() -> Self {
            Self {
                name: "Jane Doe".to_string(),
                title: "Refit the clubhouse kitchen first".to_string(),
                key: 2,
            }
        }

        pub fn example3() -> Self {
            Self {
                name: "John Smith".to_string(),
                title: String::new(),
                key: 3,
            }
        }
    }

    impl CandidateList {
        pub fn example() -> Self {
            Self(vec![Candidate::example1(), Candidate::example2()])
        }

        pub fn example_of_three() -> Self {
            Self(vec![
                Candidate::example1(),
                Candidate::example2(),
                Candidate::example3(),
            ])
        }
    }
}
