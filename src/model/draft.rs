use chrono::{DateTime, Utc};
use thiserror::Error;

use super::candidate::CandidateList;
use super::vote::VoteRecord;

/// Why a draft was refused at submission time. The message doubles as the
/// user-facing notification text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("at least 2 options required")]
    NotEnoughCandidates,
    #[error("start date must not exceed end date")]
    StartAfterEnd,
    #[error("option name must not be empty")]
    UnnamedCandidate,
}

/// The in-memory, not-yet-persisted state of a vote under edit.
///
/// All four fields are independently settable; the draft only exists for
/// the lifetime of an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteDraft {
    /// Vote title.
    pub title: String,
    /// Voting window start.
    pub start_time: DateTime<Utc>,
    /// Voting window end.
    pub end_time: DateTime<Utc>,
    /// The selectable options.
    pub candidates: CandidateList,
}

impl VoteDraft {
    /// A fresh draft: empty title, no candidates, window collapsed to now.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            title: String::new(),
            start_time: now,
            end_time: now,
            candidates: CandidateList::new(),
        }
    }

    /// Overwrite every field from a loaded record in one step.
    pub fn hydrate(&mut self, record: &VoteRecord) {
        self.title = record.title.clone();
        self.start_time = record.start_date_time;
        self.end_time = record.end_date_time;
        self.candidates = record.candidates.clone();
    }

    /// Check the draft against the submission rules. The first rule to
    /// fail wins; a passing draft is ready to be serialized and sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.candidates.len() < 2 {
            return Err(ValidationError::NotEnoughCandidates);
        }
        if self.start_time > self.end_time {
            return Err(ValidationError::StartAfterEnd);
        }
        if self
            .candidates
            .iter()
            .any(|candidate| candidate.name.is_empty())
        {
            return Err(ValidationError::UnnamedCandidate);
        }
        Ok(())
    }
}

impl Default for VoteDraft {
    fn default() -> Self {
        Self::new()
    }
}
