mod candidate;
mod draft;
mod vote;

pub use candidate::{Candidate, CandidateKey, CandidateList, UnknownCandidate};
pub use draft::{ValidationError, VoteDraft};
pub use vote::{Code, VoteRecord, VoteUpdate};
