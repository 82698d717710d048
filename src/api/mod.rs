mod client;
mod loader;

pub use client::{HttpVoteStore, VoteStore};
pub use loader::{LoadId, LoadState, LoadedVote, VoteLoad};
