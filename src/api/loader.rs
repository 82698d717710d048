use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use log::warn;

use crate::error::Result;
use crate::model::{Code, VoteRecord};

use super::client::VoteStore;

/// A unique identifier for a particular resolved load. The draft editor
/// keys its hydrate-once check on this, so two loads of the same vote get
/// distinct identities.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct LoadId(u64);

impl Display for LoadId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl LoadId {
    /// Atomically get the next ID.
    fn next() -> LoadId {
        static LOAD_ID_COUNTER: AtomicU64 = AtomicU64::new(0);
        LoadId(LOAD_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A successfully loaded record, stamped with the identity of the load
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedVote {
    id: LoadId,
    record: VoteRecord,
}

impl LoadedVote {
    pub fn id(&self) -> LoadId {
        self.id
    }

    pub fn record(&self) -> &VoteRecord {
        &self.record
    }
}

/// Where a record load currently stands. Mirrors the loading/error/data
/// triple the rendering layer branches on.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The fetch has not resolved; it may never do so.
    Loading,
    /// The fetch resolved with an error.
    Failed,
    /// The record is available.
    Ready(LoadedVote),
}

/// The lifecycle of a single vote-record load.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteLoad {
    state: LoadState,
}

impl VoteLoad {
    /// Begin a load; it stays `Loading` until [`resolve`](Self::resolve)
    /// is called.
    pub fn begin() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    /// Record the outcome of the fetch. Each success mints a fresh
    /// [`LoadId`].
    pub fn resolve(&mut self, outcome: Result<VoteRecord>) {
        self.state = match outcome {
            Ok(record) => LoadState::Ready(LoadedVote {
                id: LoadId::next(),
                record,
            }),
            Err(err) => {
                warn!("Vote record load failed: {err}");
                LoadState::Failed
            }
        };
    }

    /// Run a fetch against the store and capture its outcome.
    pub async fn fetch<S: VoteStore>(store: &S, code: &Code) -> Self {
        let mut load = Self::begin();
        load.resolve(store.fetch_vote(code).await);
        load
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, LoadState::Failed)
    }

    /// The loaded record, if the fetch has succeeded.
    pub fn record(&self) -> Option<&VoteRecord> {
        match &self.state {
            LoadState::Ready(loaded) => Some(&loaded.record),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Error;

    #[test]
    fn starts_loading() {
        let load = VoteLoad::begin();
        assert!(load.is_loading());
        assert!(!load.is_failed());
        assert_eq!(load.record(), None);
    }

    #[test]
    fn success_becomes_ready() {
        let record = VoteRecord::example();
        let mut load = VoteLoad::begin();
        load.resolve(Ok(record.clone()));
        assert_eq!(load.record(), Some(&record));
    }

    #[test]
    fn failure_becomes_failed() {
        let mut load = VoteLoad::begin();
        load.resolve(Err(Error::not_found("Vote fh7gk2")));
        assert!(load.is_failed());
        assert_eq!(load.record(), None);
    }

    #[test]
    fn each_success_gets_a_distinct_identity() {
        let mut first = VoteLoad::begin();
        first.resolve(Ok(VoteRecord::example()));
        let mut second = VoteLoad::begin();
        second.resolve(Ok(VoteRecord::example()));

        let id_of = |load: &VoteLoad| match load.state() {
            LoadState::Ready(loaded) => loaded.id(),
            _ => panic!("load should be ready"),
        };
        assert_ne!(id_of(&first), id_of(&second));
    }
}
