use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::api::{LoadId, LoadState, VoteLoad, VoteStore};
use crate::error::{Error, Result};
use crate::model::{Candidate, CandidateKey, Code, VoteDraft, VoteUpdate};
use crate::notify::{Notification, Notifier};
use crate::session::SessionProvider;

/// Soft bounds for the window date pickers. Hints for the rendering
/// layer only; [`VoteDraft::validate`] remains the hard gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerBounds {
    /// Earliest offerable start: the instant the editor was opened.
    pub min_start: DateTime<Utc>,
    /// Earliest offerable end: the current draft start.
    pub min_end: DateTime<Utc>,
}

/// An editing session for one vote.
///
/// Holds the in-memory draft, applies user-driven mutations, and gates
/// the replace-style write behind the submission rules. All mutations
/// arrive through serialized UI events, so the editor is single-actor.
pub struct VoteDraftEditor<S, N> {
    code: Code,
    publisher: String,
    opened_at: DateTime<Utc>,
    draft: VoteDraft,
    last_synced: Option<LoadId>,
    store: S,
    notifier: N,
}

impl<S, N> VoteDraftEditor<S, N>
where
    S: VoteStore,
    N: Notifier,
{
    /// Open an editing session for the given vote.
    ///
    /// Fails with [`Error::Unauthorized`] when the session provider
    /// yields no identity; the caller shows its restricted view instead.
    pub fn open(
        code: Code,
        sessions: &dyn SessionProvider,
        store: S,
        notifier: N,
    ) -> Result<Self> {
        let session = sessions
            .session()
            .ok_or_else(|| Error::Unauthorized("editing a vote requires signing in".to_string()))?;
        info!("Opening draft editor for vote {code} as {}", session.user());
        Ok(Self {
            code,
            publisher: session.user().to_string(),
            opened_at: Utc::now(),
            draft: VoteDraft::new(),
            last_synced: None,
            store,
            notifier,
        })
    }

    /// The code of the vote under edit.
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// The draft under edit.
    pub fn draft(&self) -> &VoteDraft {
        &self.draft
    }

    /// Apply a record load to the draft.
    ///
    /// Only a `Ready` load that has not been absorbed before overwrites
    /// the draft; a loading or failed state, or a load already absorbed,
    /// leaves in-progress edits untouched.
    pub fn absorb(&mut self, load: &VoteLoad) {
        if let LoadState::Ready(loaded) = load.state() {
            if self.last_synced != Some(loaded.id()) {
                debug!("Hydrating vote {} from load {}", self.code, loaded.id());
                self.draft.hydrate(loaded.record());
                self.last_synced = Some(loaded.id());
            }
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_start_time(&mut self, start_time: DateTime<Utc>) {
        self.draft.start_time = start_time;
    }

    pub fn set_end_time(&mut self, end_time: DateTime<Utc>) {
        self.draft.end_time = end_time;
    }

    /// Append a blank candidate form entry, returning its key.
    pub fn add_candidate(&mut self) -> CandidateKey {
        self.draft.candidates.add()
    }

    /// Remove a candidate form entry; remaining entries are renumbered.
    pub fn remove_candidate(&mut self, key: CandidateKey) {
        self.draft.candidates.remove(key);
    }

    /// Replace the candidate whose key matches the given payload.
    pub fn update_candidate(&mut self, candidate: Candidate) -> Result<()> {
        Ok(self.draft.candidates.update(candidate)?)
    }

    /// Picker hints: the start picker opens no earlier than the editor
    /// did, the end picker no earlier than the chosen start.
    pub fn picker_bounds(&self) -> PickerBounds {
        PickerBounds {
            min_start: self.opened_at,
            min_end: self.draft.start_time,
        }
    }

    /// Validate the draft and, if it passes, push one replace-style
    /// update to the store.
    ///
    /// Both a validation failure and a store failure raise a
    /// notification and leave the draft untouched, so the user can
    /// correct or retry.
    pub async fn submit(&self) -> Result<()> {
        if let Err(reason) = self.draft.validate() {
            warn!("Rejecting submission of vote {}: {reason}", self.code);
            self.notifier
                .notify(Notification::new("Cannot update vote", reason.to_string()));
            return Err(reason.into());
        }

        let update = VoteUpdate::new(self.code.clone(), &self.draft, &self.publisher);
        match self.store.replace_vote(&update).await {
            Ok(()) => {
                info!("Vote {} updated", self.code);
                self.notifier.notify(Notification::new(
                    "Vote updated",
                    "Your changes have been saved.",
                ));
                Ok(())
            }
            Err(err) => {
                warn!("Failed to update vote {}: {err}", self.code);
                self.notifier.notify(Notification::new(
                    "Update failed",
                    "The vote service could not be reached. Your changes are kept; try again.",
                ));
                Err(err)
            }
        }
    }
}
