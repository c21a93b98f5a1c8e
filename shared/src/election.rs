use tracing::warn;

use crate::models::{Candidate, TallyEntry};
use crate::storage::{VoteStore, VOTED_KEY, VOTES_KEY};

/// Result of a [`Election::cast_vote`] call. None of these are errors: every
/// branch the widget can take is a documented outcome, and the no-op branches
/// (`AlreadyVoted`, `StorageUnavailable`) leave state and storage untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastOutcome {
    /// The candidate's counter was incremented and the tally persisted.
    Recorded,
    /// A vote was already cast under this storage origin.
    AlreadyVoted,
    /// No durable storage; the vote cannot be guarded, so it is not taken.
    StorageUnavailable,
    /// The id matched no candidate. No counter changed, but the vote is
    /// still consumed: `has_voted` flips to true and is persisted. That
    /// mirrors the site's shipped behavior; callers wanting to warn the
    /// user can branch on this variant.
    UnknownCandidate,
}

/// The chairperson election widget: a fixed candidate roster, an at-most-one
/// vote guard, and a tally mirrored into an injected [`VoteStore`].
///
/// Per storage origin this is a two-state machine, `NotVoted -> Voted`, with
/// no transition back. Only clearing the store from outside (for example via
/// [`VoteStore::remove`]) returns a session to `NotVoted`.
#[derive(Debug)]
pub struct Election<S> {
    candidates: Vec<Candidate>,
    has_voted: bool,
    store: S,
}

impl<S: VoteStore> Election<S> {
    /// The candidate set is fixed here for the lifetime of the widget.
    pub fn new(roster: Vec<Candidate>, store: S) -> Self {
        Self { candidates: roster, has_voted: false, store }
    }

    /// Loads the persisted session: the vote-cast flag, then the tally
    /// snapshot merged into the roster by candidate id.
    ///
    /// The two reads are independent; a bad flag value never blocks the
    /// tally load. A missing snapshot resets every counter to 0, seed values
    /// included, and a snapshot that fails to parse is logged and treated
    /// the same way.
    pub fn initialize(&mut self) {
        self.has_voted = matches!(self.store.get(VOTED_KEY), Ok(Some(v)) if v == "true");

        match self.store.get(VOTES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TallyEntry>>(&raw) {
                Ok(snapshot) => {
                    for candidate in &mut self.candidates {
                        if let Some(entry) = snapshot.iter().find(|e| e.id == candidate.id) {
                            candidate.votes = entry.votes;
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, key = VOTES_KEY, "malformed tally snapshot, resetting counts");
                    self.reset_counts();
                }
            },
            Ok(None) => self.reset_counts(),
            // Store absent: leave in-memory state as constructed.
            Err(_) => {}
        }
    }

    /// Casts the session's single vote for `candidate_id`.
    ///
    /// Guards run in order: an already-voted session and an unavailable
    /// store are both complete no-ops. Otherwise the matching candidate is
    /// incremented by one, the full snapshot and the flag are written back
    /// synchronously, and the session moves to its terminal `Voted` state —
    /// even when the id matched nothing (see [`CastOutcome::UnknownCandidate`]).
    pub fn cast_vote(&mut self, candidate_id: u32) -> CastOutcome {
        if self.has_voted {
            return CastOutcome::AlreadyVoted;
        }
        if !self.store.is_available() {
            return CastOutcome::StorageUnavailable;
        }

        let matched = match self.candidates.iter_mut().find(|c| c.id == candidate_id) {
            Some(candidate) => {
                candidate.votes += 1;
                true
            }
            None => false,
        };

        self.persist_snapshot();
        self.has_voted = true;
        if let Err(e) = self.store.set(VOTED_KEY, "true") {
            warn!(error = %e, key = VOTED_KEY, "failed to persist vote-cast flag");
        }

        if matched {
            CastOutcome::Recorded
        } else {
            CastOutcome::UnknownCandidate
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    /// Derived, never stored: the sum of all candidates' counters.
    pub fn total_votes(&self) -> u32 {
        self.candidates.iter().map(|c| c.votes).sum()
    }

    fn reset_counts(&mut self) {
        for candidate in &mut self.candidates {
            candidate.votes = 0;
        }
    }

    fn persist_snapshot(&mut self) {
        let snapshot: Vec<TallyEntry> = self
            .candidates
            .iter()
            .map(|c| TallyEntry { id: c.id, votes: c.votes })
            .collect();
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                if let Err(e) = self.store.set(VOTES_KEY, &json) {
                    warn!(error = %e, key = VOTES_KEY, "failed to persist tally snapshot");
                }
            }
            Err(e) => warn!(error = %e, "failed to encode tally snapshot"),
        }
    }
}
