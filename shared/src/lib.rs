pub mod election;
pub mod models;
pub mod storage;

pub use election::{CastOutcome, Election};
pub use models::*;
pub use storage::{MemoryStore, StoreError, VoteStore, DISMISS_OPEN_APP_KEY, VOTED_KEY, VOTES_KEY};

#[cfg(test)]
mod tests;
