#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::election::{CastOutcome, Election};
    use crate::models::Candidate;
    use crate::storage::{MemoryStore, StoreError, VoteStore, VOTED_KEY, VOTES_KEY};

    /// Handle-sharing wrapper so a test can keep inspecting raw keys after
    /// handing the store to the widget.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl SharedStore {
        fn raw(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).unwrap()
        }

        fn put(&self, key: &str, value: &str) {
            self.0.borrow_mut().set(key, value).unwrap();
        }
    }

    impl VoteStore for SharedStore {
        fn is_available(&self) -> bool {
            self.0.borrow().is_available()
        }
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.borrow().get(key)
        }
        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().set(key, value)
        }
        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().remove(key)
        }
    }

    fn roster(ids: &[u32]) -> Vec<Candidate> {
        ids.iter()
            .map(|&id| Candidate::new(id, format!("Candidate {id}"), "", ""))
            .collect()
    }

    fn election(ids: &[u32]) -> (Election<SharedStore>, SharedStore) {
        let store = SharedStore::default();
        let mut e = Election::new(roster(ids), store.clone());
        e.initialize();
        (e, store)
    }

    fn votes_of(e: &Election<SharedStore>, id: u32) -> u32 {
        e.candidates().iter().find(|c| c.id == id).unwrap().votes
    }

    #[test]
    fn test_first_vote_is_terminal() {
        let (mut e, _) = election(&[1, 2]);
        assert!(!e.has_voted());

        assert_eq!(e.cast_vote(1), CastOutcome::Recorded);
        assert!(e.has_voted());

        assert_eq!(e.cast_vote(2), CastOutcome::AlreadyVoted);
        assert_eq!(e.cast_vote(1), CastOutcome::AlreadyVoted);
        assert!(e.has_voted());
        assert_eq!(e.total_votes(), 1);
    }

    #[test]
    fn test_total_votes_is_sum_of_counters() {
        let (mut e, store) = election(&[1, 2, 3]);
        store.put(VOTES_KEY, r#"[{"id":1,"votes":4},{"id":3,"votes":2}]"#);
        e.initialize();
        assert_eq!(e.total_votes(), 6);

        e.cast_vote(2);
        assert_eq!(e.total_votes(), 7);
        assert_eq!(
            e.total_votes(),
            e.candidates().iter().map(|c| c.votes).sum::<u32>()
        );
    }

    #[test]
    fn test_cast_persists_snapshot_and_flag() {
        let (mut e, store) = election(&[1]);
        assert_eq!(e.cast_vote(1), CastOutcome::Recorded);

        assert_eq!(votes_of(&e, 1), 1);
        assert_eq!(store.raw(VOTED_KEY).as_deref(), Some("true"));
        assert_eq!(store.raw(VOTES_KEY).as_deref(), Some(r#"[{"id":1,"votes":1}]"#));
    }

    #[test]
    fn test_second_cast_changes_nothing() {
        let (mut e, store) = election(&[1]);
        e.cast_vote(1);
        let snapshot_before = store.raw(VOTES_KEY);

        assert_eq!(e.cast_vote(1), CastOutcome::AlreadyVoted);
        assert_eq!(votes_of(&e, 1), 1);
        assert_eq!(store.raw(VOTES_KEY), snapshot_before);
    }

    #[test]
    fn test_persisted_flag_survives_reinitialize() {
        let store = SharedStore::default();
        store.put(VOTED_KEY, "true");

        let mut e = Election::new(roster(&[1]), store);
        e.initialize();
        assert!(e.has_voted());
        assert_eq!(e.cast_vote(1), CastOutcome::AlreadyVoted);
        assert_eq!(votes_of(&e, 1), 0);
    }

    #[test]
    fn test_reinitialize_is_idempotent() {
        let (mut e, store) = election(&[1, 2]);
        store.put(VOTES_KEY, r#"[{"id":2,"votes":3}]"#);

        e.initialize();
        let first = e.candidates().to_vec();
        e.initialize();
        assert_eq!(e.candidates(), &first[..]);
    }

    #[test]
    fn test_flag_and_tally_parse_independently() {
        let store = SharedStore::default();
        store.put(VOTED_KEY, "maybe");
        store.put(VOTES_KEY, r#"[{"id":1,"votes":5}]"#);

        let mut e = Election::new(roster(&[1]), store);
        e.initialize();
        assert!(!e.has_voted(), "non-\"true\" flag value reads as not voted");
        assert_eq!(votes_of(&e, 1), 5);
    }

    #[test]
    fn test_missing_snapshot_resets_seeded_counts() {
        let mut seeded = roster(&[1, 2]);
        seeded[0].votes = 9;
        seeded[1].votes = 4;

        let mut e = Election::new(seeded, SharedStore::default());
        e.initialize();
        assert_eq!(e.total_votes(), 0);
    }

    #[test]
    fn test_malformed_snapshot_resets_counts() {
        let store = SharedStore::default();
        store.put(VOTED_KEY, "true");
        store.put(VOTES_KEY, "not json at all");

        let mut seeded = roster(&[1]);
        seeded[0].votes = 7;
        let mut e = Election::new(seeded, store);
        e.initialize();

        assert_eq!(votes_of(&e, 1), 0);
        assert!(e.has_voted(), "flag load is independent of the tally parse");
    }

    #[test]
    fn test_candidate_missing_from_snapshot_keeps_count() {
        let (mut e, store) = election(&[1, 2]);
        e.cast_vote(1);
        store.put(VOTES_KEY, r#"[{"id":2,"votes":8}]"#);

        e.initialize();
        assert_eq!(votes_of(&e, 1), 1, "id absent from a present snapshot is left alone");
        assert_eq!(votes_of(&e, 2), 8);
    }

    #[test]
    fn test_unknown_candidate_consumes_vote() {
        let (mut e, store) = election(&[1]);
        assert_eq!(e.cast_vote(99), CastOutcome::UnknownCandidate);

        assert!(e.has_voted());
        assert_eq!(e.total_votes(), 0);
        assert_eq!(store.raw(VOTED_KEY).as_deref(), Some("true"));
        assert_eq!(store.raw(VOTES_KEY).as_deref(), Some(r#"[{"id":1,"votes":0}]"#));
    }

    #[test]
    fn test_unavailable_store_makes_operations_noops() {
        let mut e = Election::new(roster(&[1]), MemoryStore::unavailable());
        e.initialize();
        assert!(!e.has_voted());

        assert_eq!(e.cast_vote(1), CastOutcome::StorageUnavailable);
        assert!(!e.has_voted());
        assert_eq!(e.total_votes(), 0);
    }

    #[test]
    fn test_unavailable_store_keeps_constructed_counts() {
        let mut seeded = roster(&[1]);
        seeded[0].votes = 3;
        let mut e = Election::new(seeded, MemoryStore::unavailable());
        e.initialize();
        assert_eq!(votes_of_mem(&e, 1), 3);
    }

    #[test]
    fn test_external_reset_returns_to_not_voted() {
        let (mut e, mut store) = election(&[1]);
        e.cast_vote(1);
        assert!(e.has_voted());

        store.remove(VOTED_KEY).unwrap();
        store.remove(VOTES_KEY).unwrap();
        e.initialize();

        assert!(!e.has_voted());
        assert_eq!(e.total_votes(), 0);
        assert_eq!(e.cast_vote(1), CastOutcome::Recorded);
    }

    fn votes_of_mem(e: &Election<MemoryStore>, id: u32) -> u32 {
        e.candidates().iter().find(|c| c.id == id).unwrap().votes
    }
}
