//! Property tests over registry lookups.

use proptest::prelude::*;

use qbank_corpus::{CorpusError, shared_registry};

proptest! {
    /// Every in-range index resolves to the record at that position; every
    /// out-of-range index fails the same way, regardless of how far past the
    /// end it is.
    #[test]
    fn index_lookups_are_total(index in 0usize..64) {
        let registry = shared_registry().expect("load corpus");
        for topic in registry.topics() {
            if index < topic.len() {
                let record = registry.question(&topic.name, index).expect("in-range lookup");
                prop_assert_eq!(record, &topic.questions[index]);
            } else {
                let error = registry
                    .question(&topic.name, index)
                    .expect_err("out-of-range lookup");
                let is_out_of_range = matches!(error, CorpusError::IndexOutOfRange { .. });
                prop_assert!(is_out_of_range);
            }
        }
    }

    /// Lookup by name returns the same collection the iterator produced.
    #[test]
    fn name_lookups_round_trip(seed in 0usize..1024) {
        let registry = shared_registry().expect("load corpus");
        let names: Vec<&str> = registry.topic_names().collect();
        prop_assume!(!names.is_empty());
        let name = names[seed % names.len()];
        let topic = registry.get(name).expect("known topic");
        prop_assert_eq!(topic.name.as_str(), name);
    }
}
