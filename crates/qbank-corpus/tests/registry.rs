//! Integration tests for the embedded corpus registry.

use qbank_corpus::{CorpusError, TopicRegistry, shared_registry};

#[test]
fn loads_embedded_corpus() {
    let (registry, summary) = TopicRegistry::load().expect("load corpus");
    assert!(!registry.is_empty());
    assert_eq!(registry.len(), summary.topic_count);
    assert_eq!(summary.topic_count, 17);
    assert_eq!(summary.question_count, 85);
    assert_eq!(summary.follow_up_count, 255);
}

#[test]
fn topic_names_are_unique_and_sorted() {
    let (registry, _) = TopicRegistry::load().expect("load corpus");
    let names: Vec<&str> = registry.topic_names().collect();
    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(names, deduped, "names must be lexically sorted and unique");

    // Restartable: a second iteration yields the same sequence.
    let again: Vec<&str> = registry.topic_names().collect();
    assert_eq!(names, again);
}

#[test]
fn control_flow_statements_first_question() {
    let (registry, _) = TopicRegistry::load().expect("load corpus");
    let topic = registry
        .get("control_flow_statements")
        .expect("known topic");
    assert_eq!(topic.len(), 5);
    assert_eq!(
        registry
            .question("control_flow_statements", 0)
            .expect("first record")
            .main_question,
        "What is the purpose of Control Flow Statements in Basic Python?"
    );
}

#[test]
fn repeated_lookups_return_identical_records() {
    let (registry, _) = TopicRegistry::load().expect("load corpus");
    let first = registry
        .question("classes_and_objects", 2)
        .expect("in-range lookup");
    let second = registry
        .question("classes_and_objects", 2)
        .expect("in-range lookup");
    assert_eq!(first, second);
}

#[test]
fn unknown_topic_is_not_found() {
    let (registry, _) = TopicRegistry::load().expect("load corpus");
    let error = registry.get("no_such_topic").expect_err("unknown topic");
    assert!(matches!(error, CorpusError::TopicNotFound { .. }));
    assert!(!error.is_fatal());
}

#[test]
fn out_of_range_index_is_rejected() {
    let (registry, _) = TopicRegistry::load().expect("load corpus");
    let error = registry
        .question("control_flow_statements", 5)
        .expect_err("index past the end");
    match error {
        CorpusError::IndexOutOfRange { topic, index, len } => {
            assert_eq!(topic, "control_flow_statements");
            assert_eq!(index, 5);
            assert_eq!(len, 5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_topic_wins_over_bad_index() {
    let (registry, _) = TopicRegistry::load().expect("load corpus");
    let error = registry
        .question("no_such_topic", 99)
        .expect_err("unknown topic");
    assert!(matches!(error, CorpusError::TopicNotFound { .. }));
}

#[test]
fn empty_main_question_fails_the_whole_load() {
    let good = r#"
[[questions]]
main_question = "What is a module?"
explanation = "Namespacing."
follow_up_questions = []
"#;
    let bad = r#"
[[questions]]
main_question = "What is a package?"
explanation = "A directory of modules."
follow_up_questions = []

[[questions]]
main_question = "   "
explanation = "Blank main question."
follow_up_questions = []
"#;
    let error = TopicRegistry::from_sources(vec![("modules", good), ("packages", bad)])
        .expect_err("blank main_question must reject the load");
    assert!(error.is_fatal());
    match error {
        CorpusError::EmptyMainQuestion { topic, index } => {
            assert_eq!(topic, "packages");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_topic_names_are_rejected() {
    let doc = r#"
[[questions]]
main_question = "What is a trait?"
explanation = "Shared behavior."
follow_up_questions = []
"#;
    let error = TopicRegistry::from_sources(vec![("traits", doc), ("traits", doc)])
        .expect_err("duplicate names must reject the load");
    match error {
        CorpusError::DuplicateTopic { name } => assert_eq!(name, "traits"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_toml_is_a_load_error() {
    let error = TopicRegistry::from_sources(vec![("broken", "[[questions]\nnot toml")])
        .expect_err("malformed document");
    assert!(matches!(error, CorpusError::Toml { .. }));
    assert!(error.is_fatal());
}

#[test]
fn shared_registry_is_loaded_once() {
    let first = shared_registry().expect("load corpus");
    let second = shared_registry().expect("load corpus");
    assert!(std::ptr::eq(first, second));
}
