//! Doctor report and corpus-shape tests.

use qbank_corpus::{CorpusReport, TopicRegistry};

#[test]
fn report_counts_match_summary() {
    let (registry, summary) = TopicRegistry::load().expect("load corpus");
    let report = CorpusReport::from_registry(&registry, &summary);
    assert_eq!(report.schema, "qbank.corpus-doctor");
    assert_eq!(report.schema_version, 1);
    assert_eq!(report.topics.len(), summary.topic_count);
    assert_eq!(report.counts.topics, summary.topic_count);
    assert_eq!(
        report.topics.iter().map(|t| t.questions).sum::<usize>(),
        summary.question_count
    );
    assert_eq!(
        report.topics.iter().map(|t| t.follow_ups).sum::<usize>(),
        summary.follow_up_count
    );
}

#[test]
fn report_serializes_to_json() {
    let (registry, summary) = TopicRegistry::load().expect("load corpus");
    let report = CorpusReport::from_registry(&registry, &summary);
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["schema"], "qbank.corpus-doctor");
    assert_eq!(json["counts"]["topics"], 17);
    assert_eq!(json["counts"]["questions"], 85);
}

#[test]
fn topic_listing_snapshot() {
    let (registry, _) = TopicRegistry::load().expect("load corpus");
    let names: Vec<&str> = registry.topic_names().collect();
    insta::assert_snapshot!(names.join("\n"), @r"
    asynchronous_programming
    classes_and_objects
    concurrency_and_parallelism
    control_flow_statements
    data_structure_functions
    debugging_techniques
    encapsulation_and_abstraction
    file_io_operations
    functions_and_lambdas
    introduction_to_python
    object_oriented_functions
    profiling_and_optimization
    python_standard_library
    regular_expressions
    string_manipulation_functions
    unit_testing_in_python
    using_map_filter_reduce
    ");
}
