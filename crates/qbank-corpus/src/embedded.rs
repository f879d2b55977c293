//! Embedded corpus data.
//!
//! All topic documents are embedded at compile time using `include_str!()`.
//! This eliminates runtime file I/O and path resolution issues.
//!
//! Each document is a TOML sequence of `[[questions]]` tables; the topic name
//! is carried here, next to the document, and is not repeated inside it.
//!
//! # Adding New Topics
//!
//! Drop a TOML file under `data/topics/`, add an `include_str!()` constant,
//! and list it in [`TOPIC_SOURCES`] keeping lexical order.

/// A topic name paired with its embedded TOML document.
#[derive(Debug, Clone, Copy)]
pub struct TopicSource {
    /// Topic identifier, the source file stem.
    pub name: &'static str,
    /// Raw TOML document text.
    pub toml: &'static str,
}

pub const ASYNCHRONOUS_PROGRAMMING: &str =
    include_str!("../data/topics/asynchronous_programming.toml");

pub const CLASSES_AND_OBJECTS: &str = include_str!("../data/topics/classes_and_objects.toml");

pub const CONCURRENCY_AND_PARALLELISM: &str =
    include_str!("../data/topics/concurrency_and_parallelism.toml");

pub const CONTROL_FLOW_STATEMENTS: &str =
    include_str!("../data/topics/control_flow_statements.toml");

pub const DATA_STRUCTURE_FUNCTIONS: &str =
    include_str!("../data/topics/data_structure_functions.toml");

pub const DEBUGGING_TECHNIQUES: &str = include_str!("../data/topics/debugging_techniques.toml");

pub const ENCAPSULATION_AND_ABSTRACTION: &str =
    include_str!("../data/topics/encapsulation_and_abstraction.toml");

pub const FILE_IO_OPERATIONS: &str = include_str!("../data/topics/file_io_operations.toml");

pub const FUNCTIONS_AND_LAMBDAS: &str = include_str!("../data/topics/functions_and_lambdas.toml");

pub const INTRODUCTION_TO_PYTHON: &str = include_str!("../data/topics/introduction_to_python.toml");

pub const OBJECT_ORIENTED_FUNCTIONS: &str =
    include_str!("../data/topics/object_oriented_functions.toml");

pub const PROFILING_AND_OPTIMIZATION: &str =
    include_str!("../data/topics/profiling_and_optimization.toml");

pub const PYTHON_STANDARD_LIBRARY: &str =
    include_str!("../data/topics/python_standard_library.toml");

pub const REGULAR_EXPRESSIONS: &str = include_str!("../data/topics/regular_expressions.toml");

pub const STRING_MANIPULATION_FUNCTIONS: &str =
    include_str!("../data/topics/string_manipulation_functions.toml");

pub const UNIT_TESTING_IN_PYTHON: &str = include_str!("../data/topics/unit_testing_in_python.toml");

pub const USING_MAP_FILTER_REDUCE: &str =
    include_str!("../data/topics/using_map_filter_reduce.toml");

/// All embedded topic documents, in lexical name order.
pub const TOPIC_SOURCES: &[TopicSource] = &[
    TopicSource {
        name: "asynchronous_programming",
        toml: ASYNCHRONOUS_PROGRAMMING,
    },
    TopicSource {
        name: "classes_and_objects",
        toml: CLASSES_AND_OBJECTS,
    },
    TopicSource {
        name: "concurrency_and_parallelism",
        toml: CONCURRENCY_AND_PARALLELISM,
    },
    TopicSource {
        name: "control_flow_statements",
        toml: CONTROL_FLOW_STATEMENTS,
    },
    TopicSource {
        name: "data_structure_functions",
        toml: DATA_STRUCTURE_FUNCTIONS,
    },
    TopicSource {
        name: "debugging_techniques",
        toml: DEBUGGING_TECHNIQUES,
    },
    TopicSource {
        name: "encapsulation_and_abstraction",
        toml: ENCAPSULATION_AND_ABSTRACTION,
    },
    TopicSource {
        name: "file_io_operations",
        toml: FILE_IO_OPERATIONS,
    },
    TopicSource {
        name: "functions_and_lambdas",
        toml: FUNCTIONS_AND_LAMBDAS,
    },
    TopicSource {
        name: "introduction_to_python",
        toml: INTRODUCTION_TO_PYTHON,
    },
    TopicSource {
        name: "object_oriented_functions",
        toml: OBJECT_ORIENTED_FUNCTIONS,
    },
    TopicSource {
        name: "profiling_and_optimization",
        toml: PROFILING_AND_OPTIMIZATION,
    },
    TopicSource {
        name: "python_standard_library",
        toml: PYTHON_STANDARD_LIBRARY,
    },
    TopicSource {
        name: "regular_expressions",
        toml: REGULAR_EXPRESSIONS,
    },
    TopicSource {
        name: "string_manipulation_functions",
        toml: STRING_MANIPULATION_FUNCTIONS,
    },
    TopicSource {
        name: "unit_testing_in_python",
        toml: UNIT_TESTING_IN_PYTHON,
    },
    TopicSource {
        name: "using_map_filter_reduce",
        toml: USING_MAP_FILTER_REDUCE,
    },
];
