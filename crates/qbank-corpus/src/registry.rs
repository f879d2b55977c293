#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::sync::OnceLock;

use qbank_model::{QuestionRecord, TopicCollection};

use crate::embedded::TOPIC_SOURCES;
use crate::error::CorpusError;
use crate::loader::parse_topic;

/// Counts gathered while loading the corpus.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct LoadSummary {
    pub topic_count: usize,
    pub question_count: usize,
    pub follow_up_count: usize,
}

/// Immutable registry mapping topic name to its collection.
///
/// Built once from the embedded corpus; all lookups borrow from the registry
/// and never mutate it, so shared references are safe across threads.
#[derive(Debug, Clone)]
pub struct TopicRegistry {
    topics: BTreeMap<String, TopicCollection>,
}

impl TopicRegistry {
    /// Parse and validate every embedded topic document.
    ///
    /// Fails on the first malformed record (empty `main_question`), TOML
    /// parse error, or duplicate topic name. Load failures are fatal and
    /// non-retryable: the data is compiled in, so there is nothing to retry
    /// against.
    pub fn load() -> Result<(Self, LoadSummary), CorpusError> {
        Self::from_sources(TOPIC_SOURCES.iter().map(|source| (source.name, source.toml)))
    }

    /// Build a registry from arbitrary `(name, toml)` pairs.
    ///
    /// [`TopicRegistry::load`] routes through this; tests feed it literal
    /// documents to exercise validation failures.
    pub fn from_sources<'a, I>(sources: I) -> Result<(Self, LoadSummary), CorpusError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut topics: BTreeMap<String, TopicCollection> = BTreeMap::new();
        for (name, text) in sources {
            let collection = parse_topic(name, text)?;
            if topics.insert(name.to_string(), collection).is_some() {
                return Err(CorpusError::DuplicateTopic {
                    name: name.to_string(),
                });
            }
        }

        let summary = LoadSummary {
            topic_count: topics.len(),
            question_count: topics.values().map(TopicCollection::len).sum(),
            follow_up_count: topics.values().map(TopicCollection::follow_up_count).sum(),
        };

        Ok((Self { topics }, summary))
    }

    /// Topic names in lexical order. Finite and restartable.
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    /// All collections, in lexical name order.
    pub fn topics(&self) -> impl Iterator<Item = &TopicCollection> {
        self.topics.values()
    }

    /// Number of loaded topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// The collection registered under `name`.
    pub fn get(&self, name: &str) -> Result<&TopicCollection, CorpusError> {
        self.topics
            .get(name)
            .ok_or_else(|| CorpusError::TopicNotFound {
                name: name.to_string(),
            })
    }

    /// The record at a zero-based `index` within topic `name`.
    pub fn question(&self, name: &str, index: usize) -> Result<&QuestionRecord, CorpusError> {
        let topic = self.get(name)?;
        topic
            .question(index)
            .ok_or_else(|| CorpusError::IndexOutOfRange {
                topic: name.to_string(),
                index,
                len: topic.len(),
            })
    }
}

/// Cached process-wide registry built from the embedded corpus.
static SHARED_REGISTRY: OnceLock<Result<(TopicRegistry, LoadSummary), CorpusError>> =
    OnceLock::new();

/// Returns the shared registry, loading it on first access.
///
/// The load runs once per process; every later call returns the same
/// immutable registry (or the same load error).
pub fn shared_registry() -> Result<&'static TopicRegistry, &'static CorpusError> {
    SHARED_REGISTRY
        .get_or_init(TopicRegistry::load)
        .as_ref()
        .map(|(registry, _)| registry)
}
