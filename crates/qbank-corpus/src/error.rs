#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to parse topic document '{topic}': {source}")]
    Toml {
        topic: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("topic '{topic}' record {index}: main_question must not be empty")]
    EmptyMainQuestion { topic: String, index: usize },

    #[error("duplicate topic name: {name}")]
    DuplicateTopic { name: String },

    #[error("unknown topic: {name}")]
    TopicNotFound { name: String },

    #[error("topic '{topic}' has {len} questions, index {index} is out of range")]
    IndexOutOfRange {
        topic: String,
        index: usize,
        len: usize,
    },
}

impl CorpusError {
    /// True for errors that abort the load; lookup failures are recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CorpusError::Toml { .. }
                | CorpusError::EmptyMainQuestion { .. }
                | CorpusError::DuplicateTopic { .. }
        )
    }
}
