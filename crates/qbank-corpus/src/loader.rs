#![deny(unsafe_code)]

use serde::Deserialize;

use qbank_model::{QuestionRecord, TopicCollection};

use crate::error::CorpusError;

/// Raw shape of one topic document before validation.
#[derive(Debug, Deserialize)]
struct TopicDocument {
    #[serde(default)]
    questions: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    main_question: String,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    follow_up_questions: Vec<String>,
}

/// Parse one topic document and validate every record.
///
/// Record order in the document is preserved in the returned collection.
/// A record whose `main_question` is empty after trimming rejects the whole
/// document.
pub fn parse_topic(name: &str, text: &str) -> Result<TopicCollection, CorpusError> {
    let document: TopicDocument = toml::from_str(text).map_err(|source| CorpusError::Toml {
        topic: name.to_string(),
        source,
    })?;

    let mut questions = Vec::with_capacity(document.questions.len());
    for (index, raw) in document.questions.into_iter().enumerate() {
        if raw.main_question.trim().is_empty() {
            return Err(CorpusError::EmptyMainQuestion {
                topic: name.to_string(),
                index,
            });
        }
        questions.push(QuestionRecord {
            main_question: raw.main_question,
            explanation: raw.explanation,
            follow_up_questions: raw.follow_up_questions,
        });
    }

    Ok(TopicCollection {
        name: name.to_string(),
        questions,
    })
}
