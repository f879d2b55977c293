use serde::{Deserialize, Serialize};

/// One interview question entry: the question asked, the answer guidance the
/// interviewer works from, and the follow-ups that probe deeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The question posed to the candidate. Never empty in a loaded corpus.
    pub main_question: String,
    /// Guidance on what a good answer covers.
    pub explanation: String,
    /// Ordered follow-up questions; may be empty.
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}

impl QuestionRecord {
    /// Number of follow-up questions attached to this record.
    pub fn follow_up_count(&self) -> usize {
        self.follow_up_questions.len()
    }

    pub fn has_follow_ups(&self) -> bool {
        !self.follow_up_questions.is_empty()
    }
}

/// A named grouping of related interview questions.
///
/// The order of `questions` is the intended presentation order and is
/// preserved exactly as defined in the corpus source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCollection {
    /// Unique identifier derived from the topic's source grouping
    /// (e.g. "classes_and_objects").
    pub name: String,
    pub questions: Vec<QuestionRecord>,
}

impl TopicCollection {
    /// Number of questions in this topic.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The record at a zero-based position, if in range.
    pub fn question(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }

    /// Total follow-up questions across all records in this topic.
    pub fn follow_up_count(&self) -> usize {
        self.questions.iter().map(QuestionRecord::follow_up_count).sum()
    }
}
