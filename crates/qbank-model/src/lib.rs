pub mod topic;

pub use topic::{QuestionRecord, TopicCollection};
