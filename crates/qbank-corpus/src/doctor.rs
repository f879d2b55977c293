#![deny(unsafe_code)]

use crate::registry::{LoadSummary, TopicRegistry};

/// Machine-readable corpus health report.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CorpusReport {
    pub schema: String,
    pub schema_version: u32,
    pub topics: Vec<TopicCounts>,
    pub counts: ReportCounts,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct TopicCounts {
    pub name: String,
    pub questions: usize,
    pub follow_ups: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ReportCounts {
    pub topics: usize,
    pub questions: usize,
    pub follow_ups: usize,
}

impl CorpusReport {
    pub fn from_registry(registry: &TopicRegistry, summary: &LoadSummary) -> Self {
        let topics = registry
            .topics()
            .map(|topic| TopicCounts {
                name: topic.name.clone(),
                questions: topic.len(),
                follow_ups: topic.follow_up_count(),
            })
            .collect();
        Self {
            schema: "qbank.corpus-doctor".to_string(),
            schema_version: 1,
            topics,
            counts: ReportCounts {
                topics: summary.topic_count,
                questions: summary.question_count,
                follow_ups: summary.follow_up_count,
            },
        }
    }
}
