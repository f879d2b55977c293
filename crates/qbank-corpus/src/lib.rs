#![deny(unsafe_code)]

pub mod doctor;
pub mod embedded;
pub mod error;
pub mod loader;
pub mod registry;

pub use crate::doctor::CorpusReport;
pub use crate::error::CorpusError;
pub use crate::loader::parse_topic;
pub use crate::registry::{LoadSummary, TopicRegistry, shared_registry};
