//! CLI library components for the question bank.

pub mod logging;
