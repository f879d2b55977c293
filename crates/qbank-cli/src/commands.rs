use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use qbank_corpus::{CorpusReport, TopicRegistry};

use crate::cli::{QuestionArgs, ShowArgs, TopicsArgs};
use crate::summary::{apply_table_style, header_cell, print_question, print_topic};

pub fn run_topics(args: &TopicsArgs) -> Result<()> {
    let registry = load_registry()?;
    if args.json {
        let names: Vec<&str> = registry.topic_names().collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Topic"),
        header_cell("Questions"),
        header_cell("Follow-ups"),
    ]);
    apply_table_style(&mut table);
    for topic in registry.topics() {
        table.add_row(vec![
            topic.name.clone(),
            topic.len().to_string(),
            topic.follow_up_count().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let registry = load_registry()?;
    let topic = registry.get(&args.topic)?;
    debug!(topic = %topic.name, question_count = topic.len(), "topic resolved");
    if args.json {
        println!("{}", serde_json::to_string_pretty(topic)?);
        return Ok(());
    }
    print_topic(topic);
    Ok(())
}

pub fn run_question(args: &QuestionArgs) -> Result<()> {
    let registry = load_registry()?;
    let record = registry.question(&args.topic, args.index)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }
    print_question(&args.topic, args.index, record);
    Ok(())
}

pub fn run_doctor() -> Result<()> {
    let (registry, summary) = TopicRegistry::load().context("load corpus")?;
    info!(
        topic_count = summary.topic_count,
        question_count = summary.question_count,
        follow_up_count = summary.follow_up_count,
        "corpus loaded"
    );
    let report = CorpusReport::from_registry(&registry, &summary);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_registry() -> Result<TopicRegistry> {
    let (registry, summary) = TopicRegistry::load().context("load corpus")?;
    info!(
        topic_count = summary.topic_count,
        question_count = summary.question_count,
        "corpus loaded"
    );
    Ok(registry)
}
