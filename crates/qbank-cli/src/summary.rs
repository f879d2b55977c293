use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use qbank_model::{QuestionRecord, TopicCollection};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn print_topic(topic: &TopicCollection) {
    println!("Topic: {}", topic.name);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Question"),
        header_cell("Follow-ups"),
    ]);
    apply_table_style(&mut table);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(3)),
        ColumnConstraint::UpperBoundary(Width::Percentage(80)),
        ColumnConstraint::LowerBoundary(Width::Fixed(10)),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, record) in topic.questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(&record.main_question),
            Cell::new(record.follow_up_count()),
        ]);
    }
    println!("{table}");
}

pub fn print_question(topic_name: &str, index: usize, record: &QuestionRecord) {
    println!("Topic: {topic_name}");
    println!("Index: {index}");
    println!();
    println!("{}", record.main_question);
    println!();
    println!("{}", record.explanation);
    if record.has_follow_ups() {
        println!();
        println!("Follow-up questions:");
        for follow_up in &record.follow_up_questions {
            println!("- {follow_up}");
        }
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
