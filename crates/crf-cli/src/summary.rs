use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use anyhow::Result;
use crf_model::{FieldKind, FormSchema};
use crf_validate::ErrorKind;

use crate::outcome::ValidationOutcome;

pub fn print_outcome(outcome: &ValidationOutcome) {
    println!("Form: {}", outcome.rule_set);
    match &outcome.visit_code {
        Some(code) => println!("Subject: {} (visit {code})", outcome.subject_identifier),
        None => println!("Subject: {}", outcome.subject_identifier),
    }
    if outcome.valid {
        println!("Result: valid");
        return;
    }
    println!("Result: {} error(s)", outcome.error_count());
    println!("{}", outcome_table(outcome));
}

pub fn print_outcome_json(outcome: &ValidationOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

pub fn outcome_table(outcome: &ValidationOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, error) in outcome.errors.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            field_cell(error.field()),
            kind_cell(error.kind()),
            Cell::new(error.message()),
        ]);
    }
    table
}

pub fn print_fields(schema: &FormSchema) {
    println!("Form: {} ({} fields)", schema.name, schema.len());
    println!("{}", fields_table(schema));
}

pub fn fields_table(schema: &FormSchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Kind")]);
    apply_table_style(&mut table);
    for spec in &schema.fields {
        table.add_row(vec![Cell::new(spec.name), field_kind_cell(spec.kind)]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: Option<&str>) -> Cell {
    match field {
        Some(name) => Cell::new(name),
        None => dim_cell("(form)"),
    }
}

fn kind_cell(kind: ErrorKind) -> Cell {
    let cell = Cell::new(kind.label());
    match kind {
        ErrorKind::ContextNotFound => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        ErrorKind::LogicalContradiction | ErrorKind::ExclusiveSelection => cell.fg(Color::Red),
        ErrorKind::RequiredFieldMissing
        | ErrorKind::FieldNotApplicable
        | ErrorKind::OtherSpecifyMissing => cell.fg(Color::Yellow),
    }
}

fn field_kind_cell(kind: FieldKind) -> Cell {
    match kind {
        FieldKind::Selection => Cell::new(kind).fg(Color::Blue),
        _ => Cell::new(kind),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
