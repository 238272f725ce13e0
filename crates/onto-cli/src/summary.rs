use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use onto_cli::pipeline::CompileRun;
use onto_report::ReasonerVerdict;

pub fn print_summary(run: &CompileRun) {
    let summary = &run.summary;
    println!("Ontology: {}", run.report.document.label);
    match &summary.artifact {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Input digest: {}", run.model.input_digest);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Fields", summary.fields),
        ("Classes", summary.classes),
        ("Data properties", summary.data_properties),
        ("Object properties (baseline)", summary.baseline_object_properties),
        ("Object properties (fields)", summary.field_object_properties),
        ("Hierarchy links", summary.hierarchy_links),
        ("Named individuals", summary.individuals),
        ("Option sets", summary.option_sets),
        ("Enumeration fields", summary.enumeration_fields),
        (
            "Enumeration fields with option set",
            summary.enumeration_fields_with_option_set,
        ),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("Skipped rows"),
        count_cell(summary.skipped_rows, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched option sets"),
        count_cell(summary.unmatched_option_sets, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Identifier collisions"),
        count_cell(summary.identifier_collisions, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Completeness")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}%", summary.completeness * 100.0)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Consistency")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        verdict_cell(run.report.verdict),
    ]);
    println!("{table}");

    print_issue_table(run);
}

fn print_issue_table(run: &CompileRun) {
    let skipped = run
        .model
        .skipped
        .iter()
        .map(|skip| ("skipped row", format!("row {}", skip.row), skip.reason.clone()));
    let unmatched = run
        .model
        .unmatched_option_sets
        .iter()
        .map(|name| ("unmatched option set", name.clone(), "no field claims it".to_string()));
    let collisions = run.report.collisions().iter().map(|collision| {
        (
            "collision",
            collision.source.clone(),
            format!("{} renamed to {}", collision.requested, collision.assigned),
        )
    });
    let inconsistencies = run.report.inconsistencies.iter().map(|report| {
        ("inconsistency", report.subject.clone(), format!("[{}] {}", report.kind, report.message))
    });
    let issues: Vec<_> = skipped
        .chain(unmatched)
        .chain(collisions)
        .chain(inconsistencies)
        .collect();
    if issues.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Subject"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    for (kind, subject, detail) in issues {
        let kind_cell = match kind {
            "inconsistency" => Cell::new(kind).fg(Color::Red),
            _ => Cell::new(kind).fg(Color::Yellow),
        };
        table.add_row(vec![kind_cell, Cell::new(subject), Cell::new(detail)]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn verdict_cell(verdict: ReasonerVerdict) -> Cell {
    let color = match verdict {
        ReasonerVerdict::Consistent => Color::Green,
        ReasonerVerdict::Inconsistent => Color::Red,
        ReasonerVerdict::TimedOut => Color::Yellow,
    };
    Cell::new(verdict)
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
