use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use genlist_core::{ListMode, RunReport};
use genlist_validate::FileReport;

pub fn print_run_summary(mode: ListMode, report: &RunReport) {
    let title = match mode {
        ListMode::Master => "Master lists",
        ListMode::Combined => "Combined lists",
    };
    println!("{title}:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Departments"),
        header_cell("Files"),
        header_cell("Rows"),
        header_cell("Accepted"),
        header_cell("Skipped"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_rows = 0usize;
    let mut total_records = 0usize;
    let mut total_skipped = 0usize;
    for outcome in &report.outcomes {
        total_rows += outcome.stats.rows;
        total_records += outcome.records;
        total_skipped += outcome.stats.skipped.len();
        table.add_row(vec![
            category_cell(outcome.category.as_str()),
            Cell::new(outcome.stats.departments),
            Cell::new(outcome.stats.files),
            Cell::new(outcome.stats.rows),
            Cell::new(outcome.records),
            count_cell(outcome.stats.skipped.len(), Color::Yellow),
            output_cell(outcome.output.as_ref()),
        ]);
    }
    for failure in &report.failures {
        table.add_row(vec![
            category_cell(failure.category.as_str()),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new("FAILED")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    if report.has_failures() {
        eprintln!("Errors:");
        for failure in &report.failures {
            eprintln!("- {}: {}", failure.category, failure.error);
        }
    }
}

pub fn print_validation_summary(reports: &[FileReport]) {
    if reports.is_empty() {
        println!("No department files found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Department"),
        header_cell("Rows"),
        header_cell("Invalid"),
        header_cell("Duplicates"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for report in reports {
        table.add_row(vec![
            category_cell(report.category.as_str()),
            Cell::new(&report.department),
            Cell::new(report.total_rows),
            count_cell(report.invalid_count(), Color::Red),
            count_cell(report.duplicate_count(), Color::Yellow),
        ]);
    }
    println!("{table}");
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
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("(empty, not written)"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(tag: &str) -> Cell {
    Cell::new(tag)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
