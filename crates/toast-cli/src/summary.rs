use std::cmp::Ordering;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use toast_cli::types::RunResult;
use toast_model::IssueSeverity;

pub fn print_summary(result: &RunResult) {
    println!("Tournament: {}", result.tournament_name);
    match &result.output_path {
        Some(path) => println!("Script: {}", path.display()),
        None => println!("Script: not written"),
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    if !result.divisions.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Division"),
            header_cell("Teams"),
            header_cell("Advancing"),
            header_cell("Alternates"),
            header_cell("Winners"),
        ]);
        apply_table_style(&mut table);
        for index in 1..=4 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        for summary in &result.divisions {
            let label = match summary.division {
                Some(division) => division.to_string(),
                None => "All teams".to_string(),
            };
            table.add_row(vec![
                Cell::new(label)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(summary.teams),
                count_cell(summary.advancing),
                count_cell(summary.alternates),
                count_cell(summary.winners),
            ]);
        }
        println!("{table}");
    }

    print_issue_table(result);
    println!(
        "Variables bound: {}  Errors: {}  Warnings: {}",
        result.variables_bound,
        result.report.error_count(),
        result.report.warning_count()
    );
    if result.report.has_errors() {
        eprintln!("Errors:");
        for issue in result.report.errors() {
            eprintln!("- [{}] {}", issue.context, issue.message);
        }
    }
}

fn print_issue_table(result: &RunResult) {
    if result.report.issues.is_empty() {
        return;
    }
    let mut issues: Vec<_> = result.report.issues.iter().collect();
    issues.sort_by(|a, b| {
        let severity = severity_rank(b.severity).cmp(&severity_rank(a.severity));
        if severity != Ordering::Equal {
            return severity;
        }
        let context = a.context.cmp(&b.context);
        if context != Ordering::Equal {
            return context;
        }
        a.message.cmp(&b.message)
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Context"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(issue.context.clone()),
            Cell::new(issue.message.clone()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: IssueSeverity) -> u8 {
    match severity {
        IssueSeverity::Error => 2,
        IssueSeverity::Warning => 1,
    }
}

fn count_cell(value: usize) -> Cell {
    if value == 0 {
        dim_cell(value)
    } else {
        Cell::new(value)
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
