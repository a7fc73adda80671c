//! Terminal rendering of summary tables.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use registry_model::{DiseaseConfig, DiseaseType, RelapseYearPolicy, SummaryTable};

pub fn print_summary(summary: &SummaryTable, disease: DiseaseType) {
    println!("Disease: {disease}");
    let mut table = Table::new();
    table.set_header(summary.columns.iter().map(|c| header_cell(c)));
    apply_table_style(&mut table);
    for idx in 1..summary.columns.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for row in &summary.rows {
        let mut cells = vec![cohort_cell(&row.cohort)];
        for count in &row.counts {
            cells.push(count_cell(*count, row.cohort == "Total"));
        }
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn print_disease_defaults(configs: &[DiseaseConfig]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Disease"),
        header_cell("Header offset"),
        header_cell("Staging"),
        header_cell("Affirmative"),
        header_cell("Relapse year"),
        header_cell("Reference end"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for config in configs {
        table.add_row(vec![
            Cell::new(config.disease)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(config.header_offset),
            Cell::new(if config.staging { "✓" } else { "-" }),
            Cell::new(format!("{:?}", config.affirmative)),
            Cell::new(relapse_policy_label(config.relapse_year)),
            Cell::new(config.reference_end),
        ]);
    }
    println!("{table}");
}

fn relapse_policy_label(policy: RelapseYearPolicy) -> String {
    match policy {
        RelapseYearPolicy::FromRelapseDate => "from relapse date".to_string(),
        RelapseYearPolicy::FixedYear(year) => format!("fixed {year}"),
        RelapseYearPolicy::Unavailable => "unavailable".to_string(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(200);
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

fn cohort_cell(label: &str) -> Cell {
    if label == "Total" {
        Cell::new(label)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(label)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: u64, emphasized: bool) -> Cell {
    let cell = Cell::new(count);
    if emphasized {
        cell.add_attribute(Attribute::Bold)
    } else if count == 0 {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}
