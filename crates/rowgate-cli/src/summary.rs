//! Console summary rendering.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rowgate_cli::types::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    println!("Config: {}", outcome.config_path.display());
    println!("Input:  {}", outcome.data_file.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Checks"),
        header_cell("Failures"),
        header_cell("Error rate"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for field in &outcome.fields {
        table.add_row(vec![
            Cell::new(&field.field)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&field.checks),
            failure_cell(field.stats.fail_count),
            rate_cell(field.stats.fail_percentage),
        ]);
    }
    println!("{table}");

    println!(
        "Records: {} total, {} accepted, {} rejected",
        outcome.total_records, outcome.accepted_records, outcome.rejected_records
    );
    match &outcome.rejected_file {
        Some(path) => println!("Rejected records written to {}", path.display()),
        None => println!("Dry run: rejected-records file not written"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn failure_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn rate_cell(percentage: f64) -> Cell {
    let text = format!("{percentage:.4}%");
    if percentage > 0.0 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text).fg(Color::DarkGrey)
    }
}

#[cfg(test)]
mod tests {
    use super::rate_cell;

    #[test]
    fn rates_render_with_fixed_precision() {
        assert_eq!(rate_cell(75.0).content(), "75.0000%");
        assert_eq!(rate_cell(66.6667).content(), "66.6667%");
        assert_eq!(rate_cell(0.0).content(), "0.0000%");
    }
}
