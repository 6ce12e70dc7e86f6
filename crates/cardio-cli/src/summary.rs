use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use cardio_model::PredictionOutcome;

use crate::types::PredictReport;

pub fn print_outcome(report: &PredictReport) {
    println!("Endpoint: {}", report.endpoint);

    if report.dry_run {
        if let PredictionOutcome::Failed { message } = &report.outcome {
            println!("Dry run: record rejected - {message}");
            return;
        }
        println!("Dry run: record is valid; request body:");
        println!("{}", report.request_body);
        return;
    }

    match &report.outcome {
        PredictionOutcome::Resolved(label) => {
            let mut table = Table::new();
            table.set_header(vec![header_cell("Prediction"), header_cell("Label")]);
            apply_table_style(&mut table);
            let color = if label.is_positive() {
                Color::Red
            } else {
                Color::Green
            };
            table.add_row(vec![
                Cell::new(label.to_string())
                    .fg(color)
                    .add_attribute(Attribute::Bold),
                Cell::new(label.as_wire()),
            ]);
            println!("{table}");
        }
        PredictionOutcome::Failed { message } => {
            println!("Prediction failed: {message}");
        }
        outcome => println!("Outcome: {outcome}"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
