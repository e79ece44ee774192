use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{CellValue, Table};
use crate::data::stats::{self, ColumnSummary};

const PREVIEW_ROWS: usize = 5;
const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Dataset preview (first rows)
// ---------------------------------------------------------------------------

/// Render the first rows of the table, one column per dataset column.
pub fn preview_table(ui: &mut Ui, table: &Table) {
    ui.push_id("preview_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true), table.column_names.len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                for name in &table.column_names {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for row in table.head(PREVIEW_ROWS) {
                    body.row(ROW_HEIGHT, |mut table_row| {
                        for cell in row {
                            table_row.col(|ui| {
                                ui.label(format_cell(cell));
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Render the describe output: one row per statistic, one column per
/// numeric column of the dataset.
pub fn describe_table(ui: &mut Ui, table: &Table) {
    let summaries = stats::describe(table);
    if summaries.is_empty() {
        ui.label("No numeric columns.");
        return;
    }

    const STATS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    ui.push_id("describe_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .columns(Column::auto().resizable(true), summaries.len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                header.col(|_ui| {});
                for summary in &summaries {
                    header.col(|ui| {
                        ui.strong(&summary.name);
                    });
                }
            })
            .body(|mut body| {
                for stat in STATS {
                    body.row(ROW_HEIGHT, |mut table_row| {
                        table_row.col(|ui| {
                            ui.strong(stat);
                        });
                        for summary in &summaries {
                            table_row.col(|ui| {
                                ui.label(stat_value(summary, stat));
                            });
                        }
                    });
                }
            });
    });
}

fn stat_value(summary: &ColumnSummary, stat: &str) -> String {
    let value = match stat {
        "count" => return summary.count.to_string(),
        "mean" => summary.mean,
        "std" => summary.std,
        "min" => summary.min,
        "25%" => summary.q25,
        "50%" => summary.median,
        "75%" => summary.q75,
        "max" => summary.max,
        _ => f64::NAN,
    };
    format!("{value:.4}")
}

fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Float(v) => format!("{v:.4}"),
        CellValue::Null => "–".to_string(),
        other => other.to_string(),
    }
}
