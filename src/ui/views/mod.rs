/// Per-dataset presentation routines. Each handler is a fixed, stateless
/// rendering pass over the loaded table: charts plus static insight text.

mod iris;
mod titanic;
mod wine;

use eframe::egui::Ui;

use crate::data::catalog::DatasetId;
use crate::data::model::Table;

/// Dispatch to the selected dataset's view.
pub fn dataset_view(ui: &mut Ui, id: DatasetId, table: &Table) {
    match id {
        DatasetId::Iris => iris::show(ui, table),
        DatasetId::Titanic => titanic::show(ui, table),
        DatasetId::RedWine => wine::show(ui, table, wine::WineKind::Red),
        DatasetId::WhiteWine => wine::show(ui, table, wine::WineKind::White),
    }
}

/// A wrapped body paragraph under the current section.
fn paragraph(ui: &mut Ui, text: &str) {
    ui.label(text);
    ui.add_space(4.0);
}

/// A chart sub-section header.
fn subheading(ui: &mut Ui, text: &str) {
    ui.add_space(10.0);
    ui.strong(text);
    ui.add_space(4.0);
}

/// The "Insights" block closing a chart.
fn insights(ui: &mut Ui, lines: &[&str]) {
    ui.add_space(6.0);
    ui.strong("Insights:");
    for line in lines {
        ui.label(format!("• {line}"));
    }
    ui.add_space(6.0);
}
