use eframe::egui::Ui;

use super::{insights, paragraph, subheading};
use crate::data::model::Table;
use crate::data::stats;
use crate::ui::{charts, heatmap};

/// Iris view: two scatter relationships grouped by species, plus a
/// correlation heatmap over the measurement columns.
pub fn show(ui: &mut Ui, table: &Table) {
    ui.heading("Iris Dataset: How Do Flower Measurements Help Classify Species?");
    paragraph(
        ui,
        "This dataset holds measurements of three species of iris flowers: \
         Setosa, Versicolor, and Virginica — the lengths and widths of petals \
         and sepals. The question: how can flower measurements be used to \
         differentiate between species?",
    );

    subheading(ui, "Sepal Length vs Sepal Width");
    paragraph(
        ui,
        "We start with how sepal length and sepal width vary between species. \
         These capture the overall size of the flower; the scatter plot shows \
         whether these two measurements alone separate the species.",
    );
    charts::scatter_by_category(
        ui,
        "iris_sepal_scatter",
        table,
        "SepalLengthCm",
        "SepalWidthCm",
        "Species",
    );

    subheading(ui, "Petal Length vs Petal Width");
    paragraph(
        ui,
        "Petals are often more distinctive than sepals. Here we check whether \
         petal dimensions offer a clearer separation between species.",
    );
    charts::scatter_by_category(
        ui,
        "iris_petal_scatter",
        table,
        "PetalLengthCm",
        "PetalWidthCm",
        "Species",
    );

    subheading(ui, "Correlation Heatmap: Do Length and Width Correlate?");
    paragraph(
        ui,
        "The heatmap shows how strongly the measurements relate to each \
         other, which hints at which of them carry the most signal for \
         classification.",
    );
    // Id is a row number, not a measurement; Species is categorical and
    // drops out of the numeric correlation by construction.
    let matrix = stats::correlation_matrix(table, &["Id"]);
    heatmap::correlation_heatmap(ui, &matrix);

    insights(
        ui,
        &[
            "Petal measurements are much more correlated with each other than \
             sepal measurements.",
            "Petal length and petal width are the key differentiators, \
             particularly for the Virginica species.",
        ],
    );
}
