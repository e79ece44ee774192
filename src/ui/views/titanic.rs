use eframe::egui::Ui;

use super::{insights, paragraph, subheading};
use crate::color::CategoryColors;
use crate::data::model::{CellValue, Table};
use crate::data::stats;
use crate::ui::charts::{self, BarGroup, BoxGroup};

/// Titanic view: survival counts by class and sex, age distribution, and
/// fare box plots by class and survival.
pub fn show(ui: &mut Ui, table: &Table) {
    ui.heading("Titanic Dataset: Survival Analysis");
    paragraph(
        ui,
        "The Titanic dataset records the passengers aboard the ship during \
         its tragic voyage. The key question: which factors contributed most \
         to a passenger's chances of survival?",
    );

    subheading(ui, "Survival Rate by Class and Gender");
    paragraph(
        ui,
        "Class and gender played critical roles: first-class passengers had \
         better access to lifeboats, and women were given priority. The \
         grouped bars compare passenger counts across class and gender, \
         split by outcome.",
    );
    survival_counts(ui, table);

    subheading(ui, "Age Distribution of Passengers");
    paragraph(
        ui,
        "Age also mattered, with children prioritised. This histogram shows \
         the demographic of the passengers; rows without a recorded age are \
         skipped.",
    );
    charts::histogram(ui, "titanic_age", &table.numeric_values("Age"), 20, "Age");

    insights(
        ui,
        &[
            "Women in first class had the highest survival rates, while \
             third-class passengers (mostly male) had the lowest.",
            "Many children were aboard, but survival among children was not \
             as high as might be expected.",
        ],
    );

    subheading(ui, "Fare Distribution by Class and Survival");
    paragraph(
        ui,
        "Wealthier passengers paid higher fares, and higher fares went with \
         better survival odds. The box plots relate fare, class, and \
         outcome.",
    );
    fare_boxes(ui, table);

    insights(
        ui,
        &[
            "Higher fares were closely tied to first-class passengers, who \
             had significantly better survival outcomes.",
        ],
    );
}

/// Survival outcomes as labels, in a fixed order: lost first, saved second.
const OUTCOMES: [(i64, &str); 2] = [(0, "Did not survive"), (1, "Survived")];

/// Grouped count chart: passenger class × sex, one facet per outcome.
fn survival_counts(ui: &mut Ui, table: &Table) {
    let counts = stats::group_counts(table, &["Survived", "Pclass", "Sex"]);
    let classes: Vec<CellValue> = table.unique_values("Pclass").into_iter().collect();
    let sexes: Vec<CellValue> = table.unique_values("Sex").into_iter().collect();
    let colors = CategoryColors::new(sexes.iter().cloned());

    let class_labels: Vec<String> =
        classes.iter().map(|c| format!("Class {c}")).collect();

    ui.columns(2, |columns| {
        for (facet, (outcome, title)) in OUTCOMES.iter().enumerate() {
            let ui = &mut columns[facet];
            ui.vertical_centered(|ui| {
                ui.strong(*title);
            });

            let groups: Vec<BarGroup> = sexes
                .iter()
                .map(|sex| BarGroup {
                    label: sex.to_string(),
                    color: colors.color_for(sex),
                    values: classes
                        .iter()
                        .map(|class| {
                            let key = vec![
                                CellValue::Integer(*outcome),
                                class.clone(),
                                sex.clone(),
                            ];
                            counts.get(&key).copied().unwrap_or(0) as f64
                        })
                        .collect(),
                })
                .collect();

            charts::grouped_bars(
                ui,
                &format!("titanic_counts_{outcome}"),
                &class_labels,
                &groups,
                "Pclass",
                "count",
            );
        }
    });
}

/// Fare box plots grouped by class, one series per outcome.
fn fare_boxes(ui: &mut Ui, table: &Table) {
    let classes: Vec<CellValue> = table.unique_values("Pclass").into_iter().collect();
    let class_labels: Vec<String> =
        classes.iter().map(|c| format!("Class {c}")).collect();

    let (Some(class_idx), Some(survived_idx), Some(fare_idx)) = (
        table.column_index("Pclass"),
        table.column_index("Survived"),
        table.column_index("Fare"),
    ) else {
        ui.label("Missing columns for fare distribution");
        return;
    };

    let outcome_colors = CategoryColors::new(
        OUTCOMES.iter().map(|(outcome, _)| CellValue::Integer(*outcome)),
    );

    let groups: Vec<BoxGroup> = OUTCOMES
        .iter()
        .map(|(outcome, title)| BoxGroup {
            label: (*title).to_string(),
            color: outcome_colors.color_for(&CellValue::Integer(*outcome)),
            boxes: classes
                .iter()
                .map(|class| {
                    let fares: Vec<f64> = table
                        .rows
                        .iter()
                        .filter(|row| {
                            &row[class_idx] == class
                                && row[survived_idx] == CellValue::Integer(*outcome)
                        })
                        .filter_map(|row| row[fare_idx].as_f64())
                        .collect();
                    stats::box_stats(&fares)
                })
                .collect(),
        })
        .collect();

    charts::grouped_boxes(
        ui,
        "titanic_fare_boxes",
        &class_labels,
        &groups,
        "Pclass",
        "Fare",
    );
}
