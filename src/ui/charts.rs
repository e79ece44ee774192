use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points,
};

use crate::color::CategoryColors;
use crate::data::model::Table;
use crate::data::stats::{self, BoxStats};

const CHART_HEIGHT: f32 = 320.0;
const HISTOGRAM_FILL: Color32 = Color32::from_rgb(93, 140, 201);

// ---------------------------------------------------------------------------
// Scatter plot, one series per category value
// ---------------------------------------------------------------------------

/// Scatter `x_col` against `y_col`, one coloured series per distinct value
/// of `category_col`. Rows with a null on either axis are skipped.
pub fn scatter_by_category(
    ui: &mut Ui,
    id: &str,
    table: &Table,
    x_col: &str,
    y_col: &str,
    category_col: &str,
) {
    let categories = table.unique_values(category_col);
    let colors = CategoryColors::new(categories.iter().cloned());

    let (Some(xi), Some(yi), Some(ci)) = (
        table.column_index(x_col),
        table.column_index(y_col),
        table.column_index(category_col),
    ) else {
        ui.label(format!("Missing columns for {id}"));
        return;
    };

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(x_col)
        .y_axis_label(y_col)
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for category in &categories {
                let points: PlotPoints = table
                    .rows
                    .iter()
                    .filter(|row| &row[ci] == category)
                    .filter_map(|row| Some([row[xi].as_f64()?, row[yi].as_f64()?]))
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(category.to_string())
                        .color(colors.color_for(category))
                        .radius(2.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width histogram of `values` with `n_bins` bins.
pub fn histogram(ui: &mut Ui, id: &str, values: &[f64], n_bins: usize, x_label: &str) {
    let bins = stats::histogram_bins(values, n_bins);

    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            Bar::new((bin.lower + bin.upper) / 2.0, bin.count as f64)
                .width((bin.upper - bin.lower) * 0.95)
                .fill(HISTOGRAM_FILL)
        })
        .collect();

    Plot::new(id)
        .x_axis_label(x_label)
        .y_axis_label("count")
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(HISTOGRAM_FILL));
        });
}

// ---------------------------------------------------------------------------
// Grouped bar chart
// ---------------------------------------------------------------------------

/// One series of a grouped bar chart: `values[i]` is the bar height over
/// `categories[i]`.
pub struct BarGroup {
    pub label: String,
    pub color: Color32,
    pub values: Vec<f64>,
}

/// Bars side by side within each category slot, one colour per group.
pub fn grouped_bars(
    ui: &mut Ui,
    id: &str,
    categories: &[String],
    groups: &[BarGroup],
    x_label: &str,
    y_label: &str,
) {
    let slot = group_slot_width(groups.len());
    let labels = categories.to_vec();

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark, _range| category_tick(mark.value, &labels))
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (g, group) in groups.iter().enumerate() {
                let bars: Vec<Bar> = group
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| {
                        Bar::new(group_offset(i, g, groups.len(), slot), v)
                            .width(slot * 0.9)
                            .fill(group.color)
                    })
                    .collect();

                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&group.label)
                        .color(group.color),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Grouped box plots
// ---------------------------------------------------------------------------

/// One series of grouped box plots: `boxes[i]` (when present) is the box
/// over `categories[i]`.
pub struct BoxGroup {
    pub label: String,
    pub color: Color32,
    pub boxes: Vec<Option<BoxStats>>,
}

pub fn grouped_boxes(
    ui: &mut Ui,
    id: &str,
    categories: &[String],
    groups: &[BoxGroup],
    x_label: &str,
    y_label: &str,
) {
    let slot = group_slot_width(groups.len());
    let labels = categories.to_vec();

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark, _range| category_tick(mark.value, &labels))
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (g, group) in groups.iter().enumerate() {
                let elems: Vec<BoxElem> = group
                    .boxes
                    .iter()
                    .enumerate()
                    .filter_map(|(i, stats)| {
                        let b = stats.as_ref()?;
                        Some(
                            BoxElem::new(
                                group_offset(i, g, groups.len(), slot),
                                BoxSpread::new(
                                    b.whisker_low,
                                    b.q1,
                                    b.median,
                                    b.q3,
                                    b.whisker_high,
                                ),
                            )
                            .box_width(slot as f64 * 0.8)
                            .whisker_width(slot as f64 * 0.4)
                            .fill(group.color.gamma_multiply(0.4))
                            .stroke(Stroke::new(1.5, group.color)),
                        )
                    })
                    .collect();

                plot_ui.box_plot(
                    BoxPlot::new(elems)
                        .name(&group.label)
                        .color(group.color),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Shared layout helpers
// ---------------------------------------------------------------------------

/// Horizontal room given to each series inside one category slot.
fn group_slot_width(n_groups: usize) -> f64 {
    0.8 / n_groups.max(1) as f64
}

/// X position of series `group` over category `category` (categories sit at
/// integer coordinates, series fan out around them).
fn group_offset(category: usize, group: usize, n_groups: usize, slot: f64) -> f64 {
    category as f64 + slot * (group as f64 - (n_groups as f64 - 1.0) / 2.0)
}

/// Tick label: the category name at integer positions, nothing elsewhere.
fn category_tick(value: f64, labels: &[String]) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_offsets_are_centered_on_the_category() {
        let slot = group_slot_width(2);
        let left = group_offset(1, 0, 2, slot);
        let right = group_offset(1, 1, 2, slot);
        assert!((left + right - 2.0).abs() < 1e-12);
        assert!(left < 1.0 && right > 1.0);
    }

    #[test]
    fn category_ticks_only_label_integer_positions() {
        let labels = vec!["First".to_string(), "Second".to_string()];
        assert_eq!(category_tick(0.0, &labels), "First");
        assert_eq!(category_tick(1.0, &labels), "Second");
        assert_eq!(category_tick(0.5, &labels), "");
        assert_eq!(category_tick(5.0, &labels), "");
        assert_eq!(category_tick(-1.0, &labels), "");
    }
}
