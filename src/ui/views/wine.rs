use eframe::egui::Ui;

use super::{insights, paragraph, subheading};
use crate::data::model::Table;
use crate::data::stats;
use crate::ui::{charts, heatmap};

/// The two wine datasets share one view; only the narrative differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WineKind {
    Red,
    White,
}

impl WineKind {
    fn name(self) -> &'static str {
        match self {
            WineKind::Red => "Red Wine",
            WineKind::White => "White Wine",
        }
    }
}

/// Wine view: quality-score histogram and a full correlation heatmap over
/// the chemical properties.
pub fn show(ui: &mut Ui, table: &Table, kind: WineKind) {
    let name = kind.name();

    ui.heading(format!("{name} Quality: What Affects Wine Quality?"));
    paragraph(
        ui,
        "This dataset relates the chemical properties of each wine to its \
         quality rating. The goal is to identify which characteristics \
         influence the perceived quality.",
    );

    subheading(ui, &format!("Distribution of {name} Quality Scores"));
    paragraph(
        ui,
        "First, the distribution of quality ratings: how often do wines \
         receive the highest scores, and are most wines of average quality?",
    );
    charts::histogram(
        ui,
        "wine_quality_hist",
        &table.numeric_values("quality"),
        10,
        "quality",
    );

    match kind {
        WineKind::Red => insights(
            ui,
            &[
                "Most wines score between 5 and 7; the highest-quality wines \
                 are relatively rare.",
            ],
        ),
        WineKind::White => insights(
            ui,
            &[
                "Similar to red wines, most white wines score between 5 and \
                 7 — exceptionally high-quality wines are rare.",
            ],
        ),
    }

    subheading(ui, "Correlation Heatmap: Chemical Properties vs. Quality");
    paragraph(
        ui,
        "The heatmap relates properties like alcohol content and acidity to \
         the quality score, pinpointing which factors matter most.",
    );
    let matrix = stats::correlation_matrix(table, &[]);
    heatmap::correlation_heatmap(ui, &matrix);

    match kind {
        WineKind::Red => insights(
            ui,
            &[
                "Alcohol content is positively correlated with quality: \
                 stronger wines tend to be rated better.",
                "Volatile acidity is negatively correlated with quality — \
                 high acidity detracts from the perceived quality.",
            ],
        ),
        WineKind::White => insights(
            ui,
            &[
                "Residual sugar correlates with quality more strongly than \
                 for red wine, matching the sweeter profile of higher-rated \
                 whites.",
                "Alcohol content continues to matter, with higher levels \
                 generally leading to higher ratings.",
            ],
        ),
    }
}
