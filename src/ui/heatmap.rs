use eframe::egui::{
    epaint::TextShape, pos2, vec2, Align2, CornerRadius, FontId, Rect, Sense, Ui,
};

use crate::color;
use crate::data::stats::CorrelationMatrix;

const LABEL_FONT: f32 = 11.0;
const CELL_FONT: f32 = 10.0;
const LABEL_GAP: f32 = 6.0;

// ---------------------------------------------------------------------------
// Annotated correlation heatmap
// ---------------------------------------------------------------------------

/// Paint `matrix` as a colored grid with per-cell coefficient annotations,
/// row labels to the left and rotated column labels on top.
pub fn correlation_heatmap(ui: &mut Ui, matrix: &CorrelationMatrix) {
    let n = matrix.columns.len();
    if n == 0 {
        ui.label("No numeric columns to correlate.");
        return;
    }

    let text_color = ui.visuals().text_color();
    let label_font = FontId::proportional(LABEL_FONT);

    let label_galleys: Vec<_> = matrix
        .columns
        .iter()
        .map(|c| {
            ui.painter()
                .layout_no_wrap(c.clone(), label_font.clone(), text_color)
        })
        .collect();

    let left_band = label_galleys
        .iter()
        .map(|g| g.size().x)
        .fold(0.0_f32, f32::max)
        + LABEL_GAP;
    let top_band = left_band; // rotated column labels need the same run length

    let cell = ((ui.available_width() - left_band) / n as f32).clamp(34.0, 60.0);
    let size = vec2(left_band + cell * n as f32, top_band + cell * n as f32);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min + vec2(left_band, top_band);

    for (i, row) in matrix.values.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let cell_rect = Rect::from_min_size(
                origin + vec2(j as f32 * cell, i as f32 * cell),
                vec2(cell, cell),
            );
            painter.rect_filled(
                cell_rect.shrink(0.5),
                CornerRadius::ZERO,
                color::diverging(value),
            );
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                format!("{value:.2}"),
                FontId::proportional(CELL_FONT),
                color::diverging_text(value),
            );
        }
    }

    // Row labels, right-aligned against the grid.
    for (i, column) in matrix.columns.iter().enumerate() {
        painter.text(
            pos2(
                origin.x - LABEL_GAP,
                origin.y + (i as f32 + 0.5) * cell,
            ),
            Align2::RIGHT_CENTER,
            column,
            label_font.clone(),
            text_color,
        );
    }

    // Column labels, rotated to read bottom-up above each column.
    for (j, galley) in label_galleys.into_iter().enumerate() {
        let height = galley.size().y;
        let pos = pos2(
            origin.x + (j as f32 + 0.5) * cell - height / 2.0,
            origin.y - LABEL_GAP,
        );
        painter.add(
            TextShape::new(pos, galley, text_color)
                .with_angle(-std::f32::consts::FRAC_PI_2),
        );
    }
}
