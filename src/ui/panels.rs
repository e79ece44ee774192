use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::catalog::DatasetId;
use crate::data::export;
use crate::state::AppState;

/// Bundled resume served by the sidebar download button.
const RESUME_PATH: &str = "assets/resume.pdf";

// ---------------------------------------------------------------------------
// Left side panel – profile, dataset selection, downloads
// ---------------------------------------------------------------------------

/// Render the sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Profile photo (centered) ----
    let photo = egui::include_image!("../../assets/profile.png");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(photo)
                .max_width(ui.available_width() * 0.7)
                .max_height(160.0)
                .rounding(4.0),
        );
    });
    ui.add_space(6.0);

    ui.strong("About Me");
    ui.label(
        "I am a data science student with a focus on machine learning, data \
         analytics, and optimization. I have experience working with \
         real-world datasets, building models, and delivering insights that \
         drive decision-making.",
    );
    ui.add_space(4.0);

    if ui.button("Download My Resume").clicked() {
        download_resume(state);
    }

    ui.separator();

    // ---- Dataset selection ----
    ui.heading("Select a Dataset");
    egui::ComboBox::from_id_salt("dataset_select")
        .selected_text(state.selected.label())
        .show_ui(ui, |ui: &mut Ui| {
            for id in DatasetId::ALL {
                if ui
                    .selectable_label(state.selected == id, id.label())
                    .clicked()
                {
                    state.select(id);
                }
            }
        });
    ui.add_space(4.0);

    if ui.button("Download Dataset as CSV").clicked() {
        export_dataset_csv(state);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Data Portfolio");
        ui.separator();

        if let Some(table) = state.current_table() {
            ui.label(format!(
                "{}: {} rows, {} columns",
                state.selected.label(),
                table.len(),
                table.column_names.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Download actions
// ---------------------------------------------------------------------------

/// Export the active table as CSV to a user-chosen path.
fn export_dataset_csv(state: &mut AppState) {
    let Some(table) = state.current_table() else {
        state.status_message = Some("No dataset loaded to export.".to_string());
        return;
    };

    let bytes = match export::to_csv(table) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("CSV export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
            return;
        }
    };

    let suggested = state
        .selected
        .file_path()
        .rsplit('/')
        .next()
        .unwrap_or("dataset.csv");
    let Some(path) = rfd::FileDialog::new()
        .set_title("Save dataset as CSV")
        .set_file_name(suggested)
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return;
    };

    match std::fs::write(&path, bytes) {
        Ok(()) => {
            log::info!("exported {} to {}", state.selected.label(), path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("failed to write {}: {e}", path.display());
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}

/// Copy the bundled resume to a user-chosen path.
fn download_resume(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Save resume")
        .set_file_name("resume.pdf")
        .add_filter("PDF", &["pdf"])
        .save_file()
    else {
        return;
    };

    match std::fs::copy(RESUME_PATH, &path) {
        Ok(_) => {
            log::info!("saved resume to {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("failed to copy resume: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
