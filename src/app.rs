use eframe::egui::{self, ScrollArea};

use crate::data::catalog::DatasetId;
use crate::state::AppState;
use crate::ui::{panels, summary, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PortfolioApp {
    pub state: AppState,
}

impl PortfolioApp {
    /// Start with `initial` selected and loaded.
    pub fn new(initial: DatasetId) -> Self {
        let mut state = AppState::default();
        state.select(initial);
        Self { state }
    }
}

impl Default for PortfolioApp {
    fn default() -> Self {
        Self::new(DatasetId::Iris)
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: profile + dataset selection ----
        egui::SidePanel::left("sidebar")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: summary + dispatched view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &self.state;
            let Some(table) = state.current_table() else {
                ui.centered_and_justified(|ui| {
                    ui.heading("Dataset could not be loaded — see the top bar.");
                });
                return;
            };

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let label = state.selected.label();

                    ui.heading(format!("{label} Dataset"));
                    summary::preview_table(ui, table);

                    ui.add_space(8.0);
                    ui.heading(format!("Descriptive Statistics for {label} Dataset"));
                    summary::describe_table(ui, table);

                    ui.add_space(8.0);
                    ui.separator();
                    views::dataset_view(ui, state.selected, table);

                    ui.separator();
                    ui.label("Created as part of my professional data portfolio.");
                });
        });
    }
}
