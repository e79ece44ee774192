mod app;
mod color;
mod data;
mod state;
mod ui;

use app::PortfolioApp;
use data::catalog::DatasetId;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset label as first argument, e.g. `data-portfolio Titanic`.
    // Unknown labels are rejected here instead of surfacing as an empty view.
    let initial = match std::env::args().nth(1) {
        Some(label) => match DatasetId::from_label(&label) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("{e}");
                eprintln!(
                    "known datasets: {}",
                    DatasetId::ALL.map(DatasetId::label).join(", ")
                );
                std::process::exit(2);
            }
        },
        None => DatasetId::Iris,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Data Portfolio – Dataset Explorer",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the profile photo.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PortfolioApp::new(initial)))
        }),
    )
}
