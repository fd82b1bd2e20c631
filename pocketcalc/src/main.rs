//! PocketCalc - a four-function integer calculator
//!
//! All arithmetic lives in the pocketcalc-engine crate; this binary is the
//! button grid and display around it.

mod app;

use app::PocketCalcApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([260.0, 330.0])
            .with_resizable(false)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(|cc| Box::new(PocketCalcApp::new(cc))),
    )
}
