mod catalog_panel;
mod home_panel;
mod sketch_panel;

pub use catalog_panel::catalog_panel;
pub use home_panel::home_panel;
pub use sketch_panel::sketch_panel;

use eframe::egui;

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

/// Big rounded menu button used on the home and catalog screens
pub(crate) fn menu_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    let text = egui::RichText::new(label)
        .size(20.0)
        .strong()
        .color(egui::Color32::WHITE);
    ui.add(
        egui::Button::new(text)
            .fill(ACCENT)
            .rounding(15.0)
            .min_size(egui::vec2(220.0, 50.0)),
    )
}
