use eframe::egui;

use super::{ACCENT, menu_button};
use crate::app::AppAction;

pub fn home_panel(ctx: &egui::Context) -> Vec<AppAction> {
    let mut actions = Vec::new();
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);
            ui.label(egui::RichText::new("Knob Sketch").size(48.0).strong().color(ACCENT));
            ui.add_space(40.0);

            if menu_button(ui, "NEW SKETCH").clicked() {
                actions.push(AppAction::NewSketch);
            }
            ui.add_space(30.0);
            if menu_button(ui, "MY SKETCHES").clicked() {
                actions.push(AppAction::OpenCatalog);
            }
        });
    });
    actions
}
