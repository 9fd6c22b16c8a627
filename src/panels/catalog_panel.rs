use eframe::egui;

use super::{ACCENT, menu_button};
use crate::app::{AppAction, Navigation};

pub fn catalog_panel(nav: &Navigation, ctx: &egui::Context) -> Vec<AppAction> {
    let mut actions = Vec::new();
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("My Sketches").size(32.0).strong().color(ACCENT));
            });
            ui.add_space(8.0);

            if nav.rows.is_empty() {
                ui.label("No saved sketches yet.");
            }

            for (id, summary) in &nav.rows {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(&summary.title).heading());
                    ui.label(format!("Points: {}", summary.point_count));
                    if let Some((x, y)) = summary.last_point {
                        ui.small(format!("Last point: ({}, {})", x, y));
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            actions.push(AppAction::Edit(*id));
                        }
                        if ui.button(egui::RichText::new("Delete").color(ACCENT)).clicked() {
                            actions.push(AppAction::Delete(*id));
                        }
                    });
                });
            }

            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                if menu_button(ui, "HOME").clicked() {
                    actions.push(AppAction::GoHome);
                }
            });
        });
    });
    actions
}
