use eframe::egui;

use super::ACCENT;
use crate::app::{AppAction, Navigation};
use crate::stroke::Surface;

pub fn sketch_panel(nav: &mut Navigation, ctx: &egui::Context, sensitivity: f32) -> Vec<AppAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("sketch_toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button(egui::RichText::new("< Back").color(ACCENT)).clicked() {
                actions.push(AppAction::Back);
            }
            if ui.button("Clear").clicked() {
                actions.push(AppAction::Clear);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(egui::RichText::new("Save").color(ACCENT)).clicked() {
                    actions.push(AppAction::OpenSavePrompt);
                }
                if nav.session.is_dirty() {
                    ui.weak("unsaved");
                }
            });
        });
    });

    egui::TopBottomPanel::bottom("knobs").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let [horizontal, vertical] = &mut nav.knobs;
            if let Some(delta) = horizontal.show(ui, sensitivity) {
                actions.push(AppAction::Knob(horizontal.axis, delta));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(delta) = vertical.show(ui, sensitivity) {
                    actions.push(AppAction::Knob(vertical.axis, delta));
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);

        let surface = Surface::from_size(rect.size());
        if nav.session.surface() != Some(surface) {
            actions.push(AppAction::Resize(surface));
        }

        let line: Vec<egui::Pos2> = nav
            .session
            .points()
            .iter()
            .map(|p| rect.min + p.to_vec2())
            .collect();
        if line.len() > 1 {
            painter.add(egui::Shape::line(line, egui::Stroke::new(2.0, egui::Color32::BLACK)));
        }
        if let Some(cursor) = nav.session.cursor() {
            painter.circle_filled(rect.min + cursor.to_vec2(), 2.5, egui::Color32::BLACK);
        }
    });

    if let Some(prompt) = nav.save_prompt.as_mut() {
        egui::Window::new("Enter sketch title:")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let edit = ui.text_edit_singleline(&mut prompt.title);
                if let Some(error) = &prompt.error {
                    ui.colored_label(ACCENT, error);
                }
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        actions.push(AppAction::CancelSave);
                    }
                    let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Save").clicked() || enter {
                        actions.push(AppAction::Save);
                    }
                });
            });
    }

    if nav.confirm_exit {
        egui::Window::new("Leave without saving?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        actions.push(AppAction::CancelExit);
                    }
                    if ui.button(egui::RichText::new("Yes").color(ACCENT)).clicked() {
                        actions.push(AppAction::ConfirmDiscard);
                    }
                });
            });
    }

    actions
}
