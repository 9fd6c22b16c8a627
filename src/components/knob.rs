use eframe::egui;
use crate::stroke::Axis;

/// A round knob that turns drag distance along its axis into a cursor delta
pub struct Knob {
    pub axis: Axis,
    rotation: f32,
}

impl Knob {
    pub fn new(axis: Axis) -> Self {
        Self { axis, rotation: 0.0 }
    }

    /// Draw the knob; returns the delta produced this frame, if any
    pub fn show(&mut self, ui: &mut egui::Ui, sensitivity: f32) -> Option<f32> {
        let size = egui::vec2(80.0, 80.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());

        let drag = response.drag_delta();
        let movement = match self.axis {
            Axis::Horizontal => drag.x,
            Axis::Vertical => drag.y,
        };
        let delta = (movement != 0.0).then(|| movement * sensitivity);
        if delta.is_some() {
            // Visual feedback only
            self.rotation += movement.to_radians() * 2.0;
        }

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width() / 2.0 - 3.0;
            let painter = ui.painter();
            painter.circle(
                center,
                radius,
                egui::Color32::from_gray(220),
                egui::Stroke::new(5.0, egui::Color32::RED),
            );
            let tip = center + egui::Vec2::angled(self.rotation) * (radius - 8.0);
            painter.line_segment([center, tip], egui::Stroke::new(3.0, egui::Color32::RED));
        }

        delta
    }
}
