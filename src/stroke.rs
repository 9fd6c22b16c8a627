use egui::{Pos2, Vec2};

/// Which knob produced a delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left knob, moves the cursor along x
    Horizontal,
    /// Right knob, moves the cursor along y
    Vertical,
}

/// Bounds of the drawable area, in canvas-local coordinates starting at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    size: Vec2,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_size(Vec2::new(width, height))
    }

    pub fn from_size(size: Vec2) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            size: Vec2::new(sanitize(size.x), sanitize(size.y)),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Starting point for a new draft
    pub fn center(&self) -> Pos2 {
        (self.size / 2.0).to_pos2()
    }

    pub fn bound(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.size.x,
            Axis::Vertical => self.size.y,
        }
    }

    pub fn clamp(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x.clamp(0.0, self.size.x), pos.y.clamp(0.0, self.size.y))
    }
}

/// The growing line traced by the knobs.
///
/// Deltas are added on both axes: a positive delta moves the cursor right
/// (x) or down (y). Every resulting coordinate is clamped into the surface,
/// so no input is ever rejected.
#[derive(Debug, Clone)]
pub struct StrokeAccumulator {
    points: Vec<Pos2>,
    cursor: Pos2,
    surface: Surface,
    dirty: bool,
}

impl StrokeAccumulator {
    /// Start a line at `initial`
    pub fn begin(surface: Surface, initial: Pos2) -> Self {
        let cursor = surface.clamp(initial);
        Self {
            points: vec![cursor],
            cursor,
            surface,
            dirty: false,
        }
    }

    /// Pick up an existing line, cursor on its last point
    pub fn resume(surface: Surface, points: Vec<Pos2>) -> Self {
        match points.last().copied() {
            Some(last) => Self {
                points,
                // The line may come from a larger canvas
                cursor: surface.clamp(last),
                surface,
                dirty: false,
            },
            None => Self::begin(surface, surface.center()),
        }
    }

    pub fn move_cursor(&mut self, axis: Axis, delta: f32) -> Pos2 {
        let delta = if delta.is_finite() { delta } else { 0.0 };
        let bound = self.surface.bound(axis);
        match axis {
            Axis::Horizontal => self.cursor.x = (self.cursor.x + delta).clamp(0.0, bound),
            Axis::Vertical => self.cursor.y = (self.cursor.y + delta).clamp(0.0, bound),
        }
        self.points.push(self.cursor);
        self.dirty = true;
        self.cursor
    }

    /// Drop the history, keeping only the cursor
    pub fn clear(&mut self) {
        self.points.clear();
        self.points.push(self.cursor);
        self.dirty = true;
    }

    /// Resize the bounds used for later moves; recorded points are kept as is
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
        self.cursor = surface.clamp(self.cursor);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn cursor(&self) -> Pos2 {
        self.cursor
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(720.0, 400.0)
    }

    #[test]
    fn test_begin_at_center() {
        let stroke = StrokeAccumulator::begin(surface(), surface().center());
        assert_eq!(stroke.points(), &[Pos2::new(360.0, 200.0)]);
        assert_eq!(stroke.cursor(), Pos2::new(360.0, 200.0));
        assert!(!stroke.is_dirty());
    }

    #[test]
    fn test_move_appends_and_marks_dirty() {
        let mut stroke = StrokeAccumulator::begin(surface(), surface().center());
        stroke.move_cursor(Axis::Horizontal, 50.0);
        stroke.move_cursor(Axis::Vertical, -20.0);
        assert_eq!(
            stroke.points(),
            &[
                Pos2::new(360.0, 200.0),
                Pos2::new(410.0, 200.0),
                Pos2::new(410.0, 180.0)
            ]
        );
        assert!(stroke.is_dirty());
    }

    #[test]
    fn test_move_is_clamped() {
        let mut stroke = StrokeAccumulator::begin(surface(), surface().center());
        for delta in [1e9, -1e9, f32::MAX, f32::MIN, f32::INFINITY, f32::NAN] {
            let x = stroke.move_cursor(Axis::Horizontal, delta).x;
            let y = stroke.move_cursor(Axis::Vertical, delta).y;
            assert!((0.0..=720.0).contains(&x));
            assert!((0.0..=400.0).contains(&y));
        }
        assert_eq!(stroke.move_cursor(Axis::Horizontal, 5000.0).x, 720.0);
        assert_eq!(stroke.move_cursor(Axis::Vertical, -5000.0).y, 0.0);
    }

    #[test]
    fn test_clear_keeps_cursor() {
        let mut stroke = StrokeAccumulator::begin(surface(), surface().center());
        stroke.move_cursor(Axis::Horizontal, 10.0);
        stroke.move_cursor(Axis::Vertical, 10.0);
        let before = stroke.cursor();

        stroke.clear();
        assert_eq!(stroke.points(), &[before]);
        assert_eq!(stroke.cursor(), before);
        assert!(stroke.is_dirty());
    }

    #[test]
    fn test_resume_uses_last_point() {
        let points = vec![Pos2::new(1.0, 2.0), Pos2::new(3.0, 4.0)];
        let stroke = StrokeAccumulator::resume(surface(), points.clone());
        assert_eq!(stroke.points(), points.as_slice());
        assert_eq!(stroke.cursor(), Pos2::new(3.0, 4.0));

        let empty = StrokeAccumulator::resume(surface(), Vec::new());
        assert_eq!(empty.points(), &[surface().center()]);
    }

    #[test]
    fn test_shrinking_surface_pulls_cursor_inside() {
        let mut stroke = StrokeAccumulator::begin(surface(), surface().center());
        stroke.move_cursor(Axis::Horizontal, 300.0);
        assert_eq!(stroke.cursor(), Pos2::new(660.0, 200.0));

        stroke.set_surface(Surface::new(400.0, 150.0));
        assert_eq!(stroke.cursor(), Pos2::new(400.0, 150.0));
        // Already recorded points stay where they were drawn
        assert_eq!(stroke.points().last(), Some(&Pos2::new(660.0, 200.0)));

        let p = stroke.move_cursor(Axis::Vertical, -1.0);
        assert_eq!(p, Pos2::new(400.0, 149.0));
        let p = stroke.move_cursor(Axis::Horizontal, -1.0);
        assert_eq!(p, Pos2::new(399.0, 149.0));
        for p in &stroke.points()[2..] {
            assert!(p.x <= 400.0 && p.y <= 150.0);
        }
    }

    #[test]
    fn test_resume_clamps_cursor_to_smaller_surface() {
        let points = vec![Pos2::new(10.0, 10.0), Pos2::new(700.0, 390.0)];
        let stroke = StrokeAccumulator::resume(Surface::new(360.0, 200.0), points.clone());
        assert_eq!(stroke.points(), points.as_slice());
        assert_eq!(stroke.cursor(), Pos2::new(360.0, 200.0));
    }

    #[test]
    fn test_degenerate_surface() {
        let surface = Surface::new(-10.0, f32::NAN);
        assert_eq!(surface.size(), Vec2::ZERO);
        let mut stroke = StrokeAccumulator::begin(surface, Pos2::new(5.0, 5.0));
        assert_eq!(stroke.cursor(), Pos2::ZERO);
        assert_eq!(stroke.move_cursor(Axis::Horizontal, 3.0), Pos2::ZERO);
    }
}
