use egui::Pos2;

/// Grab distance for chart points, in screen pixels.
pub const HIT_RADIUS: f32 = 12.0;

/// Decimal places a drag edit is rounded to before being committed.
const DRAG_ROUND_DECIMALS: i32 = 3;

/// In-flight drag of a single chart point.
///
/// While a drag is active the pointer's y coordinate is previewed here and
/// drawn in place of the committed value; the session is only touched on
/// release. Idle → `begin` → `update_value`* → `take_commit`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointDrag {
    active: Option<(usize, f64)>,
}

impl PointDrag {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.map(|(index, _)| index)
    }

    /// Preview value for `index`, if that point is being dragged.
    pub fn preview(&self, index: usize) -> Option<f64> {
        match self.active {
            Some((i, value)) if i == index => Some(value),
            _ => None,
        }
    }

    pub fn begin(&mut self, index: usize, value: f64) {
        self.active = Some((index, value));
    }

    pub fn update_value(&mut self, value: f64) {
        if let Some((_, v)) = self.active.as_mut() {
            *v = value;
        }
    }

    /// Finish the drag, returning the (index, rounded value) to commit.
    pub fn take_commit(&mut self) -> Option<(usize, f64)> {
        self.active
            .take()
            .map(|(index, value)| (index, round_drag_value(value)))
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}

/// Round a dragged value the way the chart reports it.
pub fn round_drag_value(value: f64) -> f64 {
    let scale = 10f64.powi(DRAG_ROUND_DECIMALS);
    (value * scale).round() / scale
}

/// Index of the point nearest to `pointer` among `points` (screen
/// positions), provided it lies within `radius` pixels.
pub fn nearest_point_within(points: &[Pos2], pointer: Pos2, radius: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let d2 = (*p - pointer).length_sq();
        if best.map_or(true, |(_, bd2)| d2 < bd2) {
            best = Some((i, d2));
        }
    }
    best.filter(|&(_, d2)| d2 <= radius * radius).map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn drag_lifecycle_commits_on_release() {
        let mut drag = PointDrag::default();
        assert!(!drag.is_active());
        assert!(drag.take_commit().is_none());

        drag.begin(2, 5.0);
        assert_eq!(drag.active_index(), Some(2));
        assert_eq!(drag.preview(2), Some(5.0));
        assert_eq!(drag.preview(1), None);

        drag.update_value(7.4999);
        assert_eq!(drag.preview(2), Some(7.4999));

        assert_eq!(drag.take_commit(), Some((2, 7.5)));
        assert!(!drag.is_active());
        assert!(drag.take_commit().is_none());
    }

    #[test]
    fn cancel_discards_the_preview() {
        let mut drag = PointDrag::default();
        drag.begin(0, 1.0);
        drag.cancel();
        assert!(drag.take_commit().is_none());
    }

    #[test]
    fn commit_rounds_to_three_decimals() {
        assert_eq!(round_drag_value(1.23456), 1.235);
        assert_eq!(round_drag_value(-0.0004), -0.0);
        assert_eq!(round_drag_value(2.0), 2.0);
    }

    #[test]
    fn nearest_point_picks_closest_within_radius() {
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(20.0, 0.0)];
        assert_eq!(nearest_point_within(&points, pos2(9.0, 1.0), 5.0), Some(1));
        assert_eq!(nearest_point_within(&points, pos2(1.0, 1.0), 5.0), Some(0));
    }

    #[test]
    fn nothing_is_grabbed_outside_the_radius() {
        let points = [pos2(0.0, 0.0), pos2(100.0, 100.0)];
        assert_eq!(nearest_point_within(&points, pos2(50.0, 50.0), 5.0), None);
        assert_eq!(nearest_point_within(&[], pos2(0.0, 0.0), 5.0), None);
    }
}
