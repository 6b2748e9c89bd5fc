//! Framework-free state for interactively editing a polygon outline.
//!
//! The host draws the handles and routes pointer input; this type keeps the
//! selection and turns picks, drags and button presses into [`Polygon`]
//! edits. All mutations go through the [`Polygon`] API, so version tokens
//! stay correct and the host's dirty-flag / undo machinery keeps working.

use emath::Pos2;

use crate::{Polygon, PolygonVersion};

/// Interactive editing state for a [`Polygon`] outline.
#[derive(Clone, Debug)]
pub struct PolygonEditor {
    /// Pick distance for grabbing a point handle, in local units.
    pub handle_radius: f32,

    selected: Option<usize>,
}

impl Default for PolygonEditor {
    fn default() -> Self {
        Self {
            handle_radius: 8.0,
            selected: None,
        }
    }
}

impl PolygonEditor {
    pub fn new(handle_radius: f32) -> Self {
        Self {
            handle_radius,
            ..Default::default()
        }
    }

    /// The currently selected point, if any.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The closest outline point within [`Self::handle_radius`] of `pos`.
    pub fn pick(&self, polygon: &Polygon, pos: Pos2) -> Option<usize> {
        let mut best = None;
        let mut best_dist_sq = self.handle_radius * self.handle_radius;
        for (i, p) in polygon.points().iter().enumerate() {
            let dist_sq = p.distance_sq(pos);
            if dist_sq <= best_dist_sq {
                best = Some(i);
                best_dist_sq = dist_sq;
            }
        }
        best
    }

    /// Select whatever [`Self::pick`] finds at `pos` (or clear the
    /// selection) and return it.
    pub fn select_at(&mut self, polygon: &Polygon, pos: Pos2) -> Option<usize> {
        self.selected = self.pick(polygon, pos);
        self.selected
    }

    /// Drag the selected point to `pos`. No-op without a selection.
    pub fn drag_to(&mut self, polygon: &mut Polygon, pos: Pos2) -> Option<PolygonVersion> {
        let i = self.selected?;
        Some(polygon.set_point(i, pos))
    }

    /// Insert a copy of the selected point next to it, keeping the copy
    /// selected so a following drag moves it away from the original.
    pub fn duplicate_selected(&mut self, polygon: &mut Polygon) -> Option<PolygonVersion> {
        let i = self.selected?;
        let version = polygon.duplicate_point(i);
        self.selected = Some(i + 1);
        Some(version)
    }

    /// Remove the selected point and clear the selection. Shrinking the
    /// outline below three points is allowed; it just stops rendering.
    pub fn remove_selected(&mut self, polygon: &mut Polygon) -> Option<PolygonVersion> {
        let i = self.selected.take()?;
        Some(polygon.remove_point(i))
    }
}
