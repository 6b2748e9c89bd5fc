//! Converts a polygon outline into textured triangles.

use ecolor::Color32;
use emath::{Rect, Vec2};

use crate::{map_uv, ImageFill, MeshSink, Polygon};

/// Rebuild the full mesh for `polygon` into `out`.
///
/// The sink is always cleared first: this is an idempotent full rebuild,
/// never an incremental patch. One vertex is emitted per outline point, in
/// outline order, carrying the flat `tint` and a UV from [`map_uv`]; then
/// the outline is filled with a triangle fan anchored at the first point:
/// `n - 2` triangles of the form `(0, i - 1, i)`.
///
/// `rect` and `pivot` (normalized, 0..1 per axis) come from the host's
/// layout system and should be re-queried for every rebuild. Fewer than
/// three points emit nothing (a hidden outline, not an error). Deciding
/// *when* to rebuild (point edits, tint changes, image changes) is the
/// caller's job; compare [`Polygon::version`] tokens.
///
/// The fan is only correct for outlines that are convex or star-shaped as
/// seen from the first point; concave or self-intersecting outlines may
/// produce overlapping or inverted triangles.
pub fn rebuild_mesh(
    polygon: &Polygon,
    rect: Rect,
    pivot: Vec2,
    image: Option<&ImageFill>,
    tint: Color32,
    out: &mut impl MeshSink,
) {
    out.clear();

    let points = polygon.points();
    let n = points.len();
    if n < 3 {
        return;
    }

    let pivot_offset = pivot * rect.size();
    for &p in points {
        out.add_vertex(p, tint, map_uv(p, rect, pivot_offset, image));
    }
    for i in 2..n as u32 {
        out.add_triangle(0, i - 1, i);
    }
}
