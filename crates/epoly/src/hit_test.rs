//! Point-in-polygon hit testing.

use emath::{Pos2, Rect};

use crate::Polygon;

/// Even-odd (crossing number) containment test over an ordered outline.
///
/// Walks every edge and toggles a flag each time a horizontal ray from `p`
/// crosses one; an odd number of crossings means inside. The outline does
/// not need to be convex: unlike the triangle fan, this is exact for any
/// simple polygon, and it observes the same point order the mesh was built
/// from. Points exactly on an edge resolve according to the `<=`
/// comparisons below; do not "fix" the tie-break, callers rely on it
/// matching the rendered outline.
///
/// Fewer than three points never contain anything.
pub fn contains_point(points: &[Pos2], p: Pos2) -> bool {
    crate::epoly_assert!(p.is_finite());

    if points.len() < 3 {
        return false;
    }

    let mut i0 = points.len() - 1;
    let mut yflag0 = p.y <= points[i0].y;
    let mut inside = false;

    for i1 in 0..points.len() {
        let yflag1 = p.y <= points[i1].y;
        if yflag0 != yflag1 {
            let cross = (p.x - points[i0].x) * (points[i1].y - points[i0].y)
                - (points[i1].x - points[i0].x) * (p.y - points[i0].y);
            if (cross <= 0.0) == yflag1 {
                inside = !inside;
            }
        }
        i0 = i1;
        yflag0 = yflag1;
    }

    inside
}

/// Pointer query against an outline, with the outer-bounds convention:
///
/// * `local_point` is the pointer position already transformed into the
///   outline's local space; `None` means the host's transform failed, and
///   the query reports no hit without running the test.
/// * Points outside `rect` pass through, independent of containment.
/// * Only points inside `rect` run the precise polygon test.
///
/// Producing `local_point` (e.g. via an [`emath::RectTransform`]) is the
/// caller's job.
pub fn hit_test(polygon: &Polygon, rect: Rect, local_point: Option<Pos2>) -> bool {
    let Some(p) = local_point else {
        return false;
    };
    if !rect.contains(p) {
        return false;
    }
    contains_point(polygon.points(), p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emath::pos2;

    fn square() -> Vec<Pos2> {
        vec![
            pos2(0.0, 0.0),
            pos2(10.0, 0.0),
            pos2(10.0, 10.0),
            pos2(0.0, 10.0),
        ]
    }

    #[test]
    fn square_contains_its_center() {
        assert!(contains_point(&square(), pos2(5.0, 5.0)));
        assert!(!contains_point(&square(), pos2(15.0, 5.0)));
        assert!(!contains_point(&square(), pos2(-1.0, 5.0)));
        assert!(!contains_point(&square(), pos2(5.0, 11.0)));
    }

    #[test]
    fn concave_outline_is_tested_exactly() {
        // An L-shape: the notch at the top right is outside.
        let points = vec![
            pos2(0.0, 0.0),
            pos2(4.0, 0.0),
            pos2(4.0, 2.0),
            pos2(2.0, 2.0),
            pos2(2.0, 4.0),
            pos2(0.0, 4.0),
        ];
        assert!(contains_point(&points, pos2(1.0, 1.0)));
        assert!(contains_point(&points, pos2(3.0, 1.0)));
        assert!(contains_point(&points, pos2(1.0, 3.0)));
        assert!(!contains_point(&points, pos2(3.0, 3.0)));
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let mut reversed = square();
        reversed.reverse();
        assert!(contains_point(&reversed, pos2(5.0, 5.0)));
        assert!(!contains_point(&reversed, pos2(15.0, 5.0)));
    }

    #[test]
    fn too_few_points_never_hit() {
        assert!(!contains_point(&[], pos2(0.0, 0.0)));
        assert!(!contains_point(
            &[pos2(0.0, 0.0), pos2(10.0, 0.0)],
            pos2(5.0, 0.0)
        ));
    }

    #[test]
    fn hit_test_applies_the_rect_gate() {
        let polygon = Polygon::new(square());
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0));

        assert!(hit_test(&polygon, rect, Some(pos2(5.0, 5.0))));
        assert!(!hit_test(&polygon, rect, Some(pos2(15.0, 5.0))));
        assert!(!hit_test(&polygon, rect, None));

        // Inside the rect but outside the outline: no hit either.
        let triangle = Polygon::new(vec![pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(0.0, 10.0)]);
        assert!(!hit_test(&triangle, rect, Some(pos2(9.0, 9.0))));
        assert!(hit_test(&triangle, rect, Some(pos2(2.0, 2.0))));
    }
}
