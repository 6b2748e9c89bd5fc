use emath::{Pos2, Rect};

/// Token handed out by every [`Polygon`] mutation.
///
/// Strictly increases over the lifetime of one polygon. Callers that cache
/// a mesh remember the token from their last rebuild and compare it against
/// [`Polygon::version`] to decide whether a rebuild is due; the store never
/// decides that for them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolygonVersion(u64);

/// An ordered outline of 2D points in the owning widget's local space.
///
/// The point order defines the winding and is observed, unmodified, by both
/// triangulation and hit testing. Three or more points are needed to render
/// anything; fewer is a valid, hidden state, not an error.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Polygon {
    points: Vec<Pos2>,

    #[cfg_attr(feature = "serde", serde(skip))]
    version: PolygonVersion,
}

/// Inset factor of [`Polygon::from_rect_inset`], per side.
const INSET_FACTOR: f32 = 0.05;

impl Polygon {
    pub fn new(points: Vec<Pos2>) -> Self {
        Self {
            points,
            version: PolygonVersion::default(),
        }
    }

    /// The four corners of `rect`, in ring order.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect_ring(rect))
    }

    /// Like [`Self::from_rect`], but with each side inset by 5% of the rect
    /// size, leaving room to grab the corner handles in an editor.
    pub fn from_rect_inset(rect: Rect) -> Self {
        Self::new(rect_ring(inset(rect)))
    }

    #[inline]
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// The token of the last mutation. See [`PolygonVersion`].
    #[inline]
    pub fn version(&self) -> PolygonVersion {
        self.version
    }

    /// `true` when there are enough points to produce any triangles.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 3
    }

    /// Smallest rectangle containing all points.
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_points(&self.points)
    }

    /// Replace the whole outline.
    pub fn set_points(&mut self, points: Vec<Pos2>) -> PolygonVersion {
        self.points = points;
        self.warn_if_hidden();
        self.bump()
    }

    /// Reset to the four corners of `rect`.
    pub fn reset_to_rect(&mut self, rect: Rect) -> PolygonVersion {
        self.points = rect_ring(rect);
        self.bump()
    }

    /// Reset to the corners of `rect` inset by 5% per side.
    pub fn reset_to_rect_inset(&mut self, rect: Rect) -> PolygonVersion {
        self.points = rect_ring(inset(rect));
        self.bump()
    }

    /// Move one point.
    ///
    /// Panics if `i` is out of bounds.
    pub fn set_point(&mut self, i: usize, pos: Pos2) -> PolygonVersion {
        self.points[i] = pos;
        self.bump()
    }

    /// Insert a point before index `i`.
    ///
    /// Panics if `i > len`.
    pub fn insert_point(&mut self, i: usize, pos: Pos2) -> PolygonVersion {
        self.points.insert(i, pos);
        self.bump()
    }

    /// Insert a copy of point `i` right after it.
    ///
    /// Panics if `i` is out of bounds.
    pub fn duplicate_point(&mut self, i: usize) -> PolygonVersion {
        let p = self.points[i];
        self.points.insert(i + 1, p);
        self.bump()
    }

    /// Remove one point. Going below three points is allowed; the outline
    /// simply stops rendering.
    ///
    /// Panics if `i` is out of bounds.
    pub fn remove_point(&mut self, i: usize) -> PolygonVersion {
        self.points.remove(i);
        self.warn_if_hidden();
        self.bump()
    }

    fn warn_if_hidden(&self) {
        if !self.is_renderable() {
            log::warn!(
                "polygon outline has {} point(s); at least three are required to render",
                self.points.len()
            );
        }
    }

    fn bump(&mut self) -> PolygonVersion {
        self.version.0 += 1;
        self.version
    }
}

fn rect_ring(rect: Rect) -> Vec<Pos2> {
    vec![
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
}

fn inset(rect: Rect) -> Rect {
    rect.shrink2(INSET_FACTOR * rect.size())
}
