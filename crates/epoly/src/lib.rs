//! Polygonal textured images for GUI work.
//!
//! `epoly` turns an ordered outline of three or more points into a
//! fan-triangulated mesh with correct texture coordinates (including
//! images that live inside a shared texture atlas) and answers exact
//! point-in-polygon hit tests against the same outline.
//!
//! The crate is a set of pure capabilities a host rendering/event system
//! adapts to, with no inheritance from host types required:
//!
//! * [`Polygon`] owns the ordered point list and hands out a
//!   [`PolygonVersion`] token on every edit, so the *caller* decides when a
//!   change warrants a rebuild.
//! * [`rebuild_mesh`] emits vertices and triangles into any [`MeshSink`]
//!   (the bundled [`Mesh`] is the reference sink).
//! * [`contains_point`] / [`hit_test`] answer pointer queries against the
//!   same outline the mesh was built from.
//! * [`PolygonEditor`] turns picks and drags into outline edits for
//!   interactive tooling.
//!
//! ## Coordinate system
//! Outline points live in the owning widget's local coordinate space; the
//! bounding [`Rect`](emath::Rect) and normalized pivot come from the host's
//! layout system on every rebuild. Converting screen/world positions into
//! that local space (e.g. with an [`emath::RectTransform`]) is the caller's
//! job; the core never sees non-local coordinates.
//!
//! ## Limitations
//! Filling uses a triangle fan anchored at the first point, so outlines
//! must be convex, or at least star-shaped as seen from that point.
//! Concave or self-intersecting outlines may produce overlapping or
//! inverted triangles. Hit testing has no such restriction.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![allow(clippy::float_cmp)]
#![allow(clippy::manual_range_contains)]
#![forbid(unsafe_code)]

mod editor;
mod hit_test;
mod image;
mod mesh;
mod polygon;
mod tessellator;
mod uv;

pub use self::{
    editor::PolygonEditor,
    hit_test::{contains_point, hit_test},
    image::ImageFill,
    mesh::{Mesh, MeshSink, Vertex},
    polygon::{Polygon, PolygonVersion},
    tessellator::rebuild_mesh,
    uv::map_uv,
};

pub use ecolor::Color32;
pub use emath::{pos2, vec2, Pos2, Rect, Vec2};

pub use ecolor;
pub use emath;

// ----------------------------------------------------------------------------

/// An assert that is only active when `epoly` is compiled with the `extra_asserts` feature
/// or with the `extra_debug_asserts` feature in debug builds.
#[macro_export]
macro_rules! epoly_assert {
    ($($arg: tt)*) => {
        if cfg!(any(
            feature = "extra_asserts",
            all(feature = "extra_debug_asserts", debug_assertions),
        )) {
            assert!($($arg)*);
        }
    }
}
