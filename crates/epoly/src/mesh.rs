use ecolor::Color32;
use emath::{Pos2, Rect};

/// The 2D vertex type.
///
/// Should be friendly to send to GPU as is.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vertex {
    /// Position in the outline's local coordinate space.
    pub pos: Pos2, // 64 bit

    /// Normalized texture coordinates.
    /// (0, 0) is the top left corner of the texture.
    /// (1, 1) is the bottom right corner of the texture.
    pub uv: Pos2, // 64 bit

    /// Flat tint; every vertex of one rebuild carries the same value.
    pub color: Color32, // 32 bit
}

/// Where [`crate::rebuild_mesh`] writes its output.
///
/// Call order is significant: first [`clear`](Self::clear), then every
/// vertex in emission order, then triangles referencing those emission
/// indices. Implement this for your renderer's vertex buffer to skip the
/// intermediate [`Mesh`].
pub trait MeshSink {
    /// Drop all previously emitted vertices and triangles.
    fn clear(&mut self);

    /// Append one vertex. Emission order defines the triangle indices.
    fn add_vertex(&mut self, pos: Pos2, color: Color32, uv: Pos2);

    /// Append one triangle of previously emitted vertex indices.
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);
}

/// Textured triangles in two dimensions: the reference [`MeshSink`].
///
/// Which texture the triangles bind to is the host renderer's concern;
/// the mesh itself only carries geometry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Mesh {
    /// Draw as triangles (i.e. the length is always multiple of three).
    pub indices: Vec<u32>,

    /// The vertex data indexed by `indices`.
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    /// Restore to default state, but without freeing memory.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.vertices.clear();
    }

    pub fn bytes_used(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.vertices.len() * std::mem::size_of::<Vertex>()
            + self.indices.len() * std::mem::size_of::<u32>()
    }

    /// Are all indices within the bounds of the contained vertices?
    pub fn is_valid(&self) -> bool {
        if let Ok(n) = u32::try_from(self.vertices.len()) {
            self.indices.iter().all(|&i| i < n)
        } else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() && self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Calculate a bounding rectangle.
    pub fn calc_bounds(&self) -> Rect {
        let mut bounds = Rect::NOTHING;
        for v in &self.vertices {
            bounds.extend_with(v.pos);
        }
        bounds
    }

    /// Make room for this many additional triangles (will reserve 3x as many indices).
    /// See also `reserve_vertices`.
    #[inline(always)]
    pub fn reserve_triangles(&mut self, additional_triangles: usize) {
        self.indices.reserve(3 * additional_triangles);
    }

    /// Make room for this many additional vertices.
    /// See also `reserve_triangles`.
    #[inline(always)]
    pub fn reserve_vertices(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }
}

impl MeshSink for Mesh {
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline(always)]
    fn add_vertex(&mut self, pos: Pos2, color: Color32, uv: Pos2) {
        self.vertices.push(Vertex { pos, uv, color });
    }

    #[inline(always)]
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        crate::epoly_assert!((i0 as usize) < self.vertices.len());
        crate::epoly_assert!((i1 as usize) < self.vertices.len());
        crate::epoly_assert!((i2 as usize) < self.vertices.len());
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }
}
