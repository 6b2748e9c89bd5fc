use emath::{Rect, Vec2};

/// How a bound image maps onto the polygon's bounding rectangle.
///
/// This mirrors what a sprite-style asset knows about itself: the pixel size
/// of its backing texture, the sub-rectangle the image occupies in the
/// outline's rect-space, and, when the image has been packed into a shared
/// texture atlas, the region it occupies inside that texture.
///
/// When no `ImageFill` is bound the outline renders as a plain tinted fill
/// and UVs span the bounding rectangle instead.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ImageFill {
    /// Pixel dimensions of the backing texture.
    pub texture_size: Vec2,

    /// The sub-rectangle the image occupies in rect-space.
    ///
    /// The image may render at a different apparent size than the outline's
    /// bounding rect; only the size takes part in UV mapping.
    pub image_rect: Rect,

    /// Where the image sits inside a shared texture atlas.
    ///
    /// `None` means the image is not packed and occupies the whole texture.
    pub atlas_rect: Option<Rect>,
}

impl ImageFill {
    /// An image that occupies its whole texture.
    pub fn new(texture_size: Vec2, image_rect: Rect) -> Self {
        Self {
            texture_size,
            image_rect,
            atlas_rect: None,
        }
    }

    /// An image packed into a shared atlas texture at `atlas_rect`.
    pub fn packed(texture_size: Vec2, image_rect: Rect, atlas_rect: Rect) -> Self {
        Self {
            texture_size,
            image_rect,
            atlas_rect: Some(atlas_rect),
        }
    }

    #[inline]
    pub fn is_packed(&self) -> bool {
        self.atlas_rect.is_some()
    }
}
