use emath::{vec2, Pos2, Rect, Vec2};

use crate::ImageFill;

/// Rect dimensions at or below this are treated as degenerate: the division
/// by them is replaced with unit scale instead of blowing up.
const MIN_RECT_SIZE: f32 = 1e-4;

/// Texture dimensions of one pixel or less get the same unit-scale
/// treatment.
const MIN_TEXTURE_SIZE: f32 = 1.0;

#[inline]
fn inv_or_one(len: f32, min: f32) -> f32 {
    if len <= min {
        1.0
    } else {
        1.0 / len
    }
}

/// Map an outline point to a normalized texture coordinate.
///
/// `pivot_offset` converts the point from the outline's local space into
/// the rect's UV domain; layout systems that keep the rect origin at the
/// pivot supply `pivot * rect.size()`, which equals `-rect.min`.
///
/// Three paths:
/// * no image bound: the bounding rect is the whole UV domain;
/// * image bound: the point is first re-scaled by the ratio of image size
///   to rect size (the image may render at a different apparent size than
///   the outline's bounding rect), then divided by the texture size;
/// * image bound and atlas-packed: as above, with the offset additionally
///   shifted by the atlas region's minimum corner, so UVs land inside the
///   packed region rather than assuming the image owns the whole texture.
///
/// Every division shares the same degenerate-size policy: a rect dimension
/// at or below `1e-4`, or a texture dimension at or below one pixel, is
/// replaced with unit scale.
pub fn map_uv(point: Pos2, rect: Rect, pivot_offset: Vec2, image: Option<&ImageFill>) -> Pos2 {
    crate::epoly_assert!(point.is_finite());

    let inv_rect = vec2(
        inv_or_one(rect.width(), MIN_RECT_SIZE),
        inv_or_one(rect.height(), MIN_RECT_SIZE),
    );

    let Some(image) = image else {
        return ((point.to_vec2() + pivot_offset) * inv_rect).to_pos2();
    };

    let mut offset = pivot_offset;
    if let Some(atlas_rect) = image.atlas_rect {
        offset += atlas_rect.min.to_vec2();
    }

    let rect_to_image = image.image_rect.size() * inv_rect;
    let inv_texture = vec2(
        inv_or_one(image.texture_size.x, MIN_TEXTURE_SIZE),
        inv_or_one(image.texture_size.y, MIN_TEXTURE_SIZE),
    );

    let local = (point.to_vec2() + offset) * rect_to_image;
    (local * inv_texture).to_pos2()
}
