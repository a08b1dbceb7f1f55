use glam::{Mat4, Vec4};
use serde::{Deserialize, Serialize};

/// Tangents of the half-angles bounding an eye's view frustum.
///
/// Follows the runtime convention where `top` is negative and `bottom`
/// positive for a typical headset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawProjection {
    /// Tangent of the left half-angle (usually negative).
    pub left: f32,
    /// Tangent of the right half-angle.
    pub right: f32,
    /// Tangent of the top half-angle.
    pub top: f32,
    /// Tangent of the bottom half-angle.
    pub bottom: f32,
}

impl RawProjection {
    /// Symmetric frustum with the given horizontal and vertical tangents.
    #[must_use]
    pub fn symmetric(tan_x: f32, tan_y: f32) -> Self {
        Self {
            left: -tan_x,
            right: tan_x,
            top: -tan_y,
            bottom: tan_y,
        }
    }
}

/// Build an OpenGL-style (`[-1, 1]` depth) off-axis projection.
///
/// Returns `None` for a degenerate frustum (zero width, height or depth).
#[must_use]
pub fn projection_from_raw(
    raw: RawProjection,
    near: f32,
    far: f32,
) -> Option<Mat4> {
    let width = raw.right - raw.left;
    let height = raw.bottom - raw.top;
    let depth = far - near;
    if width.abs() <= f32::EPSILON
        || height.abs() <= f32::EPSILON
        || depth.abs() <= f32::EPSILON
    {
        return None;
    }

    let idx = 1.0 / width;
    let idy = 1.0 / height;
    let idz = 1.0 / depth;
    let sx = raw.right + raw.left;
    let sy = raw.bottom + raw.top;

    Some(Mat4::from_cols(
        Vec4::new(2.0 * idx, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * idy, 0.0, 0.0),
        Vec4::new(sx * idx, sy * idy, -(far + near) * idz, -1.0),
        Vec4::new(0.0, 0.0, -2.0 * far * near * idz, 0.0),
    ))
}
