//! Pose math shared by every VR subsystem.
//!
//! The runtime reports transforms as row-major 3x4 / 4x4 arrays; the rest
//! of the crate works in column-major [`glam::Mat4`]. All conversions
//! between the two conventions live in [`convert`], so nothing else in the
//! crate indexes raw runtime matrices.

/// Conversions between runtime row-major matrices and `glam` matrices.
pub mod convert;
/// Tracked-object poses and rays.
pub mod pose;
/// Off-axis eye projection from raw tangent half-angles.
pub mod projection;

pub use convert::{
    fast_inverse_mat34, fast_inverse_rigid, mat34_to_mat4, mat44_to_mat4,
    mat4_to_mat34, Mat34, Mat44,
};
pub use pose::{Pose, Ray};
pub use projection::{projection_from_raw, RawProjection};
