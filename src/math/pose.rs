use glam::{Mat4, Vec3};

use super::convert::{fast_inverse_rigid, mat34_to_mat4, Mat34};

/// Position and orientation of a tracked object in world space.
///
/// Column layout follows the runtime's convention: X = right, Y = up,
/// Z = back (the device looks along `-Z`), W = position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose(Mat4);

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Pose at the origin looking down `-Z`.
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    /// Wrap a column-major object-to-world matrix.
    #[must_use]
    pub fn from_mat4(matrix: Mat4) -> Self {
        Self(matrix)
    }

    /// Build a pose from a runtime 3x4 device-to-world matrix.
    #[must_use]
    pub fn from_mat34(matrix: &Mat34) -> Self {
        Self(mat34_to_mat4(matrix))
    }

    /// Object-to-world matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    /// World-to-object matrix (rigid inverse).
    #[must_use]
    pub fn inverse_rigid(&self) -> Mat4 {
        fast_inverse_rigid(self.0)
    }

    /// World-space position.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.0.w_axis.truncate()
    }

    /// Local +X axis in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.0.x_axis.truncate()
    }

    /// Local +Y axis in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.0.y_axis.truncate()
    }

    /// Local +Z axis in world space (points away from where the device
    /// looks).
    #[must_use]
    pub fn back(&self) -> Vec3 {
        self.0.z_axis.truncate()
    }

    /// Pointing ray: from the device position along its `-Z` axis.
    #[must_use]
    pub fn laser_ray(&self) -> Ray {
        Ray::new(self.translation(), -self.back())
    }
}

/// A half-line in world space.
///
/// The direction is kept as supplied; consumers that need unit length
/// normalize it themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction of travel.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from an origin and a direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    #[test]
    fn identity_pose_shoots_down_negative_z() {
        let ray = Pose::IDENTITY.laser_ray();
        assert_eq!(ray.origin, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::NEG_Z);
    }

    #[test]
    fn laser_ray_follows_rotation_and_translation() {
        let pose = Pose::from_mat4(Mat4::from_rotation_translation(
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Vec3::new(1.0, 2.0, 3.0),
        ));
        let ray = pose.laser_ray();
        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        // Rotating -Z by +90° about Y yields -X.
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_X, 1e-6));
    }

    #[test]
    fn ray_at_scales_direction() {
        let ray = Ray::new(Vec3::ONE, Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(ray.at(0.5), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn inverse_rigid_maps_position_to_origin() {
        let pose = Pose::from_mat4(Mat4::from_translation(Vec3::new(
            0.0, 1.0, 0.0,
        )));
        let local = pose.inverse_rigid().transform_point3(pose.translation());
        assert!(local.abs_diff_eq(Vec3::ZERO, 1e-6));
    }
}
