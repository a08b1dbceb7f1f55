use glam::{Mat4, Vec3};

use crate::math::Ray;

/// `cos(100°)`: rays meeting the panel normal at a shallower angle than
/// this are treated as grazing or coming from behind.
pub const COS_ANGLE_THRESHOLD: f32 = -0.173_648_18;

/// Placement and size of a flat panel in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Orientation: columns are right, up, back-normal and pivot.
    pub matrix: Mat4,
    /// Stand-off of the panel plane from the pivot along `-normal`.
    pub distance: f32,
    /// Half the panel width in world units.
    pub half_width: f32,
    /// Half the panel height in world units.
    pub half_height: f32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Where a ray landed on a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelHit {
    /// Column, `0..width`, left to right.
    pub x: i32,
    /// Row, `0..height`, bottom to top.
    pub y: i32,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

impl PanelFrame {
    /// Whether the frame has a usable size.
    #[must_use]
    pub fn is_sized(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.half_width > f32::EPSILON
            && self.half_height > f32::EPSILON
    }

    /// Intersect `ray` with the panel.
    ///
    /// Returns `None` for unsized panels, degenerate rays, rays that hit
    /// at a grazing angle or from behind, panels behind the ray origin,
    /// and hits outside `[0, width) x [0, height)`.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<PanelHit> {
        if !self.is_sized() {
            return None;
        }
        let direction = ray.direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }

        let right = self.matrix.x_axis.truncate();
        let up = self.matrix.y_axis.truncate();
        let normal = self.matrix.z_axis.truncate();
        let pivot = self.matrix.w_axis.truncate();

        let cos_angle = direction.dot(normal);
        if cos_angle.is_nan() || cos_angle > COS_ANGLE_THRESHOLD {
            return None;
        }

        let t = -((ray.origin - pivot).dot(normal) + self.distance)
            / cos_angle;
        if t < 0.0 {
            return None;
        }

        let local = ray.origin + direction * t - pivot;
        let raw_x = local.dot(right);
        let raw_y = local.dot(up);

        let x = to_pixel(raw_x, self.half_width, self.width)?;
        let y = to_pixel(raw_y, self.half_height, self.height)?;
        Some(PanelHit { x, y, distance: t })
    }
}

/// Map a raw panel coordinate in `[-half, half)` to a pixel in
/// `[0, size)`.
fn to_pixel(raw: f32, half: f32, size: u32) -> Option<i32> {
    let size = size as f32;
    let pixel = ((raw / half + 1.0) * 0.5 * size).floor();
    (pixel >= 0.0 && pixel < size).then_some(pixel as i32)
}

/// Free-function form of [`PanelFrame::intersect`].
#[must_use]
pub fn intersect_panel(frame: &PanelFrame, ray: &Ray) -> Option<PanelHit> {
    frame.intersect(ray)
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    fn frame(matrix: Mat4) -> PanelFrame {
        PanelFrame {
            matrix,
            distance: 1.5,
            half_width: 0.4,
            half_height: 0.3,
            width: 640,
            height: 480,
        }
    }

    fn pivot_ray(matrix: Mat4) -> Ray {
        Ray::new(matrix.w_axis.truncate(), -matrix.z_axis.truncate())
    }

    #[test]
    fn center_ray_hits_center_pixel() {
        let f = frame(Mat4::IDENTITY);
        let hit = f.intersect(&pivot_ray(f.matrix)).unwrap();
        assert_eq!((hit.x, hit.y), (320, 240));
        assert!((hit.distance - 1.5).abs() < 1e-6);
    }

    #[test]
    fn center_ray_hits_center_for_rotated_panel() {
        let matrix = Mat4::from_rotation_translation(
            Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3),
            Vec3::new(0.3, 1.2, -0.4),
        );
        let f = frame(matrix);
        let hit = f.intersect(&pivot_ray(matrix)).unwrap();
        // Rounding in the rotated axes may land on a neighbouring pixel.
        assert!((hit.x - 320).abs() <= 1);
        assert!((hit.y - 240).abs() <= 1);
        assert!((hit.distance - 1.5).abs() < 1e-5);
    }

    #[test]
    fn grazing_ray_misses() {
        let f = frame(Mat4::IDENTITY);
        // 90° to the normal: cos = 0 > cos(100°).
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(f.intersect(&ray).is_none());
        // Just under 100° still misses.
        let angle = 99.0_f32.to_radians();
        let direction = Vec3::new(angle.sin(), 0.0, angle.cos());
        assert!(f.intersect(&Ray::new(Vec3::ZERO, direction)).is_none());
    }

    #[test]
    fn back_facing_ray_misses() {
        let f = frame(Mat4::IDENTITY);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        assert!(f.intersect(&ray).is_none());
    }

    #[test]
    fn panel_behind_origin_misses() {
        let f = frame(Mat4::IDENTITY);
        // Starts past the plane, still pointing along -normal.
        let ray = Ray::new(Vec3::new(0.0, 0.0, -2.5), Vec3::NEG_Z);
        assert!(f.intersect(&ray).is_none());
    }

    #[test]
    fn unnormalized_direction_gives_world_distance() {
        let f = frame(Mat4::IDENTITY);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));
        let hit = f.intersect(&ray).unwrap();
        assert!((hit.distance - 1.5).abs() < 1e-6);
    }

    #[test]
    fn pixel_origin_is_bottom_left() {
        let f = frame(Mat4::IDENTITY);
        let target = Vec3::new(-0.399, -0.299, -1.5);
        let hit = f.intersect(&Ray::new(Vec3::ZERO, target)).unwrap();
        assert_eq!((hit.x, hit.y), (0, 0));

        let target = Vec3::new(0.2001, 0.1501, -1.5);
        let hit = f.intersect(&Ray::new(Vec3::ZERO, target)).unwrap();
        assert_eq!((hit.x, hit.y), (480, 360));
    }

    #[test]
    fn upper_bound_is_exclusive() {
        let f = frame(Mat4::IDENTITY);
        let edge = Vec3::new(0.401, 0.0, -1.5);
        assert!(f.intersect(&Ray::new(Vec3::ZERO, edge)).is_none());
        let outside = Vec3::new(0.0, 0.31, -1.5);
        assert!(f.intersect(&Ray::new(Vec3::ZERO, outside)).is_none());
    }

    #[test]
    fn vertical_bound_uses_height() {
        // Wider than tall: a hit above the top edge must miss even though
        // it lies inside the horizontal extent.
        let f = frame(Mat4::IDENTITY);
        let target = Vec3::new(0.0, 0.35, -1.5);
        assert!(f.intersect(&Ray::new(Vec3::ZERO, target)).is_none());
    }

    #[test]
    fn unsized_panel_misses() {
        let mut f = frame(Mat4::IDENTITY);
        f.width = 0;
        assert!(f.intersect(&pivot_ray(f.matrix)).is_none());
        let mut f = frame(Mat4::IDENTITY);
        f.half_height = 0.0;
        assert!(f.intersect(&pivot_ray(f.matrix)).is_none());
    }

    #[test]
    fn zero_direction_misses() {
        let f = frame(Mat4::IDENTITY);
        assert!(intersect_panel(&f, &Ray::new(Vec3::ZERO, Vec3::ZERO))
            .is_none());
    }
}
