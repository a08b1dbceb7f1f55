use glam::{Mat3, Mat4, Vec4};

/// Row-major 3x4 affine matrix as delivered by the VR runtime.
///
/// The first three columns hold the rotation, the fourth the translation.
pub type Mat34 = [[f32; 4]; 3];

/// Row-major 4x4 matrix as delivered by the VR runtime.
pub type Mat44 = [[f32; 4]; 4];

/// Convert a runtime 3x4 transform into a column-major `Mat4`.
#[must_use]
pub fn mat34_to_mat4(m: &Mat34) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(m[0][0], m[1][0], m[2][0], 0.0),
        Vec4::new(m[0][1], m[1][1], m[2][1], 0.0),
        Vec4::new(m[0][2], m[1][2], m[2][2], 0.0),
        Vec4::new(m[0][3], m[1][3], m[2][3], 1.0),
    )
}

/// Convert a runtime 4x4 matrix into a column-major `Mat4`.
#[must_use]
pub fn mat44_to_mat4(m: &Mat44) -> Mat4 {
    // `from_cols_array_2d` reads columns, so the row-major input lands
    // transposed.
    Mat4::from_cols_array_2d(m).transpose()
}

/// Convert an affine `Mat4` back into the runtime's 3x4 layout.
///
/// The projective row is dropped.
#[must_use]
pub fn mat4_to_mat34(m: Mat4) -> Mat34 {
    let rows = m.transpose().to_cols_array_2d();
    [rows[0], rows[1], rows[2]]
}

/// Invert a rigid (rotation + translation) runtime transform.
///
/// Transposes the rotation and rotates the negated translation, which is
/// exact for orthonormal rotations and much cheaper than a general inverse.
#[must_use]
pub fn fast_inverse_mat34(m: &Mat34) -> Mat4 {
    let translation_x =
        -(m[0][0] * m[0][3] + m[1][0] * m[1][3] + m[2][0] * m[2][3]);
    let translation_y =
        -(m[0][1] * m[0][3] + m[1][1] * m[1][3] + m[2][1] * m[2][3]);
    let translation_z =
        -(m[0][2] * m[0][3] + m[1][2] * m[1][3] + m[2][2] * m[2][3]);

    Mat4::from_cols(
        Vec4::new(m[0][0], m[0][1], m[0][2], 0.0),
        Vec4::new(m[1][0], m[1][1], m[1][2], 0.0),
        Vec4::new(m[2][0], m[2][1], m[2][2], 0.0),
        Vec4::new(translation_x, translation_y, translation_z, 1.0),
    )
}

/// Invert a rigid column-major transform.
#[must_use]
pub fn fast_inverse_rigid(m: Mat4) -> Mat4 {
    let rotation = Mat3::from_mat4(m).transpose();
    let translation = -(rotation * m.w_axis.truncate());
    Mat4::from_cols(
        rotation.x_axis.extend(0.0),
        rotation.y_axis.extend(0.0),
        rotation.z_axis.extend(0.0),
        translation.extend(1.0),
    )
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;

    fn sample_rigid() -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_euler(glam::EulerRot::YXZ, 0.7, -0.3, 0.2),
            Vec3::new(0.5, 1.6, -2.0),
        )
    }

    #[test]
    fn mat34_layout_places_translation_in_last_column() {
        let m: Mat34 = [
            [1.0, 0.0, 0.0, 3.0],
            [0.0, 1.0, 0.0, 4.0],
            [0.0, 0.0, 1.0, 5.0],
        ];
        let converted = mat34_to_mat4(&m);
        assert_eq!(converted.w_axis, Vec4::new(3.0, 4.0, 5.0, 1.0));
        assert_eq!(converted.x_axis, Vec4::X);
    }

    #[test]
    fn mat34_rotation_is_transposed_into_columns() {
        // Row-major 90° rotation about Z: x -> y.
        let m: Mat34 = [
            [0.0, -1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ];
        let converted = mat34_to_mat4(&m);
        let rotated = converted.transform_vector3(Vec3::X);
        assert!(rotated.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn mat4_to_mat34_is_inverse_of_mat34_to_mat4() {
        let original = sample_rigid();
        let back = mat34_to_mat4(&mat4_to_mat34(original));
        assert!(back.abs_diff_eq(original, 1e-6));
    }

    #[test]
    fn mat44_conversion_transposes() {
        let m: Mat44 = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        let converted = mat44_to_mat4(&m);
        // Row 0 of the input is the first component of every column.
        assert_eq!(converted.x_axis.x, 1.0);
        assert_eq!(converted.y_axis.x, 2.0);
        assert_eq!(converted.w_axis.x, 4.0);
        assert_eq!(converted.x_axis.w, 13.0);
    }

    #[test]
    fn fast_inverse_matches_general_inverse() {
        let rigid = sample_rigid();
        let fast = fast_inverse_mat34(&mat4_to_mat34(rigid));
        assert!(fast.abs_diff_eq(rigid.inverse(), 1e-5));
        assert!(fast_inverse_rigid(rigid).abs_diff_eq(rigid.inverse(), 1e-5));
    }

    #[test]
    fn fast_inverse_round_trips_to_identity() {
        let rigid = sample_rigid();
        let product = fast_inverse_rigid(rigid) * rigid;
        assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }
}
