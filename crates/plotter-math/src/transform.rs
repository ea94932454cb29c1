// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Transform construction: translation, axis rotations, scale, view and
//! projection matrices, plus named `multiply`/`transform`/`transpose`.
//!
//! Every builder returns a [`Mat4`] meant to be applied as `M * v` (see the
//! convention notes on [`Mat4`]). A shape's model matrix is
//! `translate(I, p) * rotate_z(a) * scale_xyz(s)`: scale first, translation
//! last.
//!
//! `look_at` and `perspective` are laid out the way the plotter hands them to
//! the GPU: the view matrix is transposed by its caller before use and the
//! projection stores its `-1` in row 2, column 3. Keep them paired with their
//! callers in `plotter-geom::camera`.

use crate::{Mat4, MathError, Vec3, Vec4, EPSILON};

/// `a * b` (row-by-column). `multiply(a, b) * v` applies `b` first.
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    a.multiply(b)
}

/// `m * v` with `v` as a column vector.
pub fn transform(m: &Mat4, v: &Vec4) -> Vec4 {
    m.transform(v)
}

/// Swaps rows and columns of `m`.
pub fn transpose(m: &Mat4) -> Mat4 {
    m.transpose()
}

/// Translates `base` by `v`.
///
/// Row 3 becomes `base[0]*v.x + base[1]*v.y + base[2]*v.z + base[3]` and the
/// result is then transposed, which moves the translation into the last
/// column. Pass an assembled matrix (usually [`Mat4::IDENTITY`]) as `base`;
/// `translate(&Mat4::IDENTITY, t) * (p, 1)` is `(p + t, 1)`.
///
/// # Examples
/// ```
/// use plotter_math::{translate, Mat4, Vec3, Vec4};
/// let t = translate(&Mat4::IDENTITY, Vec3::new(5.0, -3.0, 2.0));
/// let p = t * Vec4::new(2.0, 4.0, -1.0, 1.0);
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0, 1.0]);
/// ```
pub fn translate(base: &Mat4, v: Vec3) -> Mat4 {
    let mut out = *base;
    out[3] = base[0] * v.x() + base[1] * v.y() + base[2] * v.z() + base[3];
    out.transpose()
}

/// Rotation about the X axis by `angle` radians.
pub fn rotate_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::from_rows(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, c, s, 0.0),
        Vec4::new(0.0, -s, c, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

/// Rotation about the Y axis by `angle` radians.
pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::from_rows(
        Vec4::new(c, 0.0, -s, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(s, 0.0, c, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

/// Rotation about the Z axis by `angle` radians; positive angles turn +X
/// towards +Y (counter-clockwise in the plot plane).
pub fn rotate_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::from_rows(
        Vec4::new(c, -s, 0.0, 0.0),
        Vec4::new(s, c, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

/// Uniform scale on x, y, z; the homogeneous slot stays 1.
pub fn scale(factor: f32) -> Mat4 {
    scale_xyz(Vec3::splat(factor))
}

/// Per-axis scale on the diagonal; the homogeneous slot stays 1.
pub fn scale_xyz(factors: Vec3) -> Mat4 {
    Mat4::from_rows(
        Vec4::new(factors.x(), 0.0, 0.0, 0.0),
        Vec4::new(0.0, factors.y(), 0.0, 0.0),
        Vec4::new(0.0, 0.0, factors.z(), 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

/// Model matrix for a plot shape: `translate(I, position) * rotate_z(angle) * scale_xyz(scale)`.
pub fn model_matrix(position: Vec3, angle: f32, scale: Vec3) -> Mat4 {
    translate(&Mat4::IDENTITY, position) * rotate_z(angle) * scale_xyz(scale)
}

/// Right-handed view basis looking from `from` towards `to`.
///
/// Rows 0..3 hold right, true-up and forward; row 3 holds `-from` in x/y/z.
/// When forward is parallel to `up` the right vector normalises to zero and
/// the basis is singular; use [`try_look_at`] to reject that case.
pub fn look_at(from: Vec3, to: Vec3, up: Vec3) -> Mat4 {
    let f = (to - from).normalize();
    let r = f.cross(&up).normalize();
    let u = r.cross(&f);
    Mat4::from_rows(
        Vec4::from_xyz_w(r, 0.0),
        Vec4::from_xyz_w(u, 0.0),
        Vec4::from_xyz_w(f, 0.0),
        Vec4::from_xyz_w(-from, 1.0),
    )
}

/// [`look_at`] with `up = +Y`.
pub fn look_at_up_y(from: Vec3, to: Vec3) -> Mat4 {
    look_at(from, to, Vec3::UNIT_Y)
}

/// Checked [`look_at`].
pub fn try_look_at(from: Vec3, to: Vec3, up: Vec3) -> Result<Mat4, MathError> {
    if !(from.is_finite() && to.is_finite() && up.is_finite()) {
        return Err(MathError::NonFinite);
    }
    let forward = to - from;
    if forward.length() <= EPSILON || forward.normalize().cross(&up).length() <= EPSILON {
        return Err(MathError::DegenerateBasis);
    }
    Ok(look_at(from, to, up))
}

/// Perspective projection from a vertical field of view in radians.
///
/// Built from the half-height `top = tan(fov / 2) * z_near`, with
/// `right = top * aspect_ratio`. `z_far == z_near` divides by zero; use
/// [`try_perspective`] to reject it.
pub fn perspective(fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Mat4 {
    let top = (fov / 2.0).tan() * z_near;
    let bottom = -top;
    let right = top * aspect_ratio;
    let left = -right;

    let mut m = Mat4::ZERO;
    m[0][0] = (2.0 * z_near) / (right - left);
    m[1][1] = (2.0 * z_near) / (top - bottom);
    m[2][0] = (right + left) / (right - left);
    m[2][1] = (top + bottom) / (top - bottom);
    m[2][2] = -(z_far + z_near) / (z_far - z_near);
    m[2][3] = -1.0;
    m[3][2] = -(2.0 * z_far * z_near) / (z_far - z_near);
    m
}

/// Checked [`perspective`].
pub fn try_perspective(
    fov: f32,
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
) -> Result<Mat4, MathError> {
    if ![fov, aspect_ratio, z_near, z_far].iter().all(|v| v.is_finite()) {
        return Err(MathError::NonFinite);
    }
    if (z_far - z_near).abs() <= EPSILON {
        return Err(MathError::DegenerateDepthRange { z_near, z_far });
    }
    let top = (fov / 2.0).tan() * z_near;
    if top.abs() <= EPSILON || (top * aspect_ratio).abs() <= EPSILON {
        return Err(MathError::DegenerateFrustum {
            fov,
            aspect_ratio,
            z_near,
        });
    }
    Ok(perspective(fov, aspect_ratio, z_near, z_far))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_of_non_identity_base_combines_rows_then_transposes() {
        let base = scale(2.0);
        let m = translate(&base, Vec3::new(1.0, 2.0, 3.0));
        // row 3 was (2, 4, 6, 1) before the transpose
        assert_eq!(m.column(3), Vec4::new(2.0, 4.0, 6.0, 1.0));
        assert_eq!(m.at(0, 0), 2.0);
    }

    #[test]
    fn perspective_places_projection_terms() {
        let m = perspective(core::f32::consts::FRAC_PI_2, 1.0, 1.0, 3.0);
        assert!((m.at(0, 0) - 1.0).abs() < 1e-6);
        assert!((m.at(1, 1) - 1.0).abs() < 1e-6);
        assert_eq!(m.at(2, 3), -1.0);
        assert!((m.at(2, 2) + 2.0).abs() < 1e-6);
        assert!((m.at(3, 2) + 3.0).abs() < 1e-6);
        assert_eq!(m.at(3, 3), 0.0);
    }
}
