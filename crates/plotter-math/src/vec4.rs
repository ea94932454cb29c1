// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::{Vec2, Vec3};

/// Four-component vector: matrix rows, homogeneous points, and RGBA colors.
///
/// The mixed-arity constructors concatenate their arguments in parameter
/// order, so `from_x_yzw(1.0, Vec3::new(2.0, 3.0, 4.0))` is `(1, 2, 3, 4)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Creates a vector with every component set to `scalar`.
    pub const fn splat(scalar: f32) -> Self {
        Self::new(scalar, scalar, scalar, scalar)
    }

    /// `(x, yzw.x, yzw.y, yzw.z)`.
    pub const fn from_x_yzw(x: f32, yzw: Vec3) -> Self {
        Self::new(x, yzw.x(), yzw.y(), yzw.z())
    }

    /// `(xyz.x, xyz.y, xyz.z, w)`.
    pub const fn from_xyz_w(xyz: Vec3, w: f32) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    /// `(x, yz.x, yz.y, w)`.
    pub const fn from_x_yz_w(x: f32, yz: Vec2, w: f32) -> Self {
        Self::new(x, yz.x(), yz.y(), w)
    }

    /// `(xy.x, xy.y, z, w)`.
    pub const fn from_xy_z_w(xy: Vec2, z: f32, w: f32) -> Self {
        Self::new(xy.x(), xy.y(), z, w)
    }

    /// `(x, y, zw.x, zw.y)`.
    pub const fn from_xy_zw(x: f32, y: f32, zw: Vec2) -> Self {
        Self::new(x, y, zw.x(), zw.y())
    }

    /// X component (red when used as a color).
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component (green).
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component (blue).
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// W component (alpha).
    pub const fn w(&self) -> f32 {
        self.data[3]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Dot product; this is how a [`crate::Mat4`] row meets a column vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.data[idx]
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.data[idx]
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x() + rhs.x(),
            self.y() + rhs.y(),
            self.z() + rhs.z(),
            self.w() + rhs.w(),
        )
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x() * scalar,
            self.y() * scalar,
            self.z() * scalar,
            self.w() * scalar,
        )
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), -self.w())
    }
}
