use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{is_equal, is_zero};

/// A vector in 3D space, doubling as a point. All geometry shares one f64
/// coordinate space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Instantiate a new Vector3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The unit vector along the x axis.
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The unit vector along the y axis.
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The unit vector along the z axis.
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Find the dot product between two Vector3s.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross two Vector3s.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: -self.x * other.z + self.z * other.x,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Find the magnitude of this Vector3.
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Normalize this Vector3 by dividing it by its own magnitude.
    ///
    /// Normalizing a zero vector is a construction-time bug, not a runtime
    /// condition, and panics.
    pub fn normalize(self) -> Self {
        assert!(!is_zero(self.magnitude()), "cannot normalize a zero vector");
        self / self.magnitude()
    }

    /// Whether every component vanishes within tolerance.
    pub fn is_zero(self) -> bool {
        is_zero(self.x) && is_zero(self.y) && is_zero(self.z)
    }

    /// Component-wise equality within tolerance.
    pub fn approx_eq(self, other: Self) -> bool {
        is_equal(self.x, other.x) && is_equal(self.y, other.y) && is_equal(self.z, other.z)
    }

    /// Solve `self = s * v` for the scalar `s`, if one exists.
    ///
    /// Each axis with a nonzero `v` component proposes a ratio; the first
    /// one fixes `s` and every later axis must agree. An axis where `v`
    /// vanishes requires `self` to vanish there too. When every component
    /// pair is 0/0 any scalar fits, and 0 is reported.
    pub fn get_scale(self, v: Self) -> Option<f64> {
        let mut scale = None;

        for (lhs, rhs) in [(self.x, v.x), (self.y, v.y), (self.z, v.z)] {
            match scale {
                Some(s) => {
                    if !is_equal(rhs * s, lhs) {
                        return None;
                    }
                }
                None if is_zero(rhs) => {
                    if !is_zero(lhs) {
                        return None;
                    }
                }
                None => scale = Some(lhs / rhs),
            }
        }

        Some(scale.unwrap_or(0.0))
    }

    /// Slope of this direction against the horizontal (x, y) plane.
    pub fn horizontal_gradient(self) -> f64 {
        self.z / (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotate this vector by `radians` about an axis orthogonal to it.
    ///
    /// The axis must actually be orthogonal; the rotation decomposes into
    /// a component along the original vector and one along
    /// `self x axis`, which is only a rotation under that precondition.
    pub fn rotate(self, radians: f64, axis: Self) -> Self {
        assert!(is_zero(self.dot(axis)), "rotation axis must be orthogonal");

        let orthonormal = axis.normalize();
        let in_plane_normal = self.cross(orthonormal);
        self * radians.cos() + in_plane_normal * radians.sin()
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
