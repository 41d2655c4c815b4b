use std::{
    fmt,
    ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64, f64)", into = "(f64, f64, f64)")]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn copy_from(&mut self, other: Vector3) -> &mut Self {
        *self = other;
        self
    }

    pub fn negate(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    pub fn negated(self) -> Self {
        -self
    }

    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scales `self` to unit length in place. A zero vector is left untouched.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length > 0.0 {
            *self = *self / length;
        }
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Sets `self` to the displacement from `from` to `to`.
    pub fn from_to(&mut self, from: Vector3, to: Vector3) -> &mut Self {
        *self = to - from;
        self
    }

    /// Sets the length of `self` to `new_scale` while keeping its direction.
    /// A zero vector has no direction and is left untouched.
    pub fn rescale(&mut self, new_scale: f64) -> &mut Self {
        let length = self.length();
        if length != 0.0 {
            *self = *self / length * new_scale;
        }
        self
    }

    pub fn rescaled(mut self, new_scale: f64) -> Self {
        self.rescale(new_scale);
        self
    }

    /// Angle between `v1` and `v2` in degrees, in `[0, 180]`.
    ///
    /// Returns `0.0` if either vector has zero length. The cosine is clamped to
    /// `[-1, 1]` before `acos` since rounding can push it slightly outside.
    pub fn angle(v1: Vector3, v2: Vector3) -> f64 {
        let lengths = v1.length() * v2.length();
        if lengths == 0.0 {
            return 0.0;
        }

        let cosine = (v1.dot(v2) / lengths).clamp(-1.0, 1.0);
        cosine.acos().to_degrees()
    }

    /// Projects `vector` onto the line spanned by `onto`.
    ///
    /// Returns [`Vector3::ZERO`] when `onto` has zero length.
    pub fn project(vector: Vector3, onto: Vector3) -> Self {
        let length_squared = onto.length_squared();
        if length_squared == 0.0 {
            return Self::ZERO;
        }

        onto * (vector.dot(onto) / length_squared)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(vec: Vector3) -> Self {
        [vec.x, vec.y, vec.z]
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(vec: Vector3) -> Self {
        (vec.x, vec.y, vec.z)
    }
}

impl Add<Vector3> for Vector3 {
    type Output = Self;

    fn add(self, rhs: Vector3) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign<Vector3> for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl Sub<Vector3> for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Vector3) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign<Vector3> for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = <Vector3 as Mul<Self>>::Output;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: Vector3 has 3 components but the index is {index}"),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
pub(crate) fn assert_close(actual: Vector3, expected: Vector3) {
    let epsilon = 1e-9;
    assert!(
        (actual - expected).length() < epsilon,
        "expected {expected}, got {actual}"
    );
}
