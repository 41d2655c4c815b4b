use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// Anything with an origin and a direction can be cast against geometry.
pub trait RayLike {
    fn origin(&self) -> Vector3;

    fn direction(&self) -> Vector3;

    fn at(&self, t: f64) -> Vector3 {
        self.origin() + self.direction() * t
    }
}

/// A half-line `origin + t * direction` for `t >= 0`.
///
/// The direction is stored as given and is not normalized, so `t` is measured
/// in multiples of its length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}

impl RayLike for Ray {
    fn origin(&self) -> Vector3 {
        self.origin
    }

    fn direction(&self) -> Vector3 {
        self.direction
    }

    fn at(&self, t: f64) -> Vector3 {
        Ray::at(self, t)
    }
}

impl<R: RayLike + ?Sized> RayLike for &R {
    fn origin(&self) -> Vector3 {
        (**self).origin()
    }

    fn direction(&self) -> Vector3 {
        (**self).direction()
    }
}

#[cfg(test)]
mod tests {
    use super::{Ray, RayLike};
    use crate::vector::Vector3;

    #[test]
    fn direction_is_not_normalized() {
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.direction.length(), 2.0);
        assert_eq!(ray.at(1.5), Vector3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn trait_at_matches_inherent_at() {
        let ray = Ray::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.5, 0.0));
        assert_eq!(RayLike::at(&ray, 2.0), ray.at(2.0));
        assert_eq!(RayLike::at(&&ray, 2.0), ray.at(2.0));
    }
}
