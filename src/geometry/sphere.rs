use log::{error, trace};

use crate::{
    error::{Error, Result},
    ray::RayLike,
    vector::Vector3,
};

use super::Hit;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
}

impl Sphere {
    pub const DEFAULT_CENTER: Vector3 = Vector3::ZERO;
    pub const DEFAULT_RADIUS: f64 = 1.0;

    /// Creates a sphere without validating its fields. The radius is expected
    /// to be positive.
    pub fn new(center: Vector3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn try_new(center: Vector3, radius: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(Error::InvalidCenter(center));
        }
        if !radius.is_finite() {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Self::new(center, radius))
    }

    /// Like [`Sphere::try_new`], but replaces each invalid field with its
    /// default (origin, radius 1) and logs the substitution.
    pub fn new_or_default(center: Vector3, radius: f64) -> Self {
        let center = if center.is_finite() {
            center
        } else {
            error!(
                "{}, using {}",
                Error::InvalidCenter(center),
                Self::DEFAULT_CENTER
            );
            Self::DEFAULT_CENTER
        };
        let radius = if radius.is_finite() {
            radius
        } else {
            error!(
                "{}, using {}",
                Error::InvalidRadius(radius),
                Self::DEFAULT_RADIUS
            );
            Self::DEFAULT_RADIUS
        };
        Self::new(center, radius)
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Intersects `ray` with the sphere, reporting the nearer of the two roots.
    ///
    /// Only the near root is considered: if it lies behind the ray origin the
    /// result is a miss even when the far root is in front. In particular a ray
    /// starting inside the sphere never hits.
    ///
    /// The ray direction must be non-zero.
    pub fn raycast<R: RayLike + ?Sized>(&self, ray: &R) -> Option<Hit> {
        let origin = ray.origin();
        let direction = ray.direction();

        // |oc + t * direction|^2 = radius^2
        let oc = origin - self.center;
        let a = direction.dot(direction);
        let b = 2.0 * oc.dot(direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t < 0.0 {
            trace!("near root {t} lies behind ray origin {origin}");
            return None;
        }

        let point = origin + direction * t;
        let normal = (point - self.center).normalized();

        Some(Hit {
            point,
            normal,
            distance: t,
        })
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CENTER, Self::DEFAULT_RADIUS)
    }
}
