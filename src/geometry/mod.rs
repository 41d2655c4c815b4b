use serde::Serialize;

pub use sphere::Sphere;

use crate::vector::Vector3;

mod sphere;

/// A ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point: Vector3,
    /// Unit outward normal at `point`.
    pub normal: Vector3,
    /// Ray parameter of `point`, in multiples of the ray direction's length.
    pub distance: f64,
}

/// Flat record form of a raycast: `hit` plus three fields that are either
/// all present (`hit == true`) or all absent.
///
/// Only constructible from an `Option<Hit>`, so the two states cannot mix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaycastResult {
    hit: bool,
    point: Option<Vector3>,
    normal: Option<Vector3>,
    distance: Option<f64>,
}

impl RaycastResult {
    pub const MISS: Self = Self {
        hit: false,
        point: None,
        normal: None,
        distance: None,
    };

    pub fn hit(&self) -> bool {
        self.hit
    }

    pub fn point(&self) -> Option<Vector3> {
        self.point
    }

    pub fn normal(&self) -> Option<Vector3> {
        self.normal
    }

    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    pub fn into_hit(self) -> Option<Hit> {
        match (self.point, self.normal, self.distance) {
            (Some(point), Some(normal), Some(distance)) => Some(Hit {
                point,
                normal,
                distance,
            }),
            _ => None,
        }
    }
}

impl From<Option<Hit>> for RaycastResult {
    fn from(hit: Option<Hit>) -> Self {
        match hit {
            Some(Hit {
                point,
                normal,
                distance,
            }) => Self {
                hit: true,
                point: Some(point),
                normal: Some(normal),
                distance: Some(distance),
            },
            None => Self::MISS,
        }
    }
}

impl From<Hit> for RaycastResult {
    fn from(hit: Hit) -> Self {
        Some(hit).into()
    }
}
