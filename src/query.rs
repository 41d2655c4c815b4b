use std::path::Path;

use serde::Deserialize;
use spherecast::{Ray, Sphere, Vector3};

fn default_radius() -> f64 {
    Sphere::DEFAULT_RADIUS
}

#[derive(Deserialize)]
struct SphereDesc {
    #[serde(default)]
    center: Vector3,
    #[serde(default = "default_radius")]
    radius: f64,
}

/// A sphere and the rays to cast against it, as read from a RON file:
///
/// ```ron
/// (
///     sphere: (center: (0.0, 0.0, 0.0), radius: 1.0),
///     rays: [
///         (origin: (0.0, 0.0, -5.0), direction: (0.0, 0.0, 1.0)),
///     ],
/// )
/// ```
#[derive(Deserialize)]
pub struct Query {
    sphere: SphereDesc,
    #[serde(default)]
    pub rays: Vec<Ray>,
}

impl Query {
    pub fn from_file(file: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::parse(&std::fs::read_to_string(file)?)?)
    }

    pub fn parse(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }

    pub fn construct_sphere(&self) -> Sphere {
        Sphere::new_or_default(self.sphere.center, self.sphere.radius)
    }
}

#[cfg(test)]
mod tests {
    use spherecast::{Ray, Sphere, Vector3};

    use super::Query;

    #[test]
    fn parse_full_query() {
        let query = Query::parse(
            "(
                sphere: (center: (1.0, 2.0, 3.0), radius: 0.5),
                rays: [
                    (origin: (0.0, 0.0, -5.0), direction: (0.0, 0.0, 1.0)),
                    (origin: (0.0, 5.0, -5.0), direction: (0.0, 0.0, 1.0)),
                ],
            )",
        )
        .unwrap();

        assert_eq!(
            query.construct_sphere(),
            Sphere::new(Vector3::new(1.0, 2.0, 3.0), 0.5)
        );
        assert_eq!(
            query.rays,
            vec![
                Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::Z),
                Ray::new(Vector3::new(0.0, 5.0, -5.0), Vector3::Z),
            ]
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let query = Query::parse("(sphere: ())").unwrap();
        assert_eq!(query.construct_sphere(), Sphere::default());
        assert!(query.rays.is_empty());
    }

    #[test]
    fn non_finite_radius_falls_back() {
        let query = Query::parse("(sphere: (center: (0.0, 1.0, 0.0), radius: NaN), rays: [])").unwrap();
        assert_eq!(
            query.construct_sphere(),
            Sphere::new(Vector3::Y, Sphere::DEFAULT_RADIUS)
        );
    }

    #[test]
    fn demo_query() {
        let query = Query::parse(include_str!("../demos/unit_sphere.ron")).unwrap();
        let sphere = query.construct_sphere();
        let hits: Vec<bool> = query
            .rays
            .iter()
            .map(|ray| sphere.raycast(ray).is_some())
            .collect();
        assert_eq!(hits, [true, false, false, false]);
    }

    #[test]
    fn malformed_vector_is_rejected() {
        assert!(Query::parse("(sphere: (center: (0.0, 1.0)), rays: [])").is_err());
    }
}
