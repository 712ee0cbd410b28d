use crate::math::{is_zero, Ray, Vector3};

/// A sphere. The constant term of its implicit equation is cached so the
/// intersection test does not recompute it per ray.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
    rhs: f64,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Self {
            center,
            radius,
            rhs: center.dot(center) - radius * radius,
        }
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Substitute the ray into the sphere equation and solve the quadratic
    /// `a k^2 + b k + c = 0`. A miss is a negative discriminant; otherwise
    /// the smaller (nearer) root is returned, negative or not; callers
    /// filter for `k >= 0`.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(ray.origin) - 2.0 * ray.direction.dot(self.center);
        let c = ray.origin.dot(ray.origin) - 2.0 * ray.origin.dot(self.center) + self.rhs;

        assert!(!is_zero(a), "degenerate ray direction");

        let disc_sqr = b * b - 4.0 * a * c;
        if disc_sqr < 0.0 {
            return None;
        }

        let disc = disc_sqr.sqrt();
        let k1 = (-b + disc) / (2.0 * a);
        let k2 = (-b - disc) / (2.0 * a);
        Some(k1.min(k2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_equal;

    #[test]
    fn ray_through_interior_reports_nearer_root() {
        let sphere = Sphere::new(Vector3::new(10.0, 0.0, 0.0), 2.0);
        let ray = Ray::between(Vector3::default(), Vector3::x_axis());

        // entry at x = 8, exit at x = 12; the nearer root wins
        let k = sphere.intersect(&ray).unwrap();
        assert!(is_equal(k, 8.0));
    }

    #[test]
    fn ray_past_the_sphere_misses() {
        let sphere = Sphere::new(Vector3::new(10.0, 0.0, 0.0), 2.0);
        let ray = Ray::between(Vector3::default(), Vector3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn origin_inside_yields_negative_near_root() {
        let sphere = Sphere::new(Vector3::default(), 2.0);
        let ray = Ray::between(Vector3::default(), Vector3::x_axis());

        // smaller root is behind the origin; the kernel does not filter it
        let k = sphere.intersect(&ray).unwrap();
        assert!(is_equal(k, -2.0));
    }
}
