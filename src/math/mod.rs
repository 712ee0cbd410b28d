mod ray;
mod vector;

pub use ray::*;
pub use vector::*;

/// Tolerance used by every geometric predicate when comparing derived
/// scalars (dot products expected to vanish, cross-product magnitudes,
/// axis ratios). Chained f64 arithmetic over scene-scale coordinates
/// accumulates round-off well below this.
pub const EPSILON: f64 = 1e-6;

/// Distance a secondary ray is pushed along the surface normal so it does
/// not immediately re-intersect the surface it just left.
pub const SURFACE_BIAS: f64 = 1e-3;

/// Whether a derived scalar should be treated as zero.
pub fn is_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Whether two derived scalars should be treated as equal.
pub fn is_equal(a: f64, b: f64) -> bool {
    is_zero(a - b)
}

/// Mirror-reflect a ray about `normal` at `point`. The returned ray starts
/// slightly off the surface along the normal.
pub fn reflect(ray: &Ray, point: Vector3, normal: Vector3) -> Ray {
    let incoming_inverse = (-ray.direction).normalize();
    let along_normal = normal * incoming_inverse.dot(normal);
    let direction = along_normal * 2.0 - incoming_inverse;
    Ray::new(point + normal * SURFACE_BIAS, direction)
}

/// Refract a ray through the boundary at `point` with the given relative
/// refractive index, per Snell's law in vector form.
///
/// When the discriminant shows no real refraction angle exists the ray is
/// totally internally reflected instead; the returned flag distinguishes
/// the two outcomes.
pub fn refract(ray: &Ray, point: Vector3, normal: Vector3, relative_index: f64) -> (Ray, bool) {
    let cos_incoming = ray.direction.normalize().dot(normal);
    let sin_sqr_transmitted = relative_index.powi(2) * (1.0 - cos_incoming.powi(2));
    let disc = 1.0 - sin_sqr_transmitted;

    if disc >= 0.0 {
        let along_normal = relative_index * cos_incoming - disc.sqrt();
        let direction = ray.direction * relative_index + normal * along_normal;
        return (Ray::new(point, direction), false);
    }

    (reflect(ray, point, normal), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_head_on_reverses_direction() {
        let ray = Ray::new(Vector3::default(), Vector3::new(0.0, 0.0, -1.0));
        let reflected = reflect(&ray, Vector3::default(), Vector3::new(0.0, 0.0, 1.0));
        assert!(reflected
            .direction
            .normalize()
            .approx_eq(Vector3::new(0.0, 0.0, 1.0)));
        // offset along the normal, off the surface
        assert!(reflected.origin.z > 0.0);
    }

    #[test]
    fn reflect_at_angle_mirrors_tangential_component() {
        let ray = Ray::new(Vector3::new(-1.0, 0.0, 1.0), Vector3::new(1.0, 0.0, -1.0));
        let reflected = reflect(&ray, Vector3::default(), Vector3::new(0.0, 0.0, 1.0));
        assert!(reflected
            .direction
            .normalize()
            .approx_eq(Vector3::new(1.0, 0.0, 1.0).normalize()));
    }

    #[test]
    fn refract_below_critical_angle_is_not_tir() {
        // shallow entry into the denser medium
        let ray = Ray::new(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.2, 0.0, -1.0));
        let (_, tir) = refract(
            &ray,
            Vector3::default(),
            Vector3::new(0.0, 0.0, 1.0),
            1.0 / 1.3,
        );
        assert!(!tir);
    }

    #[test]
    fn refract_past_critical_angle_reflects() {
        // grazing exit from the denser medium: sin^2 of the transmitted
        // angle exceeds 1, so no real refraction angle exists
        let ray = Ray::new(Vector3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, -0.1));
        let normal = Vector3::new(0.0, 0.0, 1.0);
        let (out, tir) = refract(&ray, Vector3::default(), normal, 1.3);
        assert!(tir);
        // the fallback is a mirror reflection back off the boundary
        assert!(out.direction.dot(normal) > 0.0);
        assert!(out.origin.z > 0.0);
    }
}
