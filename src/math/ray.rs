use super::Vector3;

/// The half-line `origin + k * direction`, propagating towards increasing
/// `k`. The direction is not required to be normalized; callers restrict
/// to `k >= 0` when "in front of the camera" semantics are needed.
#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray from an origin and a direction.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// The ray passing from one point towards another.
    pub fn between(from: Vector3, to: Vector3) -> Self {
        Self::new(from, to - from)
    }

    /// The point at parameter `k`.
    pub fn along(&self, k: f64) -> Vector3 {
        self.origin + self.direction * k
    }

    /// Solve for the parameters at which two rays cross.
    ///
    /// From `O + k * D == O' + k' * D'`, crossing both sides with `D'`
    /// eliminates `k'`, leaving `k * (D x D') == (O' - O) x D'`, solved
    /// per axis; `k'` then follows the same way.
    ///
    /// Returns `(k, k')`, or `None` when the rays are parallel or skew and
    /// no exact solution exists.
    pub fn intersect(&self, other: &Ray) -> Option<(f64, f64)> {
        let numerator = (other.origin - self.origin).cross(other.direction);
        let denominator = self.direction.cross(other.direction);
        let k_self = numerator.get_scale(denominator)?;

        let closing = self.along(k_self) - other.origin;
        let k_other = closing.get_scale(other.direction)?;

        Some((k_self, k_other))
    }

    /// The parameter at which this ray passes through `point`, if it does.
    pub fn contains(&self, point: Vector3) -> Option<f64> {
        if self.direction.is_zero() {
            return None;
        }
        (point - self.origin).get_scale(self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_equal;

    #[test]
    fn crossing_rays_intersect() {
        let r0 = Ray::between(Vector3::default(), Vector3::new(1.0, 1.0, 0.0));
        let r1 = Ray::between(Vector3::new(0.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(r0.intersect(&r1).is_some());
    }

    #[test]
    fn ray_intersects_itself() {
        let r0 = Ray::between(Vector3::default(), Vector3::new(1.0, 1.0, 0.0));
        let r1 = Ray::between(Vector3::default(), Vector3::new(1.0, 1.0, 0.0));
        assert!(r0.intersect(&r1).is_some());
    }

    #[test]
    fn skew_rays_do_not_intersect() {
        let r0 = Ray::between(Vector3::default(), Vector3::new(1.0, 1.0, 0.0));
        let r1 = Ray::between(Vector3::x_axis(), Vector3::new(1.0, 1.0, 1.0));
        assert!(r0.intersect(&r1).is_none());
    }

    #[test]
    fn contains_recovers_the_parameter() {
        let ray = Ray::between(Vector3::default(), Vector3::new(2.0, 0.0, 2.0));
        let k = ray.contains(Vector3::new(1.0, 0.0, 1.0)).unwrap();
        assert!(is_equal(k, 0.5));
        assert!(ray.contains(Vector3::new(1.0, 5.0, 1.0)).is_none());
    }
}
