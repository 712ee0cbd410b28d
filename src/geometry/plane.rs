use crate::math::{is_zero, Ray, Vector3};

/// An infinite plane: all `p` such that `(p - point) . normal == 0`.
///
/// The sign of the normal is meaningful to callers; it names the
/// outward-facing side.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    normal: Vector3,
    point: Vector3,
}

impl Plane {
    pub fn new(normal: Vector3, point: Vector3) -> Self {
        Self { normal, point }
    }

    /// Build the plane through three points; the normal follows the
    /// right-hand rule over `points[1] - points[0]` and
    /// `points[2] - points[0]`.
    pub fn from_points(points: &[Vector3; 3]) -> Self {
        let normal = (points[1] - points[0])
            .cross(points[2] - points[0])
            .normalize();
        Self::new(normal, points[0])
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn point(&self) -> Vector3 {
        self.point
    }

    /// The unique parameter at which the ray meets the plane, or `None`
    /// when the ray is parallel to it. The sign of the result is
    /// unconstrained; callers filter for `k >= 0` as needed.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(ray.direction);
        if is_zero(denom) {
            return None;
        }

        Some((self.point - ray.origin).dot(self.normal) / denom)
    }

    /// Whether `p` lies in the plane, within tolerance.
    pub fn contains(&self, p: Vector3) -> bool {
        is_zero((p - self.point).dot(self.normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_equal;

    #[test]
    fn ray_meets_offset_horizontal_plane_at_unit_parameter() {
        let plane = Plane::new(Vector3::z_axis(), Vector3::new(0.0, 0.0, 1.0));
        let ray = Ray::between(Vector3::default(), Vector3::new(0.0, 0.0, 1.0));

        let k = plane.intersect(&ray).unwrap();
        assert!(is_equal(k, 1.0));
        assert!(plane.contains(ray.along(k)));
    }

    #[test]
    fn parallel_ray_misses() {
        let plane = Plane::new(Vector3::z_axis(), Vector3::new(0.0, 0.0, 1.0));
        let ray = Ray::between(Vector3::default(), Vector3::x_axis());
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn intersection_parameter_may_be_negative() {
        let plane = Plane::new(Vector3::z_axis(), Vector3::new(0.0, 0.0, -2.0));
        let ray = Ray::between(Vector3::default(), Vector3::new(0.0, 0.0, 1.0));
        assert!(is_equal(plane.intersect(&ray).unwrap(), -2.0));
    }
}
