use crate::math::{is_zero, Ray, Vector3};

use super::Plane;

/// A plane restricted to a rectangle, described by two orthonormal
/// in-plane axes and a `[begin, end]` bound along each.
///
/// Built from three corners: `corners[1]` is the corner shared by both
/// edges, `corners[0]` ends the first edge and `corners[2]` the second.
/// The fourth corner is implied. The edges must be perpendicular.
#[derive(Clone, Copy, Debug)]
pub struct RectanglePlaneSegment {
    container: Plane,
    axis_0: Vector3,
    axis_1: Vector3,
    axis_0_begin: f64,
    axis_0_end: f64,
    axis_1_begin: f64,
    axis_1_end: f64,
}

impl RectanglePlaneSegment {
    pub fn new(corners: &[Vector3; 3]) -> Self {
        let container = Plane::from_points(corners);
        debug_assert!(corners.iter().all(|&c| container.contains(c)));

        let axis_0 = (corners[0] - corners[1]).normalize();
        let axis_1 = (corners[2] - corners[1]).normalize();
        assert!(is_zero(axis_0.dot(axis_1)), "rectangle edges must be perpendicular");

        Self {
            container,
            axis_0,
            axis_1,
            axis_0_begin: corners[1].dot(axis_0),
            axis_0_end: corners[0].dot(axis_0),
            axis_1_begin: corners[1].dot(axis_1),
            axis_1_end: corners[2].dot(axis_1),
        }
    }

    pub fn container(&self) -> &Plane {
        &self.container
    }

    /// Outward normal of the containing plane.
    pub fn normal(&self) -> Vector3 {
        self.container.normal()
    }

    /// Intersect the containing plane, then reject hit points whose
    /// projection on either in-plane axis falls outside the bounds.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let k = self.container.intersect(ray)?;
        let point = ray.along(k);

        let component_0 = point.dot(self.axis_0);
        if component_0 < self.axis_0_begin || component_0 > self.axis_0_end {
            return None;
        }

        let component_1 = point.dot(self.axis_1);
        if component_1 < self.axis_1_begin || component_1 > self.axis_1_end {
            return None;
        }

        Some(k)
    }
}
