use crate::{
    color::Color,
    context::RenderContext,
    geometry::Plane,
    math::{Ray, Vector3},
    scene::Scene,
};

use super::{Incidence, Surface};

/// An infinite plane colored as a black-and-white checkerboard.
pub struct CheckerPlane {
    plane: Plane,
    check_size: f64,
    axis_0: Vector3,
    axis_1: Vector3,
    id: usize,
    description: String,
}

impl CheckerPlane {
    /// `axis_0` fixes the checkerboard's orientation within the plane;
    /// the second axis is derived to complete the in-plane frame.
    pub fn new(plane: Plane, axis_0: Vector3, check_size: f64) -> Self {
        let axis_1 = axis_0.cross(plane.normal()).normalize();
        Self {
            plane,
            check_size,
            axis_0: axis_0.normalize(),
            axis_1,
            id: 0,
            description: format!(
                "CheckerPlane normal {:?} point {:?} check-size {check_size}",
                plane.normal(),
                plane.point()
            ),
        }
    }
}

impl Surface for CheckerPlane {
    fn incident(
        &self,
        _scene: &Scene,
        ctx: &mut RenderContext,
        ray: &Ray,
        current_best_k: f64,
    ) -> Option<Incidence> {
        let k = self.plane.intersect(ray)?;
        // unbounded surface: anything already closer wins, reject early
        if k > current_best_k {
            return None;
        }

        let point = ray.along(k);
        let component_0 = (point.dot(self.axis_0) / self.check_size) as i64;
        let component_1 = (point.dot(self.axis_1) / self.check_size) as i64;

        let color = if (component_0 % 2) ^ (component_1 % 2) != 0 {
            Color::white()
        } else {
            Color::black()
        };

        ctx.trace(self.description(), ray);
        Some(Incidence { k, color })
    }

    fn object_id(&self) -> usize {
        self.id
    }

    fn assign_object_id(&mut self, id: usize) {
        self.id = id;
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_checker() -> CheckerPlane {
        CheckerPlane::new(
            Plane::new(-Vector3::x_axis(), Vector3::x_axis() * 10.0),
            Vector3::y_axis(),
            1.0,
        )
    }

    fn hit_towards(checker: &CheckerPlane, target: Vector3, best_k: f64) -> Option<Incidence> {
        let scene = Scene::default();
        let mut ctx = RenderContext::new(1, false);
        let ray = Ray::between(Vector3::default(), target);
        checker.incident(&scene, &mut ctx, &ray, best_k)
    }

    #[test]
    fn adjacent_cells_alternate_colors() {
        let checker = sample_checker();

        let origin_cell =
            hit_towards(&checker, Vector3::new(10.0, 0.5, 0.5), f64::INFINITY).unwrap();
        assert_eq!(origin_cell.color, Color::black());

        let one_over =
            hit_towards(&checker, Vector3::new(10.0, 1.5, 0.5), f64::INFINITY).unwrap();
        assert_eq!(one_over.color, Color::white());

        // stepping along both in-plane axes lands back on the same parity
        let diagonal =
            hit_towards(&checker, Vector3::new(10.0, 1.5, 1.5), f64::INFINITY).unwrap();
        assert_eq!(diagonal.color, Color::black());
    }

    #[test]
    fn closer_best_hit_rejects_the_plane_early() {
        let checker = sample_checker();
        assert!(hit_towards(&checker, Vector3::new(10.0, 0.5, 0.5), 0.5).is_none());
    }
}
