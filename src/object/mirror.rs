use crate::{
    context::RenderContext,
    geometry::Sphere,
    math::{reflect, Ray, Vector3},
    scene::Scene,
};

use super::{Incidence, Surface};

/// A perfectly reflective sphere.
///
/// Two mirrors facing each other would recurse forever; the per-thread
/// nesting cell in the render context caps the depth, and a capped probe
/// is reported as a miss so another surface (eventually the sky) supplies
/// the color.
pub struct MirrorSphere {
    sphere: Sphere,
    id: usize,
    description: String,
}

const MAX_NESTING: isize = 10;
const REFLECTANCE: f64 = 0.8;

impl MirrorSphere {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Self {
            sphere: Sphere::new(center, radius),
            id: 0,
            description: format!("MirrorSphere center {center:?} radius {radius}"),
        }
    }
}

impl Surface for MirrorSphere {
    fn incident(
        &self,
        scene: &Scene,
        ctx: &mut RenderContext,
        ray: &Ray,
        _current_best_k: f64,
    ) -> Option<Incidence> {
        if *ctx.cell(self.id) >= MAX_NESTING {
            return None;
        }

        let k = self.sphere.intersect(ray)?;
        if k < 0.0 {
            return None;
        }

        let touch_point = ray.along(k);
        let normal = (touch_point - self.sphere.center()).normalize();
        let reflected = reflect(ray, touch_point, normal);
        ctx.trace(self.description(), ray);

        *ctx.cell(self.id) += 1;
        let color = scene.render_pixel(&reflected, ctx) * REFLECTANCE;
        *ctx.cell(self.id) -= 1;

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
