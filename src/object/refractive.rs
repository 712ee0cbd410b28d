use crate::{
    context::RenderContext,
    geometry::Cube,
    math::{refract, Ray, Vector3},
    scene::Scene,
};

use super::{Incidence, Surface};

/// A transparent box that bends rays through itself.
///
/// A probe refracts in through the entry face, then bounces inside for up
/// to [`MAX_INTERNAL_BOUNCES`] steps; each step intersects the box again
/// and tries to refract out through the struck face (with its normal
/// flipped, since the ray approaches from inside). The first exit that is
/// not a total internal reflection escapes and is resolved through the
/// scene. Exhausting the bounce budget still trapped is a miss.
pub struct RefractiveBox {
    cube: Cube,
    id: usize,
    description: String,
}

const MAX_NESTING: isize = 10;
const MAX_INTERNAL_BOUNCES: u32 = 30;
const RELATIVE_REFRACTIVE_INDEX: f64 = 1.3;
const TRANSMITTANCE: f64 = 0.9;

impl RefractiveBox {
    pub fn new(center: Vector3, normal_a: Vector3, normal_b: Vector3, half_side: f64) -> Self {
        Self {
            cube: Cube::new(center, normal_a, normal_b, half_side),
            id: 0,
            description: format!(
                "RefractiveBox center {center:?} normal-a {normal_a:?} normal-b {normal_b:?} \
                 half-side {half_side}"
            ),
        }
    }
}

impl Surface for RefractiveBox {
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

        let (entry_k, entry_face) = self.cube.intersect(ray)?;

        let entry_normal = self.cube.face(entry_face).normal();
        let (mut inner, _) = refract(
            ray,
            ray.along(entry_k),
            entry_normal,
            1.0 / RELATIVE_REFRACTIVE_INDEX,
        );

        let mut trapped = true;
        for _ in 0..MAX_INTERNAL_BOUNCES {
            let (k, face_idx) = self.cube.intersect(&inner)?;

            // approached from inside, so the face normal flips
            let normal = -self.cube.face(face_idx).normal();
            let (next, total_internal) =
                refract(&inner, inner.along(k), normal, RELATIVE_REFRACTIVE_INDEX);
            inner = next;
            trapped = total_internal;
            if !trapped {
                break;
            }
        }

        if trapped {
            return None;
        }

        ctx.trace(self.description(), ray);
        *ctx.cell(self.id) += 1;
        let color = scene.render_pixel(&inner, ctx) * TRANSMITTANCE;
        *ctx.cell(self.id) -= 1;

        Some(Incidence {
            k: entry_k,
            color,
        })
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
