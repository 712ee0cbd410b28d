use crate::{
    color::Color,
    context::RenderContext,
    geometry::{Cube, FACE_COUNT},
    math::{Ray, Vector3},
    scene::Scene,
};

use super::{Incidence, Surface};

/// An opaque box with one flat color per face.
pub struct OpaqueBox {
    cube: Cube,
    colors: [Color; FACE_COUNT],
    id: usize,
    description: String,
}

impl OpaqueBox {
    pub fn new(center: Vector3, normal_a: Vector3, normal_b: Vector3, half_side: f64) -> Self {
        Self {
            cube: Cube::new(center, normal_a, normal_b, half_side),
            colors: [
                Color::new(61, 31, 0),
                Color::new(102, 0, 60),
                Color::new(0, 102, 153),
                Color::new(0, 0, 153),
                Color::new(51, 153, 50),
                Color::new(71, 0, 71),
            ],
            id: 0,
            description: format!(
                "OpaqueBox center {center:?} normal-a {normal_a:?} normal-b {normal_b:?}"
            ),
        }
    }
}

impl Surface for OpaqueBox {
    fn incident(
        &self,
        _scene: &Scene,
        ctx: &mut RenderContext,
        ray: &Ray,
        _current_best_k: f64,
    ) -> Option<Incidence> {
        let (k, face_idx) = self.cube.intersect(ray)?;
        ctx.trace(self.description(), ray);

        Some(Incidence {
            k,
            color: self.colors[face_idx],
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
