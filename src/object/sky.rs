use std::f64::consts::FRAC_PI_2;

use crate::{color::Color, context::RenderContext, math::Ray, scene::Scene};

use super::{Incidence, Surface};

/// The sky. Reports a hit only when no other surface has, so it can be
/// inserted anywhere in the scene; its hit parameter is the largest finite
/// value so any genuine surface beats it.
pub struct Sky {
    uniform: bool,
    id: usize,
    description: String,
}

impl Sky {
    /// A sky shading from blue overhead to white at the horizon.
    pub fn gradient() -> Self {
        Self {
            uniform: false,
            id: 0,
            description: "Sky gradient".to_owned(),
        }
    }

    /// A flat white sky.
    pub fn uniform() -> Self {
        Self {
            uniform: true,
            id: 0,
            description: "Sky uniform".to_owned(),
        }
    }

    fn color_towards(&self, ray: &Ray) -> Color {
        if self.uniform {
            return Color::white();
        }

        let gradient = ray.direction.horizontal_gradient();
        let angle_ratio = ((gradient * 1.8).atan() / FRAC_PI_2).abs();
        let level = (255.0 * angle_ratio) as u8;
        Color::new(level, level, 255)
    }
}

impl Surface for Sky {
    fn incident(
        &self,
        _scene: &Scene,
        ctx: &mut RenderContext,
        ray: &Ray,
        current_best_k: f64,
    ) -> Option<Incidence> {
        // anything at all was hit already: stay out of the way
        if current_best_k < f64::MAX {
            return None;
        }

        ctx.trace(self.description(), ray);
        Some(Incidence {
            k: f64::MAX,
            color: self.color_towards(ray),
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
