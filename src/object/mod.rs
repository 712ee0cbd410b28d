mod checkerboard;
mod mirror;
mod opaque;
mod refractive;
mod sky;

pub use checkerboard::*;
pub use mirror::*;
pub use opaque::*;
pub use refractive::*;
pub use sky::*;

use crate::{color::Color, context::RenderContext, math::Ray, scene::Scene};

/// The result of a ray striking a surface: the ray parameter of the hit
/// and the color the surface resolves to there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Incidence {
    pub k: f64,
    pub color: Color,
}

/// A trait for every surface that can appear in a scene.
///
/// A surface is probed through `incident`; recursive surfaces re-enter the
/// scene through the `scene` argument, sharing the caller's context so
/// their nesting caps hold across a whole reflected/refracted chain. The
/// only state a surface may mutate is its own cell in that context.
pub trait Surface: Send + Sync {
    /// Probe this surface with a ray. `current_best_k` is the smallest
    /// parameter any other surface has produced for this pixel so far
    /// (infinity if none); surfaces may use it for early rejection.
    fn incident(
        &self,
        scene: &Scene,
        ctx: &mut RenderContext,
        ray: &Ray,
        current_best_k: f64,
    ) -> Option<Incidence>;

    /// Prepare this surface's per-thread state. Runs once per context
    /// before any pixel is rendered with it.
    fn initialize(&self, ctx: &mut RenderContext) {
        ctx.reset(self.object_id());
    }

    /// The dense id the owning scene assigned to this surface.
    fn object_id(&self) -> usize;

    /// Store the scene-assigned id. Called exactly once, by
    /// `Scene::finalize`.
    fn assign_object_id(&mut self, id: usize);

    /// A human-readable description, used by incidence tracing.
    fn description(&self) -> &str;
}
