use crate::{
    color::Color,
    context::RenderContext,
    math::Ray,
    object::Surface,
};

/// An insertion-ordered collection of surfaces.
///
/// Surfaces are probed brute-force, one after another, per ray; there is
/// no spatial pruning. Object ids are dense and equal each surface's
/// insertion position, assigned exactly once by [`Scene::finalize`]
/// before any rendering.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Surface>>,
}

impl Scene {
    pub fn add_object(&mut self, object: Box<dyn Surface>) {
        self.objects.push(object);
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Assign every surface its dense object id. Must run once, after
    /// construction and before any render.
    pub fn finalize(&mut self) {
        for (id, object) in self.objects.iter_mut().enumerate() {
            object.assign_object_id(id);
        }
    }

    /// Run every surface's per-thread initialization hook against a fresh
    /// context. Each rendering thread does this once for its own context.
    pub fn init_context(&self, ctx: &mut RenderContext) {
        for object in &self.objects {
            object.initialize(ctx);
        }
    }

    /// Resolve a ray to the color of its nearest hit.
    ///
    /// Every surface is probed with the best parameter found so far; a hit
    /// wins only with a strictly smaller nonnegative `k`, so on an exact
    /// tie the earlier-inserted surface keeps the pixel.
    pub fn render_pixel(&self, ray: &Ray, ctx: &mut RenderContext) -> Color {
        let mut smallest_k = f64::INFINITY;
        let mut pixel = Color::default();

        for object in &self.objects {
            if let Some(incidence) = object.incident(self, ctx, ray, smallest_k) {
                if incidence.k >= 0.0 && incidence.k < smallest_k {
                    smallest_k = incidence.k;
                    pixel = incidence.color;
                }
            }
        }

        pixel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Plane;
    use crate::math::Vector3;
    use crate::object::{Incidence, MirrorSphere, Sky};

    /// A single-color test surface backed by an infinite plane.
    struct FlatPlane {
        plane: Plane,
        color: Color,
        id: usize,
        description: String,
    }

    impl FlatPlane {
        fn new(x_offset: f64, color: Color) -> Self {
            Self {
                plane: Plane::new(-Vector3::x_axis(), Vector3::x_axis() * x_offset),
                color,
                id: 0,
                description: format!("FlatPlane at x = {x_offset}"),
            }
        }
    }

    impl Surface for FlatPlane {
        fn incident(
            &self,
            _scene: &Scene,
            _ctx: &mut RenderContext,
            ray: &Ray,
            _current_best_k: f64,
        ) -> Option<Incidence> {
            self.plane.intersect(ray).map(|k| Incidence {
                k,
                color: self.color,
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

    fn context_for(scene: &Scene) -> RenderContext {
        let mut ctx = RenderContext::new(scene.object_count(), false);
        scene.init_context(&mut ctx);
        ctx
    }

    fn probe(scene: &Scene) -> Color {
        let mut ctx = context_for(scene);
        let ray = Ray::between(Vector3::default(), Vector3::x_axis());
        scene.render_pixel(&ray, &mut ctx)
    }

    #[test]
    fn closer_surface_wins() {
        let red = Color::new(255, 0, 0);
        let green = Color::new(0, 255, 0);

        let mut scene = Scene::default();
        scene.add_object(Box::new(FlatPlane::new(10.0, green)));
        scene.add_object(Box::new(FlatPlane::new(5.0, red)));
        scene.finalize();

        assert_eq!(probe(&scene), red);
    }

    #[test]
    fn first_inserted_surface_wins_ties() {
        let red = Color::new(255, 0, 0);
        let green = Color::new(0, 255, 0);

        let mut scene = Scene::default();
        scene.add_object(Box::new(FlatPlane::new(5.0, red)));
        scene.add_object(Box::new(FlatPlane::new(5.0, green)));
        scene.finalize();

        assert_eq!(probe(&scene), red);
    }

    #[test]
    fn surface_behind_the_ray_is_ignored() {
        let red = Color::new(255, 0, 0);

        let mut scene = Scene::default();
        scene.add_object(Box::new(FlatPlane::new(-5.0, red)));
        scene.finalize();

        assert_eq!(probe(&scene), Color::default());
    }

    #[test]
    fn sky_yields_to_any_other_hit() {
        let red = Color::new(255, 0, 0);

        let mut scene = Scene::default();
        scene.add_object(Box::new(Sky::uniform()));
        scene.add_object(Box::new(FlatPlane::new(5.0, red)));
        scene.finalize();

        // sky is probed first but only claims pixels nothing else hit
        assert_eq!(probe(&scene), red);

        let mut empty = Scene::default();
        empty.add_object(Box::new(Sky::uniform()));
        empty.finalize();
        assert_eq!(probe(&empty), Color::white());
    }

    #[test]
    fn tracing_records_matched_surface_descriptions() {
        let mut scene = Scene::default();
        scene.add_object(Box::new(Sky::uniform()));
        scene.finalize();

        let mut ctx = RenderContext::new(scene.object_count(), true);
        scene.init_context(&mut ctx);
        let ray = Ray::between(Vector3::default(), Vector3::x_axis());
        scene.render_pixel(&ray, &mut ctx);

        let trace = ctx.take_trace().unwrap();
        assert!(trace.contains("Sky uniform"));
    }

    #[test]
    fn facing_mirrors_terminate_within_the_nesting_cap() {
        let mut scene = Scene::default();
        scene.add_object(Box::new(MirrorSphere::new(Vector3::x_axis() * 10.0, 2.0)));
        scene.add_object(Box::new(MirrorSphere::new(Vector3::x_axis() * -10.0, 2.0)));
        scene.add_object(Box::new(Sky::uniform()));
        scene.finalize();

        let mut ctx = context_for(&scene);
        let ray = Ray::between(Vector3::default(), Vector3::x_axis());

        // must come back instead of recursing forever; the bounced light
        // is repeatedly attenuated, so the result is darker than the sky
        let color = scene.render_pixel(&ray, &mut ctx);
        assert!(color.r < 255);

        // the nesting counters unwound
        for id in 0..scene.object_count() {
            assert_eq!(*ctx.cell(id), 0);
        }
    }
}
