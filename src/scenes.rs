//! Named scene generators. Each populates a scene with surfaces and
//! returns the camera it should be shot with.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::{
    camera::Camera,
    error::{Error, Result},
    geometry::Plane,
    math::Vector3,
    object::{CheckerPlane, MirrorSphere, OpaqueBox, RefractiveBox, Sky},
    scene::Scene,
};

pub type SceneGenerator = fn(&mut Scene) -> Camera;

/// The registry of generators, in display order.
pub fn generators() -> &'static [(&'static str, SceneGenerator)] {
    &[
        ("basic", generate_basic_scene),
        ("sphere", generate_sphere_scene),
        ("refraction", generate_refraction_scene),
        ("showcase", generate_showcase_scene),
    ]
}

pub fn by_name(name: &str) -> Result<SceneGenerator> {
    generators()
        .iter()
        .find(|(generator_name, _)| *generator_name == name)
        .map(|(_, generator)| *generator)
        .ok_or_else(|| Error::UnknownScene(name.to_owned()))
}

/// A pair of orthogonal, tilted box normals to seed the generators with.
fn tilted_normals() -> (Vector3, Vector3) {
    let diagonal = (Vector3::z_axis() + Vector3::y_axis()) * FRAC_1_SQRT_2;
    (
        Vector3::x_axis() + diagonal,
        Vector3::x_axis() - diagonal,
    )
}

/// Place the shared lattice of eight boxes ahead of the camera, tumbling
/// each one a bit further than the last. `place` decides what kind of box
/// goes at each slot.
fn add_box_lattice(
    scene: &mut Scene,
    normal_a: &mut Vector3,
    normal_b: &mut Vector3,
    mut place: impl FnMut(&mut Scene, usize, Vector3, Vector3, Vector3),
) {
    *normal_a = normal_a.rotate(0.1, *normal_b);
    *normal_b = normal_b.rotate(0.1, *normal_a);

    for i in 0..8usize {
        let position = Vector3::x_axis() * 3500.0
            + Vector3::y_axis() * (1500.0 * (i as f64 - 4.0))
            + Vector3::z_axis() * (1200.0 * ((i % 4) as f64 - 2.0));
        place(scene, i, position, *normal_a, *normal_b);

        *normal_a = normal_a.rotate(0.3, *normal_b);
        *normal_b = normal_b.rotate(1.3, *normal_a);
    }
}

/// Eight tumbling opaque boxes under a gradient sky.
fn generate_basic_scene(scene: &mut Scene) -> Camera {
    let (mut normal_a, mut normal_b) = tilted_normals();
    add_box_lattice(scene, &mut normal_a, &mut normal_b, |scene, _, pos, a, b| {
        scene.add_object(Box::new(OpaqueBox::new(pos, a, b, 200.0)));
    });

    scene.add_object(Box::new(Sky::gradient()));

    Camera::new(6.0, 2000, 2000, 150, Vector3::default())
}

/// The box lattice plus three mirror spheres reflecting it and each other.
fn generate_sphere_scene(scene: &mut Scene) -> Camera {
    let (mut normal_a, mut normal_b) = tilted_normals();
    add_box_lattice(scene, &mut normal_a, &mut normal_b, |scene, _, pos, a, b| {
        scene.add_object(Box::new(OpaqueBox::new(pos, a, b, 200.0)));
    });

    scene.add_object(Box::new(Sky::gradient()));

    let sphere_pos_a = Vector3::new(4500.0, 2000.0, 2000.0);
    let sphere_pos_b = Vector3::new(4500.0, -2000.0, -2000.0);
    let sphere_pos_c = Vector3::new(3500.0, 0.0, 0.0);
    scene.add_object(Box::new(MirrorSphere::new(sphere_pos_a, 600.0)));
    scene.add_object(Box::new(MirrorSphere::new(sphere_pos_b, 600.0)));
    scene.add_object(Box::new(MirrorSphere::new(sphere_pos_c, 600.0)));

    Camera::new(6.0, 5000, 2500, 200, Vector3::default())
}

/// A close-up of a refractive box bending a checkerboard backdrop.
fn generate_refraction_scene(scene: &mut Scene) -> Camera {
    let backdrop = Plane::new(-Vector3::x_axis(), Vector3::x_axis() * 250.0);
    scene.add_object(Box::new(CheckerPlane::new(backdrop, Vector3::y_axis(), 150.0)));

    let (mut normal_a, normal_b) = tilted_normals();
    normal_a = normal_a.rotate(0.1, normal_b);

    let box_position = Vector3::new(150.0, 50.0, -15.0);
    scene.add_object(Box::new(RefractiveBox::new(
        box_position,
        normal_a,
        normal_b,
        50.0,
    )));

    Camera::new(6.0, 5000, 2500, 20, Vector3::default())
}

/// Everything at once: the lattice with every third box refractive, three
/// mirror spheres, and one refractive box close to the camera.
fn generate_showcase_scene(scene: &mut Scene) -> Camera {
    let (mut normal_a, mut normal_b) = tilted_normals();
    add_box_lattice(scene, &mut normal_a, &mut normal_b, |scene, i, pos, a, b| {
        if i % 3 == 0 {
            scene.add_object(Box::new(RefractiveBox::new(pos, a, b, 200.0)));
        } else {
            scene.add_object(Box::new(OpaqueBox::new(pos, a, b, 200.0)));
        }
    });

    normal_a = normal_a.rotate(0.3, normal_b);
    normal_b = normal_b.rotate(1.3, normal_a);

    scene.add_object(Box::new(Sky::gradient()));

    scene.add_object(Box::new(MirrorSphere::new(
        Vector3::new(4500.0, 2000.0, 2000.0),
        600.0,
    )));
    scene.add_object(Box::new(MirrorSphere::new(
        Vector3::new(4500.0, -2000.0, -2000.0),
        600.0,
    )));
    scene.add_object(Box::new(MirrorSphere::new(
        Vector3::new(3500.0, 0.0, 0.0),
        600.0,
    )));

    scene.add_object(Box::new(RefractiveBox::new(
        Vector3::new(1500.0, 500.0, -500.0),
        normal_a,
        normal_b,
        200.0,
    )));

    Camera::new(6.0, 5000, 2500, 200, Vector3::default())
}
