use crate::math::{is_zero, Ray, Vector3};

use super::RectanglePlaneSegment;

pub const FACE_COUNT: usize = 6;

/// A box with arbitrary orientation, composed of six rectangle segments.
///
/// Faces come in axis pairs with a fixed, stable ordering: `2i` is the
/// face on the positive side of axis `i`, `2i + 1` the negative side.
/// Axis 0 and 1 are the two given normals; axis 2 is their cross product.
/// Refraction relies on this ordering to flip the normal of the face a
/// ray exits through.
#[derive(Clone, Debug)]
pub struct Cube {
    faces: [RectanglePlaneSegment; FACE_COUNT],
}

impl Cube {
    /// Build a cube from its center, two orthogonal face normals and the
    /// half side length.
    pub fn new(center: Vector3, normal_a: Vector3, normal_b: Vector3, half_side: f64) -> Self {
        let axis_a = normal_a.normalize();
        let axis_b = normal_b.normalize();
        assert!(is_zero(axis_a.dot(axis_b)), "cube normals must be orthogonal");
        let axis_c = axis_a.cross(axis_b).normalize();

        // per face: outward normal and the two in-plane axes, ordered so
        // the right-hand rule over the corner edges reproduces the
        // outward normal
        let orientations = [
            (axis_a, axis_c, axis_b),
            (-axis_a, axis_b, axis_c),
            (axis_b, axis_a, axis_c),
            (-axis_b, axis_c, axis_a),
            (axis_c, axis_b, axis_a),
            (-axis_c, axis_a, axis_b),
        ];

        let faces = orientations.map(|(outward, u, v)| {
            let face_center = center + outward * half_side;
            let shared = face_center - u * half_side - v * half_side;
            RectanglePlaneSegment::new(&[
                shared + u * (2.0 * half_side),
                shared,
                shared + v * (2.0 * half_side),
            ])
        });

        Self { faces }
    }

    pub fn face(&self, idx: usize) -> &RectanglePlaneSegment {
        &self.faces[idx]
    }

    /// Test all six faces and keep the minimum positive parameter along
    /// with the winning face index. Hits at `k ~ 0` are the face the ray
    /// just left and are skipped, so interior rays emitted exactly on a
    /// face resolve to the far side.
    pub fn intersect(&self, ray: &Ray) -> Option<(f64, usize)> {
        let mut best: Option<(f64, usize)> = None;

        for (idx, face) in self.faces.iter().enumerate() {
            let k = match face.intersect(ray) {
                Some(k) if k >= 0.0 && !is_zero(k) => k,
                _ => continue,
            };
            if best.map_or(true, |(best_k, _)| k < best_k) {
                best = Some((k, idx));
            }
        }

        best
    }
}
