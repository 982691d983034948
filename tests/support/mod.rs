//! Test support library
//! Provides various helper functions & utilities for tests.

use bspvol::{Face, float_types::Real};
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a Face from raw coordinate triples.
pub fn make_face(points: &[[Real; 3]]) -> Face {
    Face::new(
        points
            .iter()
            .map(|p| Point3::new(p[0], p[1], p[2]))
            .collect(),
    )
}

/// The six quad faces of the axis-aligned cube `[min, max]^3`, wound so
/// every normal points out of the cube.
pub fn cube_faces(min: Real, max: Real) -> Vec<Face> {
    vec![
        // bottom (z = min), normal -z
        make_face(&[
            [min, min, min],
            [min, max, min],
            [max, max, min],
            [max, min, min],
        ]),
        // top (z = max), normal +z
        make_face(&[
            [min, min, max],
            [max, min, max],
            [max, max, max],
            [min, max, max],
        ]),
        // left (x = min), normal -x
        make_face(&[
            [min, min, min],
            [min, min, max],
            [min, max, max],
            [min, max, min],
        ]),
        // right (x = max), normal +x
        make_face(&[
            [max, min, min],
            [max, max, min],
            [max, max, max],
            [max, min, max],
        ]),
        // front (y = min), normal -y
        make_face(&[
            [min, min, min],
            [max, min, min],
            [max, min, max],
            [min, min, max],
        ]),
        // back (y = max), normal +y
        make_face(&[
            [min, max, min],
            [min, max, max],
            [max, max, max],
            [max, max, min],
        ]),
    ]
}

/// Unit cube `[0, 1]^3` as outward-wound quads.
pub fn unit_cube_faces() -> Vec<Face> {
    cube_faces(0.0, 1.0)
}

/// The four triangular faces of the tetrahedron with vertices at the origin
/// and the three unit axis points, wound outward.
pub fn tetrahedron_faces() -> Vec<Face> {
    vec![
        // base (z = 0), normal -z
        make_face(&[[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]),
        // y = 0 face, normal -y
        make_face(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
        // x = 0 face, normal -x
        make_face(&[[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]]),
        // slanted face, normal (1,1,1)/sqrt(3)
        make_face(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
    ]
}

/// Every distinct vertex appearing in `faces`.
pub fn all_vertices(faces: &[Face]) -> Vec<Point3<Real>> {
    let mut vertices: Vec<Point3<Real>> = Vec::new();
    for face in faces {
        for v in &face.vertices {
            if !vertices.iter().any(|seen| seen == v) {
                vertices.push(*v);
            }
        }
    }
    vertices
}

/// Mean of every vertex of every face; for a closed convex solid this lands
/// strictly inside.
pub fn centroid(faces: &[Face]) -> Point3<Real> {
    let mut sum = Point3::origin().coords;
    let mut count = 0usize;
    for face in faces {
        for v in &face.vertices {
            sum += v.coords;
            count += 1;
        }
    }
    Point3::from(sum / count as Real)
}
