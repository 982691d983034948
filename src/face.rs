//! `Face`: one planar polygon of a solid's boundary.

use crate::float_types::{EPSILON, Real};
use crate::plane::Plane;
use nalgebra::{Point3, Vector3};

/// An ordered, closed polygon ring of 3+ points.
///
/// Faces are assumed planar and non-self-intersecting, and a face list fed
/// to [`BspTree::from_faces`](crate::BspTree::from_faces) is assumed to
/// bound a watertight solid with outward-facing winding. Neither assumption
/// is verified; violating them degrades containment answers without
/// panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub vertices: Vec<Point3<Real>>,
}

impl Face {
    pub const fn new(vertices: Vec<Point3<Real>>) -> Self {
        Face { vertices }
    }

    /// The face's plane, derived from its first three vertices.
    ///
    /// This is the plane the face donates when it is picked as a splitter
    /// during tree construction. Faces with fewer than three vertices get
    /// the fallback `z = 0` plane.
    pub fn plane(&self) -> Plane {
        if self.vertices.len() < 3 {
            return Plane {
                normal: Vector3::z(),
                w: 0.0,
            };
        }
        Plane::from_points(&self.vertices[0], &self.vertices[1], &self.vertices[2])
    }

    /// Unit normal via Newell's method, robust for polygons whose first
    /// three vertices are nearly collinear.
    pub fn normal(&self) -> Vector3<Real> {
        let newell = self.newell();
        if newell.norm_squared() < EPSILON * EPSILON {
            return Vector3::z();
        }
        newell.normalize()
    }

    /// Area of the polygon (exact for planar rings).
    pub fn area(&self) -> Real {
        0.5 * self.newell().norm()
    }

    /// Sum of `curr × next` over the closed vertex ring. Its direction is
    /// the winding normal, its magnitude twice the enclosed area.
    fn newell(&self) -> Vector3<Real> {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .fold(Vector3::zeros(), |acc, (curr, next)| {
                acc + curr.coords.cross(&next.coords)
            })
    }
}
