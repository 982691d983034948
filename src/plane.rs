//! Plane math: signed distance, segment intersection, and face splitting.

use crate::face::Face;
use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

// Face classification constants, combined bitwise per vertex.
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// An oriented plane in 3-space.
///
/// Stored as a unit normal plus offset, plane equation `n·p = w`. The
/// positive half-space is the side the normal points into; for the boundary
/// of a watertight solid with outward-facing normals, positive means
/// *outside* the solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    pub normal: Vector3<Real>,
    /// Distance from origin along normal (plane equation: n·p = w)
    pub w: Real,
}

impl Plane {
    /// Create a new plane from a normal vector and distance.
    ///
    /// `normal` is normalized; `w` is taken verbatim as the offset for the
    /// unit normal.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            w,
        }
    }

    /// Create a plane from three points.
    /// The normal direction follows the right-hand rule: (p2-p1) × (p3-p1).
    ///
    /// Collinear points do not define a plane; they yield the fallback
    /// `z = 0` plane rather than a panic, so malformed faces degrade to
    /// wrong-but-structurally-valid trees.
    pub fn from_points(p1: &Point3<Real>, p2: &Point3<Real>, p3: &Point3<Real>) -> Self {
        let normal = (p2 - p1).cross(&(p3 - p1));

        if normal.norm_squared() < EPSILON * EPSILON {
            // Degenerate triangle, return default plane
            return Plane {
                normal: Vector3::z(),
                w: 0.0,
            };
        }

        let normal = normal.normalize();
        let w = normal.dot(&p1.coords);
        Plane { normal, w }
    }

    /// Get the plane normal
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Get the offset (distance from origin)
    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Flip the plane (reverse normal and distance)
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Return a flipped copy of this plane
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance from `point` to the plane: positive on the side the
    /// normal points into.
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Classify a point as [`FRONT`], [`BACK`], or [`COPLANAR`] within
    /// [`EPSILON`].
    pub fn orient_point(&self, point: &Point3<Real>) -> i8 {
        let distance = self.signed_distance(point);
        if distance > EPSILON {
            FRONT
        } else if distance < -EPSILON {
            BACK
        } else {
            COPLANAR
        }
    }

    /// Intersect the segment `start..end` with the plane.
    ///
    /// Returns the parametric fraction `t ∈ [0, 1]` along the segment and
    /// the intersection point, or `None` when the segment is parallel to the
    /// plane or the crossing lies outside the segment.
    pub fn hit_test(
        &self,
        start: &Point3<Real>,
        end: &Point3<Real>,
    ) -> Option<(Real, Point3<Real>)> {
        let direction = end - start;
        let denom = self.normal.dot(&direction);
        if denom.abs() <= EPSILON {
            return None;
        }
        let t = (self.w - self.normal.dot(&start.coords)) / denom;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some((t, start + direction * t))
    }

    /// Classify a whole face with respect to the plane.
    /// Returns a bitmask of [`COPLANAR`], [`FRONT`], and [`BACK`];
    /// [`SPANNING`] means vertices fall strictly on both sides.
    pub fn classify_face(&self, face: &Face) -> i8 {
        face.vertices
            .iter()
            .fold(COPLANAR, |acc, vertex| acc | self.orient_point(vertex))
    }

    /// Splits a face by this plane, returning four buckets:
    /// `(coplanar_front, coplanar_back, front, back)`.
    ///
    /// A face entirely on one side (on-plane vertices counting as either)
    /// lands unchanged in `front` or `back`. A face whose vertices are all
    /// on-plane lands in the coplanar bucket matching its own facing. A
    /// spanning face is cut into a front fragment and a back fragment that
    /// share the two transition points, keeping the boundary watertight
    /// across arbitrarily many splits. An edge flanked by an on-plane vertex
    /// is never intersected; the on-plane vertex itself joins both
    /// fragments. Fragments left with fewer than 3 vertices are discarded.
    #[allow(clippy::type_complexity)]
    pub fn split_face(&self, face: &Face) -> (Vec<Face>, Vec<Face>, Vec<Face>, Vec<Face>) {
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        // Classify each vertex of the face
        let types: Vec<i8> = face
            .vertices
            .iter()
            .map(|vertex| self.orient_point(vertex))
            .collect();

        let face_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        // Dispatch the easy cases
        match face_type {
            COPLANAR => {
                if self.normal.dot(&face.plane().normal) > 0.0 {
                    coplanar_front.push(face.clone());
                } else {
                    coplanar_back.push(face.clone());
                }
            },
            FRONT => front.push(face.clone()),
            BACK => back.push(face.clone()),

            // True spanning – do the split
            _ => {
                let mut split_front = Vec::<Point3<Real>>::new();
                let mut split_back = Vec::<Point3<Real>>::new();

                for i in 0..face.vertices.len() {
                    // j is the vertex following i, wrapping to close the ring
                    let j = (i + 1) % face.vertices.len();
                    let type_i = types[i];
                    let type_j = types[j];
                    let vertex_i = &face.vertices[i];
                    let vertex_j = &face.vertices[j];

                    // A vertex not strictly behind the plane belongs to the
                    // front fragment, one not strictly in front to the back
                    // fragment; on-plane vertices join both.
                    if type_i != BACK {
                        split_front.push(*vertex_i);
                    }
                    if type_i != FRONT {
                        split_back.push(*vertex_i);
                    }

                    // An edge crossing the plane contributes its exact
                    // intersection point to both fragments.
                    if (type_i | type_j) == SPANNING {
                        if let Some((_, crossing)) = self.hit_test(vertex_i, vertex_j) {
                            split_front.push(crossing);
                            split_back.push(crossing);
                        }
                    }
                }

                if split_front.len() >= 3 {
                    front.push(Face::new(split_front));
                }
                if split_back.len() >= 3 {
                    back.push(Face::new(split_back));
                }
            },
        }

        (coplanar_front, coplanar_back, front, back)
    }
}
