//! [BSP](https://en.wikipedia.org/wiki/Binary_space_partitioning) tree over a
//! solid's boundary faces, answering point-containment queries.

use crate::face::Face;
use crate::float_types::{EPSILON, Real};
use crate::plane::Plane;
use log::{debug, trace};
use nalgebra::{Point3, Vector3};

/// Sentinel child index marking an absent subtree.
pub const INVALID_NODE_INDEX: u32 = u32::MAX;

/// One entry of the flat node array.
///
/// Children are indices into the owning [`BspTree`]'s array rather than
/// owned pointers; [`INVALID_NODE_INDEX`] marks an absent child, and a node
/// with both children absent is a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct BspNode {
    /// Splitting plane, donated by the first face assigned to this node.
    pub plane: Plane,
    /// Index of the positive-side subtree.
    pub front: u32,
    /// Index of the negative-side subtree.
    pub back: u32,
}

impl BspNode {
    /// A fresh leaf with no children and a placeholder plane.
    fn new() -> Self {
        BspNode {
            plane: Plane {
                normal: Vector3::z(),
                w: 0.0,
            },
            front: INVALID_NODE_INDEX,
            back: INVALID_NODE_INDEX,
        }
    }
}

/// Where a query point sits relative to the solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Outside,
    /// Within [`EPSILON`] of the boundary.
    Border,
    Inside,
}

/// A BSP tree over the boundary of a watertight solid.
///
/// Built once from a face list, immutable afterwards: nodes are never
/// reused, reassigned, or rebalanced, and queries are pure reads. Node 0 is
/// the root whenever at least one face was supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BspTree {
    pub(crate) nodes: Vec<BspNode>,
}

impl BspTree {
    /// Create an empty tree; every query on it reports outside.
    pub const fn new() -> Self {
        BspTree { nodes: Vec::new() }
    }

    /// Build a tree from the boundary faces of a closed solid.
    ///
    /// Faces must wind so their normals point out of the solid. An empty
    /// face list yields an empty tree. Construction is deterministic given
    /// the input order.
    pub fn from_faces(faces: &[Face]) -> Self {
        let mut tree = Self::new();
        tree.build(faces);
        tree
    }

    /// Rebuild this tree from `faces`, discarding any previous nodes.
    ///
    /// Runs an explicit worklist of `(face list, target node)` tasks rather
    /// than recursing, so pathological near-linear trees cannot exhaust the
    /// stack.
    pub fn build(&mut self, faces: &[Face]) {
        self.nodes.clear();
        if faces.is_empty() {
            return;
        }

        self.nodes.push(BspNode::new());
        let mut stack: Vec<(Vec<Face>, u32)> = vec![(faces.to_vec(), 0)];

        while let Some((list, target)) = stack.pop() {
            let Some((splitter, rest)) = list.split_first() else {
                continue;
            };

            // The first face donates the splitting plane and is consumed.
            let plane = splitter.plane();

            let mut front = Vec::with_capacity(rest.len() / 2);
            let mut back = Vec::with_capacity(rest.len() / 2);
            let mut coincident = 0usize;

            for face in rest {
                let (coplanar_front, coplanar_back, mut front_parts, mut back_parts) =
                    plane.split_face(face);

                // Faces lying exactly on the splitting plane are assigned
                // to neither side.
                coincident += coplanar_front.len() + coplanar_back.len();

                front.append(&mut front_parts);
                back.append(&mut back_parts);
            }

            if coincident > 0 {
                trace!("dropped {coincident} faces coincident with a splitting plane");
            }

            self.nodes[target as usize].plane = plane;

            if !front.is_empty() {
                let child = self.alloc_node();
                self.nodes[target as usize].front = child;
                stack.push((front, child));
            }
            if !back.is_empty() {
                let child = self.alloc_node();
                self.nodes[target as usize].back = child;
                stack.push((back, child));
            }
        }

        debug!(
            "built BSP tree: {} nodes from {} faces",
            self.nodes.len(),
            faces.len()
        );
    }

    fn alloc_node(&mut self) -> u32 {
        self.nodes.push(BspNode::new());
        (self.nodes.len() - 1) as u32
    }

    /// `true` if no faces were supplied.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The flat node array; index 0 is the root of a non-empty tree.
    pub fn nodes(&self) -> &[BspNode] {
        &self.nodes
    }

    /// Maximum depth of the tree (0 for an empty tree).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = if self.nodes.is_empty() {
            Vec::new()
        } else {
            vec![(0u32, 1usize)]
        };

        while let Some((index, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[index as usize];
            if node.front != INVALID_NODE_INDEX {
                stack.push((node.front, depth + 1));
            }
            if node.back != INVALID_NODE_INDEX {
                stack.push((node.back, depth + 1));
            }
        }
        max_depth
    }

    /// Heap footprint of the node array in bytes.
    pub fn memory_usage(&self) -> usize {
        self.nodes.capacity() * size_of::<BspNode>()
    }

    /// Classify `point` against the solid. An empty tree reports
    /// [`Containment::Outside`] everywhere.
    pub fn classify_point(&self, point: &Point3<Real>) -> Containment {
        if self.nodes.is_empty() {
            return Containment::Outside;
        }
        self.classify_at(0, point)
    }

    /// `true` only for points strictly inside the solid; border points
    /// within [`EPSILON`] of a boundary face report `false`.
    pub fn contains(&self, point: &Point3<Real>) -> bool {
        self.classify_point(point) == Containment::Inside
    }

    fn classify_at(&self, index: u32, point: &Point3<Real>) -> Containment {
        let node = &self.nodes[index as usize];
        let distance = node.plane.signed_distance(point);

        if distance > EPSILON {
            // Past the last positive plane lies open space.
            if node.front != INVALID_NODE_INDEX {
                self.classify_at(node.front, point)
            } else {
                Containment::Outside
            }
        } else if distance < -EPSILON {
            // Behind every boundary plane lies the interior.
            if node.back != INVALID_NODE_INDEX {
                self.classify_at(node.back, point)
            } else {
                Containment::Inside
            }
        } else {
            // On the plane: a missing side counts as border. Only when both
            // sides agree can the point leave the boundary.
            let front_side = if node.front != INVALID_NODE_INDEX {
                self.classify_at(node.front, point)
            } else {
                Containment::Border
            };
            let back_side = if node.back != INVALID_NODE_INDEX {
                self.classify_at(node.back, point)
            } else {
                Containment::Border
            };

            if front_side == back_side {
                front_side
            } else {
                Containment::Border
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BspTree, Containment};
    use crate::face::Face;
    use nalgebra::Point3;

    #[test]
    fn test_empty_tree_reports_outside() {
        let tree = BspTree::new();
        assert!(tree.is_empty());
        assert_eq!(
            tree.classify_point(&Point3::origin()),
            Containment::Outside
        );
        assert!(!tree.contains(&Point3::origin()));
    }

    #[test]
    fn test_single_face_builds_one_node() {
        let face = Face::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);
        let tree = BspTree::from_faces(&[face]);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 1);
    }
}
