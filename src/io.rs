//! Flat byte-buffer serialization of a built tree.
//!
//! Wire layout, little-endian on every multi-byte field:
//!
//! ```text
//! [u32 node_count]
//! node_count × [normal.x f32][normal.y f32][normal.z f32][w f32][front u32][back u32]
//! ```
//!
//! Plane fields are stored as `f32` regardless of the active `Real`, so a
//! tree built with the `f64` feature loses precision on the wire but decodes
//! to the same structure. Child sentinels round-trip as `0xFFFF_FFFF`.

use crate::bsp::{BspNode, BspTree, INVALID_NODE_INDEX};
use crate::errors::DecodeError;
use crate::float_types::Real;
use crate::plane::Plane;
use byteorder::{ByteOrder, LittleEndian};
use nalgebra::Vector3;

/// Bytes per serialized node: a plane (3×f32 normal + f32 offset) and two
/// u32 child indices.
pub const NODE_WIRE_SIZE: usize = 24;
const COUNT_WIRE_SIZE: usize = 4;

impl BspTree {
    /// Exact size [`to_bytes`](Self::to_bytes) will produce, without
    /// encoding anything.
    pub fn serialized_size(&self) -> usize {
        COUNT_WIRE_SIZE + self.nodes.len() * NODE_WIRE_SIZE
    }

    /// Encode the tree into the wire layout above.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = vec![0u8; self.serialized_size()];
        LittleEndian::write_u32(&mut buffer[..COUNT_WIRE_SIZE], self.nodes.len() as u32);

        for (i, node) in self.nodes.iter().enumerate() {
            let base = COUNT_WIRE_SIZE + i * NODE_WIRE_SIZE;
            let record = &mut buffer[base..base + NODE_WIRE_SIZE];
            LittleEndian::write_f32(&mut record[0..4], node.plane.normal.x as f32);
            LittleEndian::write_f32(&mut record[4..8], node.plane.normal.y as f32);
            LittleEndian::write_f32(&mut record[8..12], node.plane.normal.z as f32);
            LittleEndian::write_f32(&mut record[12..16], node.plane.w as f32);
            LittleEndian::write_u32(&mut record[16..20], node.front);
            LittleEndian::write_u32(&mut record[20..24], node.back);
        }
        buffer
    }

    /// Decode a tree previously produced by [`to_bytes`](Self::to_bytes).
    ///
    /// The node count is validated against the remaining buffer length
    /// before any record is touched, and child indices are validated against
    /// the node count, so corrupt input fails with a [`DecodeError`] instead
    /// of reading out of bounds or panicking on a later query. Trailing
    /// bytes after the node records are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < COUNT_WIRE_SIZE {
            return Err(DecodeError::Truncated {
                needed: COUNT_WIRE_SIZE,
                available: data.len(),
            });
        }
        let node_count = LittleEndian::read_u32(&data[..COUNT_WIRE_SIZE]);

        let needed = (node_count as usize)
            .checked_mul(NODE_WIRE_SIZE)
            .and_then(|bytes| bytes.checked_add(COUNT_WIRE_SIZE))
            .unwrap_or(usize::MAX);
        if data.len() < needed {
            return Err(DecodeError::Truncated {
                needed,
                available: data.len(),
            });
        }

        let mut nodes = Vec::with_capacity(node_count as usize);
        for record in data[COUNT_WIRE_SIZE..needed].chunks_exact(NODE_WIRE_SIZE) {
            let normal = Vector3::new(
                LittleEndian::read_f32(&record[0..4]) as Real,
                LittleEndian::read_f32(&record[4..8]) as Real,
                LittleEndian::read_f32(&record[8..12]) as Real,
            );
            let w = LittleEndian::read_f32(&record[12..16]) as Real;
            let front = LittleEndian::read_u32(&record[16..20]);
            let back = LittleEndian::read_u32(&record[20..24]);

            for child in [front, back] {
                if child != INVALID_NODE_INDEX && child >= node_count {
                    return Err(DecodeError::ChildOutOfRange {
                        index: child,
                        node_count,
                    });
                }
            }

            nodes.push(BspNode {
                plane: Plane { normal, w },
                front,
                back,
            });
        }

        Ok(BspTree { nodes })
    }
}
