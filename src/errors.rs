//! Decode errors for the serialized tree format

use std::fmt::Display;

/// Everything that can go wrong while reading a serialized tree back in.
///
/// Encoding is infallible; only [`BspTree::from_bytes`](crate::BspTree::from_bytes)
/// produces these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// (Truncated) The buffer ends before the node records it promises
    Truncated { needed: usize, available: usize },
    /// (ChildOutOfRange) A node references a child index beyond the node count
    ChildOutOfRange { index: u32, node_count: u32 },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Truncated { needed, available } => write!(
                f,
                "(Truncated) buffer holds {} bytes but the header requires {}",
                available, needed
            ),
            DecodeError::ChildOutOfRange { index, node_count } => write!(
                f,
                "(ChildOutOfRange) child index {} is out of range for {} nodes",
                index, node_count
            ),
        }
    }
}
