//! Point-in-solid queries over watertight polygonal volumes, built on a
//! [BSP](https://en.wikipedia.org/wiki/Binary_space_partitioning) tree stored
//! as a flat, index-linked node array.
//!
//! A [`BspTree`] is constructed once from the boundary [`Face`]s of a closed
//! solid and is read-only afterwards: [`BspTree::contains`] and
//! [`BspTree::classify_point`] never mutate, so a built tree can be queried
//! from multiple threads without locking.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod plane;
pub mod face;
pub mod bsp;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use bsp::{BspNode, BspTree, Containment, INVALID_NODE_INDEX};
pub use face::Face;
pub use plane::Plane;
