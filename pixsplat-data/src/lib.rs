//! Pixsplat Data Crate
//!
//! Splat construction and serialization for image-to-splat conversion.
//! This crate is GPU-agnostic: it turns decoded image buffers into a dense
//! grid of unoptimized Gaussian splats, optionally merges same-color
//! neighbors, and writes the result as a binary PLY scene.
//!
//! ## Modules
//!
//! - [`sh`]: spherical-harmonic DC color encoding
//! - [`builder`]: one splat per pixel from an image and optional depth map
//! - [`coalesce`]: greedy merging of adjacent same-color splats
//! - [`ply`]: binary PLY encoding of the surviving splats

pub mod builder;
pub mod coalesce;
pub mod ply;
pub mod sh;
pub mod splat;

pub use builder::build_splats;
pub use coalesce::coalesce;
pub use ply::{PackedSplat, ply_header, write_splats};
pub use splat::{Splat, SplatGrid};
