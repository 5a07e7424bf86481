//! Binary PLY encoding of splat grids.

mod packed;
mod writer;

pub use packed::PackedSplat;
pub use writer::{ply_header, write_splats};
