//! Packed vertex record matching the PLY property layout.

use crate::splat::Splat;
use bytemuck::{Pod, Zeroable};

/// One on-disk vertex: 14 floats in header declaration order, 56 bytes,
/// no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PackedSplat {
    pub position: [f32; 3],
    pub sh_dc: [f32; 3],
    pub opacity: f32,
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

impl PackedSplat {
    /// Floats per vertex record.
    pub const FLOATS: usize = 14;
    /// Bytes per vertex record.
    pub const SIZE: usize = Self::FLOATS * 4;

    /// The record as a flat float array, in serialization order.
    pub fn floats(&self) -> &[f32; Self::FLOATS] {
        bytemuck::cast_ref(self)
    }
}

impl From<&Splat> for PackedSplat {
    fn from(splat: &Splat) -> Self {
        Self {
            position: splat.position.to_array(),
            sh_dc: splat.sh_dc.to_array(),
            opacity: splat.opacity,
            rotation: splat.rotation,
            scale: splat.scale.to_array(),
        }
    }
}
