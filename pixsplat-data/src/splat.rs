//! Core splat data types.
//!
//! CPU-side representation of Gaussian splats laid out on the source pixel
//! grid. The packed on-disk layout lives in the `ply` module.

use glam::Vec3;

/// Per-axis scale of a freshly built splat.
pub const DEFAULT_SCALE: f32 = 0.1;

/// Rotation written for every splat.
///
/// Not a unit quaternion: the legacy exporter wrote `[1, 1, 0, 0]` rather
/// than the identity `[1, 0, 0, 0]`, and downstream viewers accept it, so
/// the value is kept verbatim instead of corrected.
pub const FIXED_ROTATION: [f32; 4] = [1.0, 1.0, 0.0, 0.0];

/// A single unoptimized Gaussian splat derived from one source pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splat {
    /// Center position: x, y in pixel-grid units, z from the depth map.
    pub position: Vec3,
    /// Spherical-harmonic DC coefficients encoding base color.
    pub sh_dc: Vec3,
    /// Opacity (always 1.0 for splats this crate builds).
    pub opacity: f32,
    /// Rotation quaternion (x, y, z, w), fixed at [`FIXED_ROTATION`].
    pub rotation: [f32; 4],
    /// Per-axis scale, doubled along an axis when a merge absorbs a
    /// neighbor on that axis.
    pub scale: Vec3,
    /// Liveness flag. Cleared when a merge absorbs this splat; dead splats
    /// are excluded from counting and encoding.
    pub alive: bool,
}

impl Splat {
    /// Create a live splat with the fixed opacity, rotation, and scale.
    pub fn new(position: Vec3, sh_dc: Vec3) -> Self {
        Self {
            position,
            sh_dc,
            opacity: 1.0,
            rotation: FIXED_ROTATION,
            scale: Vec3::splat(DEFAULT_SCALE),
            alive: true,
        }
    }
}

/// A dense row-major grid of splats, one per source pixel.
///
/// Merges never remove entries; they clear `alive` on the absorbed splat,
/// so `len() == width * height` for the lifetime of the grid.
#[derive(Debug, Clone)]
pub struct SplatGrid {
    splats: Vec<Splat>,
    width: u32,
    height: u32,
}

impl SplatGrid {
    /// Wrap a row-major splat buffer with its grid dimensions.
    ///
    /// Panics if the buffer length does not equal `width * height`.
    pub fn new(splats: Vec<Splat>, width: u32, height: u32) -> Self {
        assert_eq!(splats.len(), (width as usize) * (height as usize));
        Self {
            splats,
            width,
            height,
        }
    }

    /// Grid width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of splats, dead ones included.
    pub fn len(&self) -> usize {
        self.splats.len()
    }

    /// True for zero-pixel grids.
    pub fn is_empty(&self) -> bool {
        self.splats.is_empty()
    }

    /// Row-major index of pixel (x, y).
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// All splats in row-major order.
    pub fn splats(&self) -> &[Splat] {
        &self.splats
    }

    /// Mutable access for in-place merging.
    pub fn splats_mut(&mut self) -> &mut [Splat] {
        &mut self.splats
    }

    /// Number of splats still alive.
    pub fn live_count(&self) -> usize {
        self.splats.iter().filter(|s| s.alive).count()
    }
}
