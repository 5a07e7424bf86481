//! Splat grid construction from decoded image buffers.

use crate::sh::rgb_to_sh_dc;
use crate::splat::{Splat, SplatGrid};
use glam::Vec3;
use image::{GrayImage, RgbImage};
use tracing::debug;

/// Build one splat per pixel from an RGB image and an optional depth map.
///
/// Position is `(x, y, z)` in pixel-grid units, where z is the raw depth
/// byte cast to float (0-255, not rescaled) or 0.0 without a depth map.
/// The depth map, when present, must match the image dimensions exactly;
/// the loader in front of this function rejects mismatched inputs.
pub fn build_splats(image: &RgbImage, depth: Option<&GrayImage>) -> SplatGrid {
    let (width, height) = image.dimensions();
    if let Some(depth) = depth {
        debug_assert_eq!(depth.dimensions(), (width, height));
    }

    let mut splats = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            let p = image.get_pixel(x, y).0;
            let rgb = Vec3::new(
                p[0] as f32 / 255.0,
                p[1] as f32 / 255.0,
                p[2] as f32 / 255.0,
            );
            let z = depth.map_or(0.0, |d| d.get_pixel(x, y).0[0] as f32);
            splats.push(Splat::new(
                Vec3::new(x as f32, y as f32, z),
                rgb_to_sh_dc(rgb),
            ));
        }
    }

    debug!(
        "built {} splats from {}x{} image",
        splats.len(),
        width,
        height
    );
    SplatGrid::new(splats, width, height)
}
