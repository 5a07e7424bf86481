//! Binary PLY serialization.

use crate::ply::PackedSplat;
use crate::splat::SplatGrid;
use std::io::{self, Write};
use tracing::debug;

/// Render the ASCII header declaring `vertex_count` vertices.
///
/// The property order is the contract: it must match the field order of
/// [`PackedSplat`] exactly, since the body is written as flat floats with
/// no per-property framing.
pub fn ply_header(vertex_count: usize) -> String {
    format!(
        "ply\n\
         format binary_little_endian 1.0\n\
         element vertex {vertex_count}\n\
         property float x\n\
         property float y\n\
         property float z\n\
         property float f_dc_0\n\
         property float f_dc_1\n\
         property float f_dc_2\n\
         property float opacity\n\
         property float rot_0\n\
         property float rot_1\n\
         property float rot_2\n\
         property float rot_3\n\
         property float scale_0\n\
         property float scale_1\n\
         property float scale_2\n\
         end_header\n"
    )
}

/// Write the header plus one packed record per live splat, in original
/// index order, and return the total number of bytes written.
///
/// Dead splats are skipped entirely, not zero-filled, so the declared
/// vertex count always equals the number of records in the body. Floats
/// are converted to little-endian explicitly so the output is identical
/// on any host.
pub fn write_splats<W: Write>(writer: &mut W, grid: &SplatGrid) -> io::Result<u64> {
    let live = grid.live_count();
    let header = ply_header(live);
    writer.write_all(header.as_bytes())?;
    let mut written = header.len() as u64;

    for splat in grid.splats().iter().filter(|s| s.alive) {
        let packed = PackedSplat::from(splat);
        for f in packed.floats() {
            writer.write_all(&f.to_le_bytes())?;
        }
        written += PackedSplat::SIZE as u64;
    }

    debug!("wrote {} vertices, {} bytes", live, written);
    Ok(written)
}
