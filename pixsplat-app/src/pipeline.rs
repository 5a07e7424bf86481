//! Image-to-splat conversion pipeline.
//!
//! Orchestrates loading, splat construction, coalescing, and PLY output.
//! Every buffer is owned by the stage using it and dropped on any early
//! return, so failure paths leak nothing.

use crate::errors::PipelineError;
use image::{GrayImage, RgbImage};
use pixsplat_data::{build_splats, coalesce, write_splats};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Summary of one conversion run, for diagnostics.
#[derive(Debug)]
pub struct RunReport {
    /// Vertices declared in the output header.
    pub vertex_count: usize,
    /// Total bytes written, header included.
    pub bytes_written: u64,
    /// Decoded size of the source image (width * height * source channels).
    pub source_bytes: u64,
}

/// Convert `image_path` (plus optional depth map) into a binary PLY splat
/// scene at `output_path`.
pub fn run(
    image_path: &Path,
    depth_path: Option<&Path>,
    output_path: &Path,
) -> Result<RunReport, PipelineError> {
    let start = Instant::now();

    let (image, source_channels) = load_image(image_path)?;
    let (width, height) = image.dimensions();
    debug!(
        "loaded {}x{} image from {}",
        width,
        height,
        image_path.display()
    );

    let depth = depth_path
        .map(|p| load_depth(p, (width, height)))
        .transpose()?;
    if depth.is_some() {
        info!("using depth information");
    }

    let mut grid = build_splats(&image, depth.as_ref());
    let total = grid.len();

    // Depth gives every pixel its own geometric meaning; merging would
    // destroy it, so coalescing only runs for flat images.
    let vertex_count = match depth {
        None => {
            let live = coalesce(&mut grid);
            info!("coalesced {} splats down to {}", total, live);
            live
        }
        Some(_) => total,
    };

    let file = File::create(output_path).map_err(|source| PipelineError::OutputOpen {
        path: output_path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let bytes_written = write_splats(&mut writer, &grid)?;
    writer.flush()?;

    let source_bytes = u64::from(width) * u64::from(height) * u64::from(source_channels);
    info!("output file: {}", output_path.display());
    info!("bytes written: {}", bytes_written);
    info!("source image size: {} bytes", source_bytes);
    info!(
        "bytes per source byte: {:.2}",
        bytes_written as f64 / source_bytes as f64
    );
    info!("elapsed: {:.2?}", start.elapsed());

    Ok(RunReport {
        vertex_count,
        bytes_written,
        source_bytes,
    })
}

/// Decode the input image, forcing RGB8 regardless of the source layout.
/// Also returns the source channel count for the size diagnostics.
fn load_image(path: &Path) -> Result<(RgbImage, u8), PipelineError> {
    let image = image::open(path).map_err(|source| PipelineError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let channels = image.color().channel_count();
    Ok((image.to_rgb8(), channels))
}

/// Decode the depth map, forcing a single Luma8 channel, and reject it if
/// its dimensions differ from the color image's.
fn load_depth(path: &Path, image_dims: (u32, u32)) -> Result<GrayImage, PipelineError> {
    let depth = image::open(path)
        .map_err(|source| PipelineError::DepthLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_luma8();

    if depth.dimensions() != image_dims {
        return Err(PipelineError::DepthDimensionMismatch {
            image_width: image_dims.0,
            image_height: image_dims.1,
            depth_width: depth.dimensions().0,
            depth_height: depth.dimensions().1,
        });
    }
    Ok(depth)
}
